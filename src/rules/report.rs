// SPDX-License-Identifier: MIT

//! Validation report presentation.

use crate::cli::args::OutputFormat;
use crate::error::RuleViolation;
use console::style;

/// Result of checking one commit message.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// The original message text.
    pub message: String,
    /// Where the message came from (file path), if known.
    pub source: Option<String>,
    /// The first violated rule, or `None` when the message passed.
    pub violation: Option<RuleViolation>,
}

impl CheckReport {
    /// Create a report for a passing message.
    pub fn new(message: String) -> Self {
        Self {
            message,
            source: None,
            violation: None,
        }
    }

    /// Create a report carrying a violation.
    pub fn with_violation(message: String, violation: RuleViolation) -> Self {
        Self {
            message,
            source: None,
            violation: Some(violation),
        }
    }

    /// Check if the validation passed.
    pub fn is_valid(&self) -> bool {
        self.violation.is_none()
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => self.print_text(),
        }
    }

    /// Print in text format.
    fn print_text(&self) {
        let status = if self.is_valid() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        let first_line = self.message.lines().next().unwrap_or("");
        match self.source {
            Some(ref source) => {
                println!("{} {} {}", status, style(source).cyan(), first_line)
            }
            None => println!("{} {}", status, first_line),
        }

        if let Some(ref violation) = self.violation {
            println!("  {} {}", style(violation.code()).red(), violation);
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        let json = serde_json::json!({
            "valid": self.is_valid(),
            "file": self.source,
            "message": self.message,
            "error": self.violation.as_ref().map(|v| {
                serde_json::json!({
                    "code": v.code(),
                    "message": v.to_string(),
                })
            }),
        });

        println!(
            "{}",
            serde_json::to_string_pretty(&json).unwrap_or_default()
        );
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        match self.violation {
            None => "Valid".to_string(),
            Some(ref violation) => format!("Invalid ({})", violation.code()),
        }
    }
}
