// SPDX-License-Identifier: MIT

//! Validation configuration.
//!
//! All configuration arrives through the CLI; there is no config file.
//! Defaults live here so the validator itself never touches global state.

use std::collections::BTreeSet;

/// Prefixes accepted by the default configuration.
pub const DEFAULT_PREFIXES: &[&str] = &[
    "new", "fix", "refactor", "docs", "minor", "build", "misc",
];

/// Configuration for a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Maximum character count per non-comment line.
    pub max_line_length: usize,

    /// Maximum character count for the header summary.
    /// Must not exceed `max_line_length`.
    pub max_summary_length: usize,

    /// Prefixes that may start the header (case-sensitive membership).
    pub allowed_prefixes: BTreeSet<String>,

    /// Emit a per-line trace record while validating.
    pub verbose: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            max_line_length: 72,
            max_summary_length: 50,
            allowed_prefixes: DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect(),
            verbose: false,
        }
    }
}

impl CheckConfig {
    /// Character budget for a bracketed component: whatever the line
    /// allows beyond the summary.
    pub fn component_budget(&self) -> usize {
        self.max_line_length.saturating_sub(self.max_summary_length)
    }

    /// The allow-list as a display string for diagnostics.
    pub fn allowed_prefixes_display(&self) -> String {
        self.allowed_prefixes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
