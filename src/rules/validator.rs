// SPDX-License-Identifier: MIT

//! The validation routine.
//!
//! A single forward pass over the message lines. Comment lines are
//! skipped entirely; every other line is length-checked and then
//! dispatched on its logical index (header, blank separator, first body
//! line). The first violated rule ends the pass.

use crate::config::CheckConfig;
use crate::error::RuleViolation;

use super::header::HeaderParts;

/// Validate a commit message against the configured rules.
///
/// `lines` are the raw message lines with terminators already stripped.
/// Returns the first violation found, in rule order.
pub fn validate<S: AsRef<str>>(lines: &[S], config: &CheckConfig) -> Result<(), RuleViolation> {
    if lines.is_empty() {
        return Err(RuleViolation::EmptyMessage);
    }

    // incremented for every non-comment line
    let mut logical = 0;

    for raw in lines {
        let line = raw.as_ref();

        if config.verbose {
            tracing::debug!(logical, content = line, "process line");
        }

        // skip comments
        if line.trim().starts_with('#') {
            continue;
        }

        let length = line.chars().count();
        if length > config.max_line_length {
            return Err(RuleViolation::LineTooLong {
                line: logical,
                length,
                max: config.max_line_length,
            });
        }

        match logical {
            0 => check_header(line, config)?,
            1 => check_separator(line)?,
            2 => check_body_start(line)?,
            _ => {}
        }

        logical += 1;
    }

    Ok(())
}

/// Check the header line: shape, prefix, component, summary, in order.
fn check_header(line: &str, config: &CheckConfig) -> Result<(), RuleViolation> {
    let parts = HeaderParts::parse(line).ok_or_else(|| RuleViolation::MalformedHeader {
        header: line.trim().to_string(),
    })?;

    if !config.allowed_prefixes.contains(parts.prefix) {
        return Err(RuleViolation::PrefixNotAllowed {
            prefix: parts.prefix.to_string(),
            allowed: config.allowed_prefixes_display(),
        });
    }

    if let Some(component) = parts.component {
        check_component(component, config)?;
    }

    check_summary(parts.summary, config)
}

/// Check the bracketed component against its constraints.
///
/// The space check cannot fire for a component that came through the
/// header pattern, but it stays an explicit rule of its own.
fn check_component(component: &str, config: &CheckConfig) -> Result<(), RuleViolation> {
    let length = component.chars().count();
    if length > config.component_budget() {
        return Err(RuleViolation::ComponentTooLong {
            length,
            max: config.component_budget(),
        });
    }

    match component.chars().next() {
        Some(c) if c.is_lowercase() => {}
        _ => {
            return Err(RuleViolation::ComponentNotLowercase {
                component: component.to_string(),
            })
        }
    }

    if component.contains(' ') {
        return Err(RuleViolation::ComponentContainsSpace {
            component: component.to_string(),
        });
    }

    Ok(())
}

/// Check the summary against its constraints.
fn check_summary(summary: &str, config: &CheckConfig) -> Result<(), RuleViolation> {
    let length = summary.chars().count();
    if length > config.max_summary_length {
        return Err(RuleViolation::SummaryTooLong {
            length,
            max: config.max_summary_length,
        });
    }

    match summary.chars().next() {
        Some(c) if c.is_lowercase() => {}
        _ => return Err(RuleViolation::SummaryNotLowercaseStart),
    }

    match summary.chars().last() {
        Some(c) if is_word_char(c) => {}
        _ => return Err(RuleViolation::SummaryEndsWithPunctuation),
    }

    if summary.split(' ').count() <= 2 {
        return Err(RuleViolation::SummaryTrivial);
    }

    Ok(())
}

/// The second logical line must be blank.
fn check_separator(line: &str) -> Result<(), RuleViolation> {
    if line.trim().is_empty() {
        Ok(())
    } else {
        Err(RuleViolation::MissingBlankSeparator)
    }
}

/// The first body line must open with a list marker or an upper case
/// letter.
fn check_body_start(line: &str) -> Result<(), RuleViolation> {
    match line.chars().next() {
        Some(c) if c == '*' || c == '-' || c.is_uppercase() => Ok(()),
        _ => Err(RuleViolation::BodyMustStartProperly),
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
