// SPDX-License-Identifier: MIT

//! Error types for the gmc application.
//!
//! Rule violations are expected business outcomes, not exceptional
//! failures: the validator returns the first one it finds and the CLI
//! layer turns it into an exit code.

use thiserror::Error;

/// The main error type for gmc operations.
#[derive(Error, Debug)]
pub enum GmcError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Rule violations
    #[error("Validation error: {0}")]
    Validation(#[from] RuleViolation),

    // IO errors (reading the message file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// A violated commit message rule.
///
/// One variant per rule; each message carries the concrete numbers and
/// strings involved so the diagnostic is actionable on its own.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Commit message must not be empty")]
    EmptyMessage,

    #[error("Line {line} exceeds character limit ({length} > {max})")]
    LineTooLong {
        line: usize,
        length: usize,
        max: usize,
    },

    #[error("Header '{header}' does not match 'prefix[component]: summary'")]
    MalformedHeader { header: String },

    #[error("Prefix '{prefix}' is not allowed (expected one of: {allowed})")]
    PrefixNotAllowed { prefix: String, allowed: String },

    #[error("Component exceeds character limit ({length} > {max})")]
    ComponentTooLong { length: usize, max: usize },

    #[error("Component '{component}' must start with a lower case letter")]
    ComponentNotLowercase { component: String },

    #[error("Component '{component}' must not contain spaces")]
    ComponentContainsSpace { component: String },

    #[error("Summary exceeds character limit ({length} > {max})")]
    SummaryTooLong { length: usize, max: usize },

    #[error("Summary must start with a lower case letter")]
    SummaryNotLowercaseStart,

    #[error("Summary must end with a regular character (no punctuation)")]
    SummaryEndsWithPunctuation,

    #[error("Summary is trivial, please provide a meaningful summary")]
    SummaryTrivial,

    #[error("Details must be separated from header by an empty line")]
    MissingBlankSeparator,

    #[error("Details must start with an upper case letter or a Markdown list")]
    BodyMustStartProperly,
}

impl RuleViolation {
    /// Stable rule identifier for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            RuleViolation::EmptyMessage => "empty-message",
            RuleViolation::LineTooLong { .. } => "line-max-length",
            RuleViolation::MalformedHeader { .. } => "header-malformed",
            RuleViolation::PrefixNotAllowed { .. } => "prefix-not-allowed",
            RuleViolation::ComponentTooLong { .. } => "component-max-length",
            RuleViolation::ComponentNotLowercase { .. } => "component-case",
            RuleViolation::ComponentContainsSpace { .. } => "component-space",
            RuleViolation::SummaryTooLong { .. } => "summary-max-length",
            RuleViolation::SummaryNotLowercaseStart => "summary-case",
            RuleViolation::SummaryEndsWithPunctuation => "summary-punctuation",
            RuleViolation::SummaryTrivial => "summary-trivial",
            RuleViolation::MissingBlankSeparator => "separator-missing",
            RuleViolation::BodyMustStartProperly => "body-start",
        }
    }
}

/// Result type alias for gmc operations.
pub type Result<T> = std::result::Result<T, GmcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_too_long_display() {
        let err = RuleViolation::LineTooLong {
            line: 3,
            length: 90,
            max: 72,
        };
        assert!(err.to_string().contains("Line 3"));
        assert!(err.to_string().contains("90 > 72"));
    }

    #[test]
    fn test_prefix_not_allowed_display() {
        let err = RuleViolation::PrefixNotAllowed {
            prefix: "feat".to_string(),
            allowed: "fix, new".to_string(),
        };
        assert!(err.to_string().contains("'feat'"));
        assert!(err.to_string().contains("fix, new"));
    }

    #[test]
    fn test_codes_are_distinct() {
        let violations = [
            RuleViolation::EmptyMessage,
            RuleViolation::SummaryNotLowercaseStart,
            RuleViolation::SummaryEndsWithPunctuation,
            RuleViolation::SummaryTrivial,
            RuleViolation::MissingBlankSeparator,
            RuleViolation::BodyMustStartProperly,
        ];
        let codes: std::collections::BTreeSet<_> =
            violations.iter().map(|v| v.code()).collect();
        assert_eq!(codes.len(), violations.len());
    }

    #[test]
    fn test_gmc_error_from_violation() {
        let err: GmcError = RuleViolation::EmptyMessage.into();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            key: "max-summary-length".to_string(),
            message: "must not exceed max-line-length".to_string(),
        };
        assert!(err.to_string().contains("max-summary-length"));
    }
}
