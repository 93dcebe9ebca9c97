// SPDX-License-Identifier: MIT

//! GMC - Commit Message Validation Gate
//!
//! Validates the structural and stylistic conformance of a commit message
//! against a configurable rule set. Intended as a pre-commit or CI gate:
//! given a message's text, it either accepts it silently or rejects it
//! with a specific, actionable diagnostic.
//!
//! # Example
//!
//! ```
//! use gmc::config::CheckConfig;
//! use gmc::rules::validate;
//!
//! let lines = ["fix[core]: correct a rare crash"];
//! assert!(validate(&lines, &CheckConfig::default()).is_ok());
//!
//! let lines = ["fix: bad"];
//! assert!(validate(&lines, &CheckConfig::default()).is_err());
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use config::CheckConfig;
pub use error::{GmcError, Result, RuleViolation};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of gmc.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
