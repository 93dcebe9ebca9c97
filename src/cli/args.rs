// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::CheckConfig;
use crate::error::{ConfigError, Result};

/// GMC - Commit message validation gate
///
/// Validates a commit message file against a configurable rule set, for
/// use as a pre-commit or CI gate.
#[derive(Parser, Debug)]
#[command(name = "gmc")]
#[command(version)]
#[command(about = "Validate a commit message file", long_about = None)]
pub struct Cli {
    /// The commit message file to validate (e.g. .git/COMMIT_EDITMSG)
    pub file: PathBuf,

    /// Maximum character count per non-comment line
    #[arg(long, default_value_t = 72)]
    pub max_line_length: usize,

    /// Maximum character count for the header summary
    #[arg(long, default_value_t = 50)]
    pub max_summary_length: usize,

    /// Prefixes allowed to start the header (comma-separated)
    #[arg(
        long,
        value_delimiter = ',',
        default_value = "new,fix,refactor,docs,minor,build,misc"
    )]
    pub allowed_prefixes: Vec<String>,

    /// URL to the commit message guidelines, shown after a failure
    #[arg(long, default_value = "https://github.com/gmermoud/gmc#readme")]
    pub guidelines_url: String,

    /// Trace every line as it is validated
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

impl Cli {
    /// Build the validation configuration from the flags.
    pub fn check_config(&self) -> Result<CheckConfig> {
        if self.max_line_length == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max-line-length".to_string(),
                message: "must be positive".to_string(),
            }
            .into());
        }
        if self.max_summary_length == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max-summary-length".to_string(),
                message: "must be positive".to_string(),
            }
            .into());
        }
        if self.max_summary_length > self.max_line_length {
            return Err(ConfigError::InvalidValue {
                key: "max-summary-length".to_string(),
                message: format!(
                    "must not exceed max-line-length ({} > {})",
                    self.max_summary_length, self.max_line_length
                ),
            }
            .into());
        }

        Ok(CheckConfig {
            max_line_length: self.max_line_length,
            max_summary_length: self.max_summary_length,
            allowed_prefixes: self.allowed_prefixes.iter().cloned().collect(),
            verbose: self.verbose,
        })
    }
}
