// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::error::{GmcError, Result};
use crate::rules::{self, CheckReport};

use super::args::{Cli, OutputFormat};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    let config = cli.check_config()?;
    tracing::debug!(?config, file = %cli.file.display(), "checking commit message");

    // File IO errors (missing file, permissions) are the caller's
    // responsibility and never reach the validator.
    let content = std::fs::read_to_string(&cli.file)?;
    let lines: Vec<&str> = content.lines().collect();

    let outcome = rules::validate(&lines, &config);

    let mut report = match outcome {
        Ok(()) => CheckReport::new(content),
        Err(ref violation) => CheckReport::with_violation(content.clone(), violation.clone()),
    };
    report.source = Some(cli.file.display().to_string());
    report.print(cli.format);

    match outcome {
        Ok(()) => {
            tracing::info!("commit message is valid");
            Ok(())
        }
        Err(violation) => {
            if !matches!(cli.format, Some(OutputFormat::Json)) {
                println!();
                println!(
                    "Please see the commit guidelines at {}.",
                    cli.guidelines_url
                );
            }
            Err(GmcError::Validation(violation))
        }
    }
}
