//! Error handling and display for the CLI.

use std::path::PathBuf;

use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Invalid config file {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("{failed} of {total} identity numbers rejected")]
    Rejected { failed: usize, total: usize },

    #[error("Invalid payload: expected 12 digits, got {0:?}")]
    InvalidPayload(String),
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::ConfigNotFound(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass --config with an existing TOML file, or unset SAID_CONFIG.".yellow()
                );
            }
            CliError::InvalidConfig { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Expected `log_level` and a [policy] table.".yellow()
                );
            }
            _ => {}
        }
    }
}
