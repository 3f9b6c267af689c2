//! Compute the check digit for a payload.

use anyhow::Result;
use clap::Args;
use said_id::luhn_digit;

use crate::error::CliError;
use crate::output::{print_single, OutputFormat};

use super::CommandContext;

/// Complete a 12-digit payload with its Luhn check digit.
#[derive(Debug, Args)]
pub struct CheckDigitCommand {
    /// The first 12 digits of an identity number.
    payload: String,
}

impl CheckDigitCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let digit = luhn_digit(&self.payload)
            .ok_or_else(|| CliError::InvalidPayload(self.payload.clone()))?;
        let number = format!("{}{}", self.payload, digit);

        match ctx.format {
            OutputFormat::Json => print_single(
                &serde_json::json!({ "number": number, "check_digit": digit }),
                ctx.format,
            ),
            OutputFormat::Table => println!("{}", number),
        }
        Ok(())
    }
}
