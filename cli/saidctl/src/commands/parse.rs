//! Decode identity numbers.

use anyhow::Result;
use clap::Args;
use said_id::IdentityNumber;
use tracing::info;

use crate::error::CliError;
use crate::output::{print_decoded, Decoded};

use super::CommandContext;

/// Decode one or more identity numbers.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Identity numbers to decode.
    #[arg(required = true)]
    numbers: Vec<String>,
}

impl ParseCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let decoded = decode_all(&self.numbers, ctx);
        print_decoded(&decoded, ctx.format);

        let failed = decoded.iter().filter(|d| !d.is_valid()).count();
        info!(total = decoded.len(), failed, today = %ctx.today, "Decoded identity numbers");

        if failed > 0 {
            return Err(CliError::Rejected {
                failed,
                total: decoded.len(),
            }
            .into());
        }
        Ok(())
    }
}

fn decode_all(numbers: &[String], ctx: &CommandContext) -> Vec<Decoded> {
    numbers
        .iter()
        .map(|raw| {
            let result = IdentityNumber::parse_with(raw, ctx.today, &ctx.config.policy);
            Decoded::from_result(raw, result)
        })
        .collect()
}
