//! Structural and checksum validation only.

use anyhow::Result;
use clap::Args;
use said_id::validate_with;
use serde::Serialize;

use crate::output::{print_single, print_success, ErrorView, OutputFormat};

use super::CommandContext;

/// Validate an identity number without decoding it.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Identity number to validate.
    number: String,
}

#[derive(Debug, Serialize)]
struct CheckView<'a> {
    number: &'a str,
    valid: bool,
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        match validate_with(&self.number, &ctx.config.policy) {
            Ok(()) => {
                match ctx.format {
                    OutputFormat::Json => print_single(
                        &CheckView {
                            number: &self.number,
                            valid: true,
                        },
                        ctx.format,
                    ),
                    OutputFormat::Table => print_success(&format!("{} is valid", self.number)),
                }
                Ok(())
            }
            Err(err) => {
                if ctx.format == OutputFormat::Json {
                    print_single(
                        &serde_json::json!({
                            "number": self.number,
                            "valid": false,
                            "error": ErrorView::from(&err),
                        }),
                        ctx.format,
                    );
                }
                Err(err.into())
            }
        }
    }
}
