//! CLI commands.

mod check;
mod check_digit;
mod parse;

use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use said_id::today_in_sast;

use crate::config::{Config, Overrides};
use crate::output::OutputFormat;

/// said - decode and validate South African identity numbers.
#[derive(Debug, Parser)]
#[command(name = "said")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Date to resolve birth years against (YYYY-MM-DD).
    ///
    /// Defaults to the current date in South Africa (UTC+2).
    #[arg(long, global = true, env = "SAID_TODAY")]
    today: Option<NaiveDate>,

    /// Reject numbers whose decommissioned digit is not 8.
    ///
    /// `--strict=false` or `SAID_STRICT=0` turns off a config-file setting.
    #[arg(
        long,
        global = true,
        env = "SAID_STRICT",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = FalseyValueParser::new()
    )]
    strict: Option<bool>,

    /// Minimum holder age used to pick the birth century.
    #[arg(long, global = true, env = "SAID_MINIMUM_AGE")]
    minimum_age: Option<u16>,

    /// Path to a TOML config file.
    #[arg(long, global = true, env = "SAID_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true, env = "SAID_LOG_LEVEL")]
    log_level: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(
        long,
        global = true,
        env = "SAID_LOG_JSON",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = FalseyValueParser::new()
    )]
    log_json: Option<bool>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decode one or more identity numbers.
    Parse(parse::ParseCommand),

    /// Validate length, digits and checksum only.
    Check(check::CheckCommand),

    /// Complete a 12-digit payload with its check digit.
    CheckDigit(check_digit::CheckDigitCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Load config and layer flags on top.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        config.apply(&Overrides {
            strict: self.strict,
            minimum_age: self.minimum_age,
            log_level: self.log_level.clone(),
            log_json: self.log_json,
        });
        Ok(config)
    }

    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            config,
            format: self.format,
            today: self.today.unwrap_or_else(|| today_in_sast(Utc::now())),
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(&ctx),
            Commands::Check(cmd) => cmd.run(&ctx),
            Commands::CheckDigit(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("said {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
    pub today: NaiveDate,
}
