//! Output formatting for CLI commands.

use colored::Colorize;
use said_id::{IdentityNumber, ParseError};
use serde::Serialize;
use tabled::{Table, Tabled};

const CLI_SCHEMA_VERSION: &str = "said.cli.v1";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

/// Outcome of decoding one input, as printed.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Decoded {
    Valid { identity: IdentityNumber },
    Rejected { number: String, error: ErrorView },
}

impl Decoded {
    pub fn from_result(input: &str, result: Result<IdentityNumber, ParseError>) -> Self {
        match result {
            Ok(identity) => Decoded::Valid { identity },
            Err(err) => Decoded::Rejected {
                number: input.to_string(),
                error: ErrorView::from(&err),
            },
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Decoded::Valid { .. })
    }
}

/// Structured view of a decoder error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorView {
    pub kind: &'static str,
    pub message: String,
}

impl From<&ParseError> for ErrorView {
    fn from(err: &ParseError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Table row for a decoded input.
#[derive(Debug, Clone, Tabled)]
pub struct DecodedRow {
    #[tabled(rename = "Number")]
    pub number: String,

    #[tabled(rename = "Status")]
    pub status: String,

    #[tabled(rename = "Date of birth")]
    pub date_of_birth: String,

    #[tabled(rename = "Sex")]
    pub sex: String,

    #[tabled(rename = "Citizenship")]
    pub citizenship: String,
}

impl From<&Decoded> for DecodedRow {
    fn from(decoded: &Decoded) -> Self {
        match decoded {
            Decoded::Valid { identity } => Self {
                number: identity.value().to_string(),
                status: "valid".to_string(),
                date_of_birth: identity.date_of_birth().to_string(),
                sex: identity.sex().to_string(),
                citizenship: identity.citizenship().to_string(),
            },
            Decoded::Rejected { number, error } => Self {
                number: number.clone(),
                status: error.message.clone(),
                date_of_birth: "-".to_string(),
                sex: "-".to_string(),
                citizenship: "-".to_string(),
            },
        }
    }
}

/// Print decoded inputs in the specified format.
pub fn print_decoded(items: &[Decoded], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let rows: Vec<DecodedRow> = items.iter().map(DecodedRow::from).collect();
            println!("{}", Table::new(rows));
        }
        OutputFormat::Json => println!("{}", format_json(items, "[]")),
    }
}

/// Print a single item in the specified format.
pub fn print_single<T: Serialize>(data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            println!("{}", json);
        }
        OutputFormat::Json => println!("{}", format_json(data, "{}")),
    }
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    let value = serde_json::to_value(data).unwrap_or_else(|_| serde_json::json!({}));
    serde_json::to_string_pretty(&wrap_with_schema(value))
        .unwrap_or_else(|_| fallback.to_string())
}

fn wrap_with_schema(value: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "schemaVersion": CLI_SCHEMA_VERSION,
        "data": value
    })
}
