//! CLI support for table-filter
//!
//! Provides programmatic access to the `tfq` commands so other tools can
//! embed them.

mod check;
mod convert;
mod docs;

pub use check::{execute_check, CheckOptions, CheckResult};
pub use convert::{json_to_table, table_to_json};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};

use std::io;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Query failed to parse or compile
    Query(crate::Error),
    /// JSON parsing error
    Json(serde_json::Error),
    /// JSON was valid but not a table
    InvalidTable(String),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
    /// Unknown documentation category
    UnknownCategory(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Query(crate::Error::Syntax(e)) => write!(f, "{}", e),
            CliError::Query(crate::Error::Filter(e)) => write!(f, "Filter error: {}", e),
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::InvalidTable(msg) => write!(f, "Invalid table: {}", msg),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(f, "No input provided. Use --input or pipe JSON to stdin."),
            CliError::UnknownCategory(c) => {
                write!(f, "Unknown category: '{}'\nRun 'tfq docs' to see available categories.", c)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Query(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<crate::Error> for CliError {
    fn from(e: crate::Error) -> Self {
        CliError::Query(e)
    }
}

impl From<crate::SyntaxError> for CliError {
    fn from(e: crate::SyntaxError) -> Self {
        CliError::Query(e.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
