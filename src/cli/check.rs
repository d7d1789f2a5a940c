//! Run filter queries against JSON tables

use super::{json_to_table, table_to_json, CliError};
use crate::{parser::parse_query, TableFilter};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The filter query to run
    pub query: String,
    /// JSON table input
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate syntax, don't execute
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Query ran; the filtered table as JSON
    Success(serde_json::Value),
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let query = &options.query;

    if options.syntax_only {
        if !query.trim().is_empty() {
            parse_query(query)?;
        }
        return Ok(CheckResult::SyntaxValid);
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str)?;
    let table = json_to_table(json_value)?;

    let filter = TableFilter::parse(query, &table.column_map())?;
    let filtered = table.filtered(&filter);

    Ok(CheckResult::Success(table_to_json(&filtered)))
}
