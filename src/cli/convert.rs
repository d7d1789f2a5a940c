//! JSON <-> table conversion utilities
//!
//! A table travels as `{"columns": [...], "rows": [[...], ...]}`. Column
//! names may be `null`; `columns` may be left out, in which case only
//! positional references (`$1`, `$2`, ...) can be used.

use serde_json::{json, Value};

use super::CliError;
use crate::SimpleTable;

/// Convert a JSON document to a table
pub fn json_to_table(v: Value) -> Result<SimpleTable, CliError> {
    let Value::Object(mut obj) = v else {
        return Err(CliError::InvalidTable(
            "expected an object with \"columns\" and \"rows\"".to_string(),
        ));
    };

    let columns = match obj.remove("columns") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(names)) => names
            .into_iter()
            .enumerate()
            .map(|(i, name)| match name {
                Value::String(s) => Ok(Some(s)),
                Value::Null => Ok(None),
                other => Err(CliError::InvalidTable(format!(
                    "column {} name must be a string or null, got {}",
                    i + 1,
                    other
                ))),
            })
            .collect::<Result<_, _>>()?,
        Some(other) => {
            return Err(CliError::InvalidTable(format!(
                "\"columns\" must be an array, got {}",
                other
            )));
        }
    };

    let rows = match obj.remove("rows") {
        Some(Value::Array(rows)) => rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| json_to_row(i, row))
            .collect::<Result<_, _>>()?,
        Some(other) => {
            return Err(CliError::InvalidTable(format!(
                "\"rows\" must be an array, got {}",
                other
            )));
        }
        None => return Err(CliError::InvalidTable("missing \"rows\"".to_string())),
    };

    Ok(SimpleTable::new(columns, rows))
}

fn json_to_row(index: usize, row: Value) -> Result<Vec<Option<String>>, CliError> {
    let Value::Array(cells) = row else {
        return Err(CliError::InvalidTable(format!(
            "row {} must be an array, got {}",
            index + 1,
            row
        )));
    };

    cells
        .into_iter()
        .map(|cell| match cell {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Bool(b) => Ok(Some(b.to_string())),
            Value::Number(n) => Ok(Some(n.to_string())),
            other => Err(CliError::InvalidTable(format!(
                "row {} has a nested value: {}",
                index + 1,
                other
            ))),
        })
        .collect()
}

/// Convert a table to a JSON document
pub fn table_to_json(table: &SimpleTable) -> Value {
    json!({
        "columns": table.columns(),
        "rows": table.rows(),
    })
}
