//! JSON reading.
//!
//! Only a top-level array of objects is accepted. The keys of the first
//! object become the columns, in document order.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::table::Table;

/// Renders a scalar JSON value as cell text. Nested values become empty cells.
fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

pub fn read_json_table(path: &Path) -> Result<Table> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&text).map_err(|source| IngestError::JsonParse {
        path: path.to_path_buf(),
        source,
    })?;
    table_from_value(&value).map_err(|reason| IngestError::UnsupportedJson {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    })
}

fn table_from_value(value: &Value) -> std::result::Result<Table, &'static str> {
    let Value::Array(items) = value else {
        return Err("top-level value must be an array");
    };
    let Some(first) = items.first() else {
        return Ok(Table::default());
    };
    let Value::Object(first) = first else {
        return Err("array items must be objects");
    };
    let headers: Vec<String> = first.keys().cloned().collect();

    let mut rows = Vec::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        let Value::Object(object) = item else {
            debug!(position, "skipping non-object array item");
            continue;
        };
        rows.push(
            headers
                .iter()
                .map(|key| cell_text(object.get(key)))
                .collect(),
        );
    }
    Ok(Table::new(headers, rows))
}
