//! JSON table loading.
//!
//! Bibliographic exports arrive as a JSON array of flat objects. The
//! array maps onto a [`Table`]: headers are the object keys in
//! first-seen order across the whole array, scalar values are
//! stringified, and `null` or missing keys become empty cells.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use mentions_model::Table;

use crate::error::{IngestError, Result};

/// Read a JSON array-of-objects file into a [`Table`].
pub fn read_json_table(path: &Path) -> Result<Table> {
    let text = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value =
        serde_json::from_str(&text).map_err(|source| IngestError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let Value::Array(items) = value else {
        return Err(IngestError::Shape {
            path: path.to_path_buf(),
        });
    };

    let mut headers: Vec<String> = Vec::new();
    let mut objects = Vec::with_capacity(items.len());
    for item in items {
        let Value::Object(map) = item else {
            return Err(IngestError::Shape {
                path: path.to_path_buf(),
            });
        };
        for key in map.keys() {
            if !headers.iter().any(|header| header == key) {
                headers.push(key.clone());
            }
        }
        objects.push(map);
    }

    let mut table = Table::new(headers);
    for map in objects {
        let row = table
            .headers
            .iter()
            .map(|header| map.get(header).map(scalar_to_string).unwrap_or_default())
            .collect();
        table.push_row(row);
    }
    info!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "loaded json table"
    );
    Ok(table)
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.trim().to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        // Nested structures are kept verbatim; downstream cleaning
        // drops them when they land in a required column.
        other => other.to_string(),
    }
}
