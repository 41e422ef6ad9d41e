//! Row-wise table concatenation.

use tracing::info;

use mentions_model::{MentionError, Result, Table};

/// Concatenate tables row-wise over the union of their headers.
///
/// Headers keep first-seen order; cells missing from a source table
/// become empty. Zero input tables is a fatal error, mirroring the
/// cleaner's strictness about misconfigured inputs.
pub fn concat_tables(tables: Vec<Table>) -> Result<Table> {
    if tables.is_empty() {
        return Err(MentionError::NoTables);
    }

    let mut headers: Vec<String> = Vec::new();
    for table in &tables {
        for header in &table.headers {
            if !headers.iter().any(|existing| existing == header) {
                headers.push(header.clone());
            }
        }
    }

    let mut merged = Table::new(headers);
    for table in &tables {
        let indices: Vec<Option<usize>> = merged
            .headers
            .iter()
            .map(|header| table.column_index(header))
            .collect();
        for row in &table.rows {
            let merged_row = indices
                .iter()
                .map(|idx| idx.map(|i| row[i].clone()).unwrap_or_default())
                .collect();
            merged.push_row(merged_row);
        }
    }
    info!(
        tables = tables.len(),
        rows = merged.row_count(),
        "concatenated tables"
    );
    Ok(merged)
}
