//! CSV table loading.

use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use mentions_model::Table;

use crate::error::{IngestError, Result};

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a CSV file into a [`Table`].
///
/// The first row is the header. Cells are trimmed and BOM-stripped,
/// fully empty rows are skipped, and short rows are padded to the
/// header width so the table stays rectangular.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut table: Option<Table> = None;
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        match table.as_mut() {
            None => table = Some(Table::new(row)),
            Some(table) => table.push_row(row),
        }
    }

    let table = table.ok_or_else(|| IngestError::Empty {
        path: path.to_path_buf(),
    })?;
    info!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "loaded csv table"
    );
    Ok(table)
}
