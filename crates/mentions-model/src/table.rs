use crate::error::{MentionError, Result};

/// In-memory tabular data shared by every pipeline stage.
///
/// Cells are stored as strings; an empty string means the value is
/// absent. Rows are padded to the header width on ingestion, so
/// `row[idx]` is always in bounds for a valid column index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Index of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Index of a named column, or a fatal configuration error.
    ///
    /// `table_name` only feeds the error message.
    pub fn require_column(&self, name: &str, table_name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| MentionError::MissingColumn {
                column: name.to_string(),
                table: table_name.to_string(),
            })
    }

    /// Cell value at (row, column index); `None` when absent or empty.
    pub fn value(&self, row: usize, col: usize) -> Option<&str> {
        let cell = self.rows.get(row)?.get(col)?.as_str();
        if cell.is_empty() { None } else { Some(cell) }
    }

    /// All non-empty values of one column, in row order.
    pub fn column_values(&self, col: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(move |row| row.get(col).map(String::as_str))
            .filter(|cell| !cell.is_empty())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }
}
