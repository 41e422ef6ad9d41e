use thiserror::Error;

/// Fatal error conditions for the matching pipeline.
///
/// Configuration errors (a configured column missing from a table
/// schema) abort the run before any matching is attempted. Empty
/// inputs are not errors; they produce empty results.
#[derive(Debug, Error)]
pub enum MentionError {
    #[error("column '{column}' not found in table '{table}'")]
    MissingColumn { column: String, table: String },
    #[error("no tables to concatenate")]
    NoTables,
}

pub type Result<T> = std::result::Result<T, MentionError>;
