//! Result types shared between the pipeline and the run summary.

use std::path::PathBuf;

/// Matching outcome for one publication source.
#[derive(Debug, Clone)]
pub struct SourceSummary {
    pub source: String,
    /// Cleaned publication rows searched for this source.
    pub publication_rows: usize,
    pub publication_mentions: usize,
    pub journal_mentions: usize,
}

/// Outcome of a full pipeline run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub output_path: PathBuf,
    /// Distinct drug rows left after cleaning.
    pub drug_count: usize,
    pub sources: Vec<SourceSummary>,
    /// Record count before duplicate removal.
    pub total_records: usize,
    /// Record count written to the report.
    pub unique_records: usize,
}
