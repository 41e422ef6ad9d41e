use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading source tables.
///
/// These wrap collaborator I/O failures; the matching core never sees
/// them. A missing or malformed file aborts the run.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse csv {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("parse json {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("csv file has no header row: {path}")]
    Empty { path: PathBuf },
    #[error("json file is not an array of objects: {path}")]
    Shape { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
