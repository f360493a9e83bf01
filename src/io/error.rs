use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or saving task data.
#[derive(Debug, Error)]
pub enum IoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid project JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV is missing a task title column; found headers {found:?}")]
    MissingTitleColumn { found: Vec<String> },

    #[error("no valid tasks found in CSV ({skipped} rows skipped)")]
    EmptyImport { skipped: usize },
}
