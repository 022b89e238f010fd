//! Error types for dataset access.

use std::path::PathBuf;

/// Result type alias for dataset operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a dataset.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error while reading a dataset file.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not valid JSON for the expected record type.
    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset parsed but holds no records.
    #[error("dataset contains no records")]
    EmptyDataset,
}
