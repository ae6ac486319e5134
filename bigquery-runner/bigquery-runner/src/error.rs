//! Error types for configuration and factories.

use std::path::PathBuf;

use bigquery_runner_format::FormatError;

/// Errors produced while reading settings or building formatters and outputs.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings document is not valid JSON or has a wrong shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The CSV delimiter is not exactly one character.
    #[error("CSV delimiter must be a single character, got {delimiter:?}")]
    InvalidDelimiter { delimiter: String },

    #[error(transparent)]
    Format(#[from] FormatError),

    /// The output file or one of its parent directories could not be created.
    #[error("failed to create {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
