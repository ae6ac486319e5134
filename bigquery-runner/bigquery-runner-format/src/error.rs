use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error(
        "CSV delimiter must be a single ASCII character other than a quote or line break, got {0:?}"
    )]
    InvalidDelimiter(char),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}
