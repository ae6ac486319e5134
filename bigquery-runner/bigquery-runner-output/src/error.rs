//! Error types for output destinations.

use bigquery_runner_format::FormatError;

/// Error reported by a [`MessageTransport`](crate::MessageTransport).
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by [`Output`](crate::Output) operations.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// A write or `open` was issued after `close`.
    #[error("output is already closed")]
    Closed,

    /// The formatter failed to render a page.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The byte stream failed while writing, flushing or finishing.
    #[error("stream error: {0}")]
    Stream(#[source] std::io::Error),

    /// The viewer message transport failed. Not retried.
    #[error("message transport failed: {0}")]
    Transport(#[source] TransportError),
}
