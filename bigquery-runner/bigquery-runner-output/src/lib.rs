//! Destinations for rendered query results.
//!
//! Every destination implements [`Output`] and follows the same lifecycle:
//!
//! ```text
//! Unopened --open--> Opened --close--> Closed
//!     \                 |                 |
//!      `---------- dispose --------------'--> Disposed
//! ```
//!
//! - [`ViewerOutput`] posts structured [`Envelope`] messages to a results viewer.
//! - [`LogOutput`] appends formatted text to an append-only [`LogChannel`].
//! - [`FileOutput`] writes formatted text to any `tokio` [`AsyncWrite`](tokio::io::AsyncWrite).
//!
//! `dispose` may be called at any point and any number of times. Once an
//! output is disposed every other call is a no-op.

mod error;
mod file;
mod lifecycle;
mod log;
pub mod message;
mod output;
mod viewer;

pub use error::{OutputError, TransportError};
pub use file::{FileOutput, FileSettings};
pub use lifecycle::OutputState;
pub use log::{LogChannel, LogOutput, LogSettings};
pub use message::{Envelope, Event, RowsPayload};
pub use output::{Output, RowsPage};
pub use viewer::{MessageTransport, ViewerOutput, ViewerSettings};
