//! Rendering strategies for query results.
//!
//! A [`Formatter`] turns a page of row structs into text in one notation.
//! Formatters hold no state between calls, so a single instance can be shared
//! (`Arc<dyn Formatter>`) by any number of outputs:
//!
//! | formatter | header | rows | footer |
//! |---|---|---|---|
//! | [`TableFormatter`] | none | aligned table per batch | none |
//! | [`MarkdownFormatter`] | pipe header + rule | one line per sub-row | none |
//! | [`CsvFormatter`] | optional | one record per sub-row | none |
//! | [`JsonFormatter`] | `[` | one object per struct | `]` |
//! | [`JsonLinesFormatter`] | none | one object per line | none |
pub mod csv;
pub mod error;
pub mod formatter;
pub mod json;
pub mod markdown;
pub mod table;

pub use self::csv::{CsvFormatter, CsvOptions};
pub use error::FormatError;
pub use formatter::Formatter;
pub use json::{JsonFormatter, JsonLinesFormatter};
pub use markdown::MarkdownFormatter;
pub use table::TableFormatter;

/// Records rendered between two cooperative yields in long batches.
pub(crate) const YIELD_EVERY: usize = 1024;

/// Let other tasks run after every [`YIELD_EVERY`] records.
pub(crate) async fn pace(rendered: usize) {
    if rendered % YIELD_EVERY == 0 {
        tokio::task::yield_now().await;
    }
}
