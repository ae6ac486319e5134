//! Messages posted to the results viewer.
//!
//! ```json
//! { "source": "bigquery-runner", "payload": { "event": "rows", "payload": { ... } } }
//! ```
//!
//! Row numbers inside a message are decimal strings; the viewer side cannot
//! represent every `u64` as a number.

use bigquery_runner_core::{JobInfo, NumberedRows, SerializableEdgeInfo, TableInfo};
use serde::Serialize;

/// Value of [`Envelope::source`], used by the viewer to filter messages.
pub const SOURCE: &str = "bigquery-runner";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<'a> {
    pub source: &'static str,
    pub payload: Event<'a>,
}

impl<'a> Envelope<'a> {
    pub fn new(payload: Event<'a>) -> Self {
        Self {
            source: SOURCE,
            payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "payload", rename_all = "lowercase")]
pub enum Event<'a> {
    Open,
    Rows(RowsPayload<'a>),
    Close,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowsPayload<'a> {
    /// Column ids, in display order.
    pub header: Vec<&'a str>,
    pub rows: Vec<NumberedRows<'a>>,
    pub job_info: &'a JobInfo,
    pub table_info: &'a TableInfo,
    pub edge_info: SerializableEdgeInfo,
}
