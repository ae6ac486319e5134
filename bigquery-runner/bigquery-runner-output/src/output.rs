use async_trait::async_trait;
use bigquery_runner_core::{EdgeInfo, Flat, JobInfo, Struct, TableInfo};

use crate::{OutputError, OutputState};

/// One page of results handed to [`Output::write_rows`].
#[derive(Debug, Clone, Copy)]
pub struct RowsPage<'a> {
    pub structs: &'a [Struct],
    pub flat: &'a Flat,
    pub job_info: &'a JobInfo,
    pub table_info: &'a TableInfo,
    pub edge_info: &'a EdgeInfo,
}

/// A destination for query results.
///
/// Calls are expected in the order `open`, `write_heads`, `write_rows`*,
/// `close`; `dispose` tears the destination down from any state.
#[async_trait]
pub trait Output: Send {
    async fn open(&mut self) -> Result<(), OutputError>;

    /// Write column headers. Accepted before `open`.
    async fn write_heads(&mut self, flat: &Flat) -> Result<(), OutputError>;

    /// Write one page of rows. Accepted before `open`.
    async fn write_rows(&mut self, page: RowsPage<'_>) -> Result<(), OutputError>;

    /// Finish the output and wait until the destination has accepted
    /// everything. Accepted without a prior `open`.
    async fn close(&mut self) -> Result<(), OutputError>;

    /// Release the destination immediately, without waiting. Never fails.
    fn dispose(&mut self);

    fn state(&self) -> OutputState;
}
