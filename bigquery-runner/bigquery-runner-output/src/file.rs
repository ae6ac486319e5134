use std::{io, sync::Arc};

use async_trait::async_trait;
use bigquery_runner_core::Flat;
use bigquery_runner_format::Formatter;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, trace};

use crate::{Output, OutputError, OutputState, RowsPage, lifecycle::Lifecycle};

pub struct FileSettings<W> {
    pub formatter: Arc<dyn Formatter>,
    pub stream: W,
}

/// Writes formatted text to a byte stream.
///
/// `close` writes the footer, flushes and shuts the stream down, and only
/// returns once the stream has finished. `dispose` drops the stream without
/// waiting, which ends it for the reading side.
///
/// Rows are numbered from zero across all `write_rows` calls of this output.
pub struct FileOutput<W> {
    formatter: Arc<dyn Formatter>,
    stream: Option<W>,
    lifecycle: Lifecycle,
    next_row_number: u64,
}

impl<W: AsyncWrite + Unpin + Send> FileOutput<W> {
    pub fn new(settings: FileSettings<W>) -> Self {
        Self {
            formatter: settings.formatter,
            stream: Some(settings.stream),
            lifecycle: Lifecycle::new("file"),
            next_row_number: 0,
        }
    }

    async fn write(&mut self, text: &str) -> Result<(), OutputError> {
        let Some(stream) = self.stream.as_mut() else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }
        stream
            .write_all(text.as_bytes())
            .await
            .map_err(OutputError::Stream)
    }
}

#[async_trait]
impl<W: AsyncWrite + Unpin + Send> Output for FileOutput<W> {
    async fn open(&mut self) -> Result<(), OutputError> {
        self.lifecycle.open()?;
        Ok(())
    }

    async fn write_heads(&mut self, flat: &Flat) -> Result<(), OutputError> {
        if !self.lifecycle.write()? {
            return Ok(());
        }
        let header = self.formatter.header(flat)?;
        self.write(&header).await
    }

    async fn write_rows(&mut self, page: RowsPage<'_>) -> Result<(), OutputError> {
        if !self.lifecycle.write()? {
            return Ok(());
        }
        trace!(sink = "file", rows = page.structs.len(), "writing rows");
        let text = self
            .formatter
            .rows(page.structs, self.next_row_number, page.flat)
            .await?;
        self.next_row_number = self.next_row_number.saturating_add(page.structs.len() as u64);
        self.write(&text).await
    }

    async fn close(&mut self) -> Result<(), OutputError> {
        if !self.lifecycle.close() {
            return Ok(());
        }
        let Some(mut stream) = self.stream.take() else {
            return Ok(());
        };
        let footer = self.formatter.footer();
        finish(&mut stream, &footer)
            .await
            .map_err(OutputError::Stream)
    }

    fn dispose(&mut self) {
        self.lifecycle.dispose();
        if self.stream.take().is_some() {
            debug!(sink = "file", "stream released without finishing");
        }
    }

    fn state(&self) -> OutputState {
        self.lifecycle.state()
    }
}

async fn finish<W: AsyncWrite + Unpin>(stream: &mut W, footer: &str) -> io::Result<()> {
    stream.write_all(footer.as_bytes()).await?;
    stream.flush().await?;
    stream.shutdown().await
}
