use std::sync::Arc;

use async_trait::async_trait;
use bigquery_runner_core::Flat;
use bigquery_runner_format::Formatter;
use tracing::trace;

use crate::{Output, OutputError, OutputState, RowsPage, lifecycle::Lifecycle};

/// An append-only text channel, such as an editor's output panel.
pub trait LogChannel: Send {
    /// Reveal the channel to the user.
    fn show(&mut self, preserve_focus: bool);

    fn append(&mut self, value: &str);
}

/// In-memory channel; `show` does nothing.
impl LogChannel for String {
    fn show(&mut self, _preserve_focus: bool) {}

    fn append(&mut self, value: &str) {
        self.push_str(value);
    }
}

pub struct LogSettings<C> {
    pub formatter: Arc<dyn Formatter>,
    pub channel: C,
}

/// Appends formatted text to a [`LogChannel`].
///
/// Rows are numbered from zero across all `write_rows` calls of this output.
pub struct LogOutput<C> {
    formatter: Arc<dyn Formatter>,
    channel: C,
    lifecycle: Lifecycle,
    next_row_number: u64,
}

impl<C: LogChannel> LogOutput<C> {
    pub fn new(settings: LogSettings<C>) -> Self {
        Self {
            formatter: settings.formatter,
            channel: settings.channel,
            lifecycle: Lifecycle::new("log"),
            next_row_number: 0,
        }
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    pub fn into_channel(self) -> C {
        self.channel
    }
}

#[async_trait]
impl<C: LogChannel> Output for LogOutput<C> {
    async fn open(&mut self) -> Result<(), OutputError> {
        if self.lifecycle.open()? {
            self.channel.show(true);
        }
        Ok(())
    }

    async fn write_heads(&mut self, flat: &Flat) -> Result<(), OutputError> {
        if self.lifecycle.write()? {
            let header = self.formatter.header(flat)?;
            self.channel.append(&header);
        }
        Ok(())
    }

    async fn write_rows(&mut self, page: RowsPage<'_>) -> Result<(), OutputError> {
        if !self.lifecycle.write()? {
            return Ok(());
        }
        trace!(sink = "log", rows = page.structs.len(), "appending rows");
        let text = self
            .formatter
            .rows(page.structs, self.next_row_number, page.flat)
            .await?;
        self.next_row_number = self.next_row_number.saturating_add(page.structs.len() as u64);
        self.channel.append(&text);
        Ok(())
    }

    async fn close(&mut self) -> Result<(), OutputError> {
        if self.lifecycle.close() {
            let footer = self.formatter.footer();
            self.channel.append(&footer);
        }
        Ok(())
    }

    fn dispose(&mut self) {
        self.lifecycle.dispose();
    }

    fn state(&self) -> OutputState {
        self.lifecycle.state()
    }
}
