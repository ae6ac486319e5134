use async_trait::async_trait;
use bigquery_runner_core::Flat;
use tokio::sync::mpsc::UnboundedSender;
use tracing::trace;

use crate::{
    Output, OutputError, OutputState, RowsPage, TransportError,
    lifecycle::Lifecycle,
    message::{Envelope, Event, RowsPayload},
};

/// Delivers messages to the results viewer.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Post one message. `Ok(false)` means the viewer did not accept it.
    async fn post_message(&self, message: &Envelope<'_>) -> Result<bool, TransportError>;
}

/// Forwards every message as a JSON value. A closed receiver counts as
/// "not delivered".
#[async_trait]
impl MessageTransport for UnboundedSender<serde_json::Value> {
    async fn post_message(&self, message: &Envelope<'_>) -> Result<bool, TransportError> {
        let value = serde_json::to_value(message)?;
        Ok(self.send(value).is_ok())
    }
}

pub struct ViewerSettings<T> {
    pub transport: T,
}

/// Sends rows as structured messages instead of text; no formatter is
/// involved. Headers travel inside each `rows` message, so `write_heads`
/// posts nothing.
///
/// A transport error fails the operation and is not retried. A message the
/// viewer did not accept is only counted, see [`ViewerOutput::undelivered`].
pub struct ViewerOutput<T> {
    transport: T,
    lifecycle: Lifecycle,
    undelivered: usize,
}

impl<T: MessageTransport> ViewerOutput<T> {
    pub fn new(settings: ViewerSettings<T>) -> Self {
        Self {
            transport: settings.transport,
            lifecycle: Lifecycle::new("viewer"),
            undelivered: 0,
        }
    }

    /// Number of messages the transport reported as not delivered.
    pub fn undelivered(&self) -> usize {
        self.undelivered
    }

    async fn post(&mut self, event: Event<'_>) -> Result<(), OutputError> {
        let delivered = self
            .transport
            .post_message(&Envelope::new(event))
            .await
            .map_err(OutputError::Transport)?;
        if !delivered {
            self.undelivered += 1;
        }
        Ok(())
    }
}

#[async_trait]
impl<T: MessageTransport> Output for ViewerOutput<T> {
    async fn open(&mut self) -> Result<(), OutputError> {
        if self.lifecycle.open()? {
            self.post(Event::Open).await?;
        }
        Ok(())
    }

    async fn write_heads(&mut self, _flat: &Flat) -> Result<(), OutputError> {
        self.lifecycle.write()?;
        Ok(())
    }

    async fn write_rows(&mut self, page: RowsPage<'_>) -> Result<(), OutputError> {
        if !self.lifecycle.write()? {
            return Ok(());
        }
        trace!(sink = "viewer", rows = page.structs.len(), "posting rows");
        let payload = RowsPayload {
            header: page.flat.head_ids().collect(),
            rows: page
                .flat
                .to_rows(page.structs, page.edge_info.row_number_start),
            job_info: page.job_info,
            table_info: page.table_info,
            edge_info: page.edge_info.to_serializable(),
        };
        self.post(Event::Rows(payload)).await
    }

    async fn close(&mut self) -> Result<(), OutputError> {
        if self.lifecycle.close() {
            self.post(Event::Close).await?;
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
