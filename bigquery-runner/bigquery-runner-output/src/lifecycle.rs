use tracing::debug;

use crate::OutputError;

/// Lifecycle state of an [`Output`](crate::Output).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputState {
    Unopened,
    Opened,
    Closed,
    Disposed,
}

/// State machine shared by all outputs. Each method answers whether the
/// caller should perform the operation's side effect.
#[derive(Debug)]
pub(crate) struct Lifecycle {
    sink: &'static str,
    state: OutputState,
}

impl Lifecycle {
    pub(crate) fn new(sink: &'static str) -> Self {
        Self {
            sink,
            state: OutputState::Unopened,
        }
    }

    pub(crate) fn state(&self) -> OutputState {
        self.state
    }

    /// A second `open` is a no-op; `open` after `close` is an error.
    pub(crate) fn open(&mut self) -> Result<bool, OutputError> {
        match self.state {
            OutputState::Unopened => {
                self.transition(OutputState::Opened);
                Ok(true)
            }
            OutputState::Opened | OutputState::Disposed => Ok(false),
            OutputState::Closed => Err(OutputError::Closed),
        }
    }

    /// Writes are accepted before `open`.
    pub(crate) fn write(&self) -> Result<bool, OutputError> {
        match self.state {
            OutputState::Unopened | OutputState::Opened => Ok(true),
            OutputState::Closed => Err(OutputError::Closed),
            OutputState::Disposed => Ok(false),
        }
    }

    /// The state becomes `Closed` before the side effect runs, so a failing
    /// close still leaves the output closed.
    pub(crate) fn close(&mut self) -> bool {
        match self.state {
            OutputState::Unopened | OutputState::Opened => {
                self.transition(OutputState::Closed);
                true
            }
            OutputState::Closed | OutputState::Disposed => false,
        }
    }

    /// Returns `true` only for the first call.
    pub(crate) fn dispose(&mut self) -> bool {
        if self.state == OutputState::Disposed {
            return false;
        }
        self.transition(OutputState::Disposed);
        true
    }

    fn transition(&mut self, to: OutputState) {
        debug!(sink = self.sink, from = ?self.state, ?to, "output state changed");
        self.state = to;
    }
}
