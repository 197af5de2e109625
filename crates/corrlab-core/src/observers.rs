//! Concrete observer implementations.

use crossbeam_channel::Sender;
use tracing::debug;

use crate::observer::{CellEvent, CellObserver};

/// Observer that forwards events through a channel (non-blocking).
pub struct ChannelObserver {
    sender: Sender<CellEvent>,
}

impl ChannelObserver {
    #[must_use]
    pub fn new(sender: Sender<CellEvent>) -> Self {
        Self { sender }
    }
}

impl CellObserver for ChannelObserver {
    fn on_evaluated(&self, event: &CellEvent) {
        // A full or closed channel drops the event rather than stalling evaluation.
        let _ = self.sender.try_send(*event);
    }
}

/// Observer that logs every recomputed cell at debug level.
pub struct LoggingObserver;

impl LoggingObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl CellObserver for LoggingObserver {
    fn on_evaluated(&self, event: &CellEvent) {
        debug!(
            cell = %event.cell,
            generation = event.generation,
            elapsed = ?event.duration,
            "Cell recomputed"
        );
    }
}

/// Null object pattern, discards every event.
pub struct NoOpObserver;

impl NoOpObserver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl CellObserver for NoOpObserver {
    fn on_evaluated(&self, _event: &CellEvent) {}
}
