//! Bridge between notebook cell events and TUI messages.

use crossbeam_channel::Sender;

use corrlab_core::observer::{CellEvent, CellObserver};

use crate::messages::TuiMessage;

/// Cell observer that forwards events to the TUI channel.
pub struct TuiBridgeObserver {
    tx: Sender<TuiMessage>,
}

impl TuiBridgeObserver {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl CellObserver for TuiBridgeObserver {
    fn on_evaluated(&self, event: &CellEvent) {
        let _ = self.tx.try_send(TuiMessage::Cell(*event));
    }
}
