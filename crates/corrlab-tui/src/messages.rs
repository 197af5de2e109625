//! TUI message types (Elm Messages).

use corrlab_core::observer::CellEvent;
use crossterm::event::Event;

use crate::keymap::{map_key, KeyAction};

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// A notebook cell was recomputed.
    Cell(CellEvent),
    /// Key press forwarded from the event loop.
    KeyPress(KeyAction),
    /// Poll timeout or a terminal event with nothing to do but redraw.
    Tick,
}

impl TuiMessage {
    /// Translate a polled terminal event.
    #[must_use]
    pub fn from_terminal(event: &Event) -> Self {
        match event {
            Event::Key(key) => Self::KeyPress(map_key(*key)),
            _ => Self::Tick,
        }
    }
}
