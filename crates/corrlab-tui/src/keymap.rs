//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Focus the previous slider.
    SelectPrev,
    /// Focus the next slider.
    SelectNext,
    /// Move the focused slider one step down.
    Decrease,
    /// Move the focused slider one step up.
    Increase,
    /// Jump the focused slider to its minimum.
    Min,
    /// Jump the focused slider to its maximum.
    Max,
    /// Restore the focused slider's default.
    Reset,
    /// Advance the seed by one.
    Reseed,
    ToggleTable,
    ToggleLogs,
    LogPageUp,
    LogPageDown,
    None,
}

/// Map a key event to an action.
///
/// Release events (reported on some platforms) map to [`KeyAction::None`].
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Up | KeyCode::BackTab => KeyAction::SelectPrev,
        KeyCode::Down | KeyCode::Tab => KeyAction::SelectNext,
        KeyCode::Left | KeyCode::Char('-') => KeyAction::Decrease,
        KeyCode::Right | KeyCode::Char('+' | '=') => KeyAction::Increase,
        KeyCode::Home => KeyAction::Min,
        KeyCode::End => KeyAction::Max,
        KeyCode::Char('0') => KeyAction::Reset,
        KeyCode::Char('s') => KeyAction::Reseed,
        KeyCode::Char('t') => KeyAction::ToggleTable,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        KeyCode::PageUp => KeyAction::LogPageUp,
        KeyCode::PageDown => KeyAction::LogPageDown,
        _ => KeyAction::None,
    }
}
