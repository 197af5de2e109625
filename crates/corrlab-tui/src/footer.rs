//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Key hints shown in the footer.
pub const KEY_HINTS: [(&str, &str); 8] = [
    ("↑↓", "select"),
    ("←→", "adjust"),
    ("Home/End", "min/max"),
    ("0", "reset"),
    ("s", "reseed"),
    ("t", "table"),
    ("l", "logs"),
    ("q", "quit"),
];

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect, theme: &ColorTheme) {
    let mut spans = Vec::with_capacity(KEY_HINTS.len() * 2);
    for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
        let sep = if i + 1 < KEY_HINTS.len() { " | " } else { "" };
        spans.push(Span::styled(*key, theme.key_style()));
        spans.push(Span::raw(format!(": {action}{sep}")));
    }

    let block = Block::default().borders(Borders::TOP);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
