//! TUI header panel.

use std::time::Duration;

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header: seed, evaluation pass, and the time the last pass took.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    seed: u64,
    generation: u64,
    last_pass: Duration,
    theme: &ColorTheme,
) {
    let text = vec![Line::from(vec![
        Span::styled("corrlab", theme.header_style()),
        Span::raw(format!(
            " | seed {seed} | pass #{generation} | recomputed in {last_pass:.1?}"
        )),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .title(" Correlation explorer ");

    frame.render_widget(Paragraph::new(text).block(block), area);
}
