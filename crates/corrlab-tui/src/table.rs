//! Preview table of the first dataset rows.

use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Row, Table};
use ratatui::Frame;

use corrlab_core::preview::{PreviewRow, PREVIEW_HEADERS};

use crate::styles::ColorTheme;

/// Cell texts of one preview row.
#[must_use]
pub fn preview_cells(row: &PreviewRow) -> [String; 3] {
    [
        row.index.to_string(),
        format!("{:.4}", row.x),
        format!("{:.4}", row.y),
    ]
}

/// Render the preview rows as a table.
pub fn render_table(frame: &mut Frame, area: Rect, rows: &[PreviewRow], theme: &ColorTheme) {
    let header = Row::new(PREVIEW_HEADERS).style(theme.header_style());
    let body: Vec<Row> = rows.iter().map(|row| Row::new(preview_cells(row))).collect();
    let widths = [
        Constraint::Length(4),
        Constraint::Length(10),
        Constraint::Length(10),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .block(Block::bordered().title(format!(" First {} rows ", rows.len())));
    frame.render_widget(table, area);
}
