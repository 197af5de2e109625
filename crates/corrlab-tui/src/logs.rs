//! Scrollable cell log panel.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Scroll state for the log panel.
///
/// `offset` is the index of the last visible line; with `follow` set it
/// tracks the newest entry.
#[derive(Debug, Clone)]
pub struct LogScrollState {
    pub offset: usize,
    pub follow: bool,
}

impl LogScrollState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: 0,
            follow: true,
        }
    }

    /// Track a newly appended entry when following.
    pub fn on_new_message(&mut self, total: usize) {
        if self.follow {
            self.offset = total.saturating_sub(1);
        }
    }

    /// Keep the offset valid after the oldest entries were dropped.
    pub fn on_trimmed(&mut self, removed: usize) {
        self.offset = self.offset.saturating_sub(removed);
    }

    pub fn page_up(&mut self, page: usize) {
        self.follow = false;
        self.offset = self.offset.saturating_sub(page);
    }

    /// Page down; reaching the newest entry resumes following.
    pub fn page_down(&mut self, page: usize, total: usize) {
        let last = total.saturating_sub(1);
        self.offset = (self.offset + page).min(last);
        if self.offset >= last {
            self.follow = true;
        }
    }
}

impl Default for LogScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the log lines ending at `state.offset`.
pub fn render_logs(
    frame: &mut Frame,
    area: Rect,
    logs: &[String],
    state: &LogScrollState,
    theme: &ColorTheme,
) {
    let visible = area.height.saturating_sub(2) as usize;
    let end = (state.offset + 1).min(logs.len());
    let start = end.saturating_sub(visible);

    let items: Vec<ListItem> = logs[start..end]
        .iter()
        .map(|log| {
            let style = if log.starts_with("[ERROR]") {
                theme.error_style()
            } else if log.starts_with("[WARN]") {
                theme.warning_style()
            } else {
                Style::default()
            };
            ListItem::new(Line::raw(log.as_str())).style(style)
        })
        .collect();

    let title = if state.follow {
        " Cell log ".to_string()
    } else {
        format!(" Cell log ({}/{}) ", end, logs.len())
    };

    let list = List::new(items).block(
        Block::bordered()
            .title(title)
            .border_style(theme.muted_style()),
    );
    frame.render_widget(list, area);
}
