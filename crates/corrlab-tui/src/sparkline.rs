//! History of |r| across evaluation passes.

use std::collections::VecDeque;

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Sparkline};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Fixed-capacity ring buffer of recent values.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    values: VecDeque<f64>,
    capacity: usize,
}

impl HistoryBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a value, dropping the oldest when full.
    pub fn push(&mut self, value: f64) {
        if self.capacity == 0 {
            return;
        }
        if self.values.len() == self.capacity {
            self.values.pop_front();
        }
        self.values.push_back(value);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.values.back().copied()
    }

    /// Values oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }
}

/// Scale |r| values in [0, 1] to sparkline bars in [0, 100].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn scale_bars(values: &[f64]) -> Vec<u64> {
    values
        .iter()
        .map(|v| (v.clamp(0.0, 1.0) * 100.0).round() as u64)
        .collect()
}

/// Render the |r| history.
pub fn render_sparkline(frame: &mut Frame, area: Rect, history: &HistoryBuffer, theme: &ColorTheme) {
    let bars = scale_bars(&history.to_vec());
    let title = history
        .last()
        .map_or_else(|| " |r| history ".to_string(), |r| format!(" |r| history ({r:.3}) "));

    let sparkline = Sparkline::default()
        .block(Block::bordered().title(title))
        .data(&bars)
        .max(100)
        .style(Style::default().fg(theme.points));

    frame.render_widget(sparkline, area);
}
