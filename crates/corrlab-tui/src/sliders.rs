//! Parameter sliders drawn as gauges.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

use corrlab_core::params::{ParamId, ParamSpec, Params};

use crate::styles::ColorTheme;

/// Rows taken by one slider (gauge plus borders).
pub const SLIDER_HEIGHT: u16 = 3;

/// Format a slider value with the precision of its step.
#[must_use]
pub fn format_slider_value(spec: &ParamSpec, value: f64) -> String {
    let prec = usize::try_from(spec.decimals()).unwrap_or(0);
    format!("{value:.prec$}")
}

/// Render one gauge per parameter; the focused one gets a highlighted border.
pub fn render_sliders(
    frame: &mut Frame,
    area: Rect,
    params: &Params,
    focus: ParamId,
    theme: &ColorTheme,
) {
    let rows = Layout::vertical([Constraint::Length(SLIDER_HEIGHT); 3]).split(area);

    for (&id, &rect) in ParamId::ALL.iter().zip(rows.iter()) {
        let spec = id.spec();
        let value = params.get(id);
        let (marker, border) = if id == focus {
            ("▶ ", theme.focus_style())
        } else {
            ("  ", theme.muted_style())
        };

        let gauge = Gauge::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!("{marker}{} ", spec.label)),
            )
            .gauge_style(Style::default().fg(theme.slider))
            .label(format_slider_value(spec, value))
            .ratio(spec.ratio(value));

        frame.render_widget(gauge, rect);
    }
}
