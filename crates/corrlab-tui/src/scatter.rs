//! Scatter chart of the dataset.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Chart, Dataset as ChartDataset, GraphType, Paragraph};
use ratatui::Frame;

use corrlab_core::plot::ScatterPlot;

use crate::styles::ColorTheme;

/// Low, middle and high tick labels for an axis.
#[must_use]
pub fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| format!("{v:.1}"))
        .collect()
}

fn tick_spans(bounds: [f64; 2]) -> Vec<Span<'static>> {
    axis_labels(bounds).into_iter().map(Span::from).collect()
}

/// Render the scatter figure, or a placeholder before the first evaluation.
pub fn render_scatter(frame: &mut Frame, area: Rect, plot: Option<&ScatterPlot>, theme: &ColorTheme) {
    let Some(plot) = plot else {
        let block = Block::bordered().title(" Plot ");
        frame.render_widget(Paragraph::new("No data").block(block), area);
        return;
    };

    let datasets = vec![ChartDataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Scatter)
        .style(Style::default().fg(theme.points))
        .data(&plot.points)];

    let x_axis = Axis::default()
        .title(plot.x_label)
        .style(theme.muted_style())
        .bounds(plot.x_bounds)
        .labels(tick_spans(plot.x_bounds));
    let y_axis = Axis::default()
        .title(plot.y_label)
        .style(theme.muted_style())
        .bounds(plot.y_bounds)
        .labels(tick_spans(plot.y_bounds));

    let chart = Chart::new(datasets)
        .block(
            Block::bordered()
                .title(format!(" {} ", plot.title))
                .title_style(theme.header_style()),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}
