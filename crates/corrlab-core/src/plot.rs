//! Backend-independent scatter figure.
//!
//! The figure carries the points, padded axis bounds, and labels. Sinks
//! (the terminal chart, the SVG writer) only draw what is described here.

use crate::constants::{PLOT_PADDING, PLOT_TITLE, X_LABEL, Y_LABEL};
use crate::dataset::Dataset;

/// A scatter figure ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    pub points: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl ScatterPlot {
    /// Build the y-vs-x scatter of a dataset.
    #[must_use]
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            points: dataset.points().collect(),
            x_bounds: padded_bounds(dataset.x()),
            y_bounds: padded_bounds(dataset.y()),
            title: PLOT_TITLE,
            x_label: X_LABEL,
            y_label: Y_LABEL,
        }
    }
}

/// Data range widened by [`PLOT_PADDING`] on each side.
///
/// A constant column gets a unit margin so the axis never has zero width.
/// Empty input yields `[-1, 1]`.
#[must_use]
pub fn padded_bounds(values: &[f64]) -> [f64; 2] {
    let (min, max) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return [-1.0, 1.0];
    }
    let span = max - min;
    let pad = if span > 0.0 { span * PLOT_PADDING } else { 1.0 };
    [min - pad, max + pad]
}
