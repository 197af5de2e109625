//! Truncated tabular view of a dataset.

use serde::Serialize;

use crate::dataset::Dataset;

/// Column headers of the preview table.
pub const PREVIEW_HEADERS: [&str; 3] = ["", "x", "y"];

/// One row of the preview: 0-based index and the pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreviewRow {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// The first `min(rows, dataset.len())` rows.
#[must_use]
pub fn preview(dataset: &Dataset, rows: usize) -> Vec<PreviewRow> {
    dataset
        .points()
        .take(rows)
        .enumerate()
        .map(|(index, (x, y))| PreviewRow { index, x, y })
        .collect()
}
