//! Pipeline interfaces.

use serde::Serialize;

use corrlab_core::params::Params;
use corrlab_core::plot::ScatterPlot;
use corrlab_core::preview::PreviewRow;

/// Trait for reporting sweep progress to the user.
pub trait ProgressReporter: Send + Sync {
    /// Report that `completed` of `total` trials are done.
    fn report(&self, completed: usize, total: usize);

    /// Report completion.
    fn complete(&self);
}

/// Trait for presenting the notebook outputs to the user.
pub trait ReportPresenter: Send + Sync {
    /// Present the markdown summary.
    fn present_summary(&self, summary: &str);

    /// Present the scatter figure.
    fn present_plot(&self, plot: &ScatterPlot) -> anyhow::Result<()>;

    /// Present the preview rows.
    fn present_preview(&self, rows: &[PreviewRow]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Outcome of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub params: Params,
    pub seed: u64,
    pub samples: usize,
    pub correlation: f64,
    pub summary: String,
    pub preview: Vec<PreviewRow>,
}

/// Null progress reporter (does nothing).
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {
    fn report(&self, _completed: usize, _total: usize) {}
    fn complete(&self) {}
}
