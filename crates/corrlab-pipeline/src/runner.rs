//! One non-interactive pass over the notebook.

use std::time::Instant;

use anyhow::anyhow;
use tracing::{debug, info, warn};

use corrlab_core::graph::Notebook;

use crate::interfaces::{ReportPresenter, RunReport};

/// Options for a batch run.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Present the first rows of the dataset.
    pub show_preview: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { show_preview: true }
    }
}

/// Evaluate the notebook and hand its outputs to `presenter`.
///
/// A degenerate correlation is fatal here: the error is presented, nothing
/// else is, and the `CorrError` is returned as the root cause.
pub fn run_batch(
    notebook: &mut Notebook,
    presenter: &dyn ReportPresenter,
    opts: &RunOptions,
) -> anyhow::Result<RunReport> {
    let start = Instant::now();
    let recomputed = notebook.evaluate();
    debug!(cells = recomputed.len(), generation = notebook.generation(), "Notebook evaluated");

    let correlation = match notebook.correlation() {
        Some(Ok(r)) => r,
        Some(Err(err)) => {
            warn!(%err, "Correlation is undefined");
            presenter.present_error(&err.to_string());
            return Err(err.clone().into());
        }
        None => return Err(anyhow!("correlation cell was not evaluated")),
    };

    let summary = notebook
        .summary()
        .ok_or_else(|| anyhow!("summary cell was not evaluated"))?
        .to_owned();
    presenter.present_summary(&summary);

    if let Some(plot) = notebook.plot() {
        presenter.present_plot(plot)?;
    }

    let preview = notebook.preview().unwrap_or_default().to_vec();
    if opts.show_preview {
        presenter.present_preview(&preview);
    }

    let params = notebook.params();
    info!(
        n = params.n(),
        slope = params.slope(),
        noise = params.noise(),
        seed = notebook.seed(),
        r = correlation,
        elapsed = ?start.elapsed(),
        "Batch run complete"
    );

    Ok(RunReport {
        params,
        seed: notebook.seed(),
        samples: notebook.dataset().map_or(0, |ds| ds.len()),
        correlation,
        summary,
        preview,
    })
}
