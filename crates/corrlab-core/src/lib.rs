//! # corrlab-core
//!
//! Core library for the corrlab correlation explorer: slider parameters,
//! the seeded linear-model generator, the Pearson metric, the summary,
//! preview and scatter outputs, and the dependency graph that ties them
//! together.

pub mod constants;
pub mod dataset;
pub mod error;
pub mod graph;
pub mod markdown;
pub mod metric;
pub mod observer;
pub mod observers;
pub mod params;
pub mod plot;
pub mod preview;
pub mod progress;
pub mod summary;

// Re-exports
pub use constants::{exit_codes, DEFAULT_SEED, PREVIEW_ROWS};
pub use dataset::{generate, generate_seeded, Dataset};
pub use error::CorrError;
pub use graph::{CellId, Notebook};
pub use metric::{correlation, pearson};
pub use observer::{CellEvent, CellObserver, CellSubject};
pub use params::{ParamId, ParamSpec, Params};
pub use plot::ScatterPlot;
pub use preview::PreviewRow;
pub use progress::CancellationToken;
pub use summary::render_summary;

/// Generate a dataset from `params` and `seed` and return its correlation.
///
/// For interactive use, drive a [`Notebook`] instead.
///
/// # Example
/// ```
/// use corrlab_core::{estimate_correlation, Params};
///
/// let params = Params::new(100, 3.0, 0.0).unwrap();
/// let r = estimate_correlation(&params, 42).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
pub fn estimate_correlation(params: &Params, seed: u64) -> Result<f64, CorrError> {
    correlation(&generate_seeded(params, seed))
}
