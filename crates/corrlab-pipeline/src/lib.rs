//! # corrlab-pipeline
//!
//! Batch runs over the notebook, the presenter interfaces they report
//! through, and the parallel noise sweep.

pub mod interfaces;
pub mod runner;
pub mod sweep;

pub use interfaces::{NullProgressReporter, ProgressReporter, ReportPresenter, RunReport};
pub use runner::{run_batch, RunOptions};
pub use sweep::{run_sweep, SweepConfig, SweepPoint, SweepResult};
