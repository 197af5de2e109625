//! # corrlab-cli
//!
//! CLI output, SVG plotting, progress display, and shell completion.

pub mod completion;
pub mod output;
pub mod plot;
pub mod presenter;
pub mod progress;
pub mod ui;

pub use output::OutputFormat;
pub use presenter::CLIReportPresenter;
pub use progress::CLIProgressReporter;
