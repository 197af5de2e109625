//! Sweep progress bar.

use indicatif::{ProgressBar, ProgressStyle};

use corrlab_pipeline::interfaces::ProgressReporter;

const TEMPLATE: &str = "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} trials ({eta})";

/// Progress reporter backed by an indicatif bar on stderr.
pub struct CLIProgressReporter {
    bar: ProgressBar,
}

impl CLIProgressReporter {
    /// A visible bar, or a hidden one when `quiet`.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let style = ProgressStyle::default_bar()
                .template(TEMPLATE)
                .map(|s| s.progress_chars("=>-"))
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            let bar = ProgressBar::new(0);
            bar.set_style(style);
            bar
        };
        Self { bar }
    }

    /// Current bar position.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.bar.position()
    }
}

impl ProgressReporter for CLIProgressReporter {
    fn report(&self, completed: usize, total: usize) {
        self.bar.set_length(total as u64);
        // Trials finish out of order on the pool; never move backwards.
        if completed as u64 > self.bar.position() {
            self.bar.set_position(completed as u64);
        }
    }

    fn complete(&self) {
        self.bar.finish_and_clear();
    }
}
