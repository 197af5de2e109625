//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use corrlab_cli::output::OutputFormat;
use corrlab_core::error::CorrError;
use corrlab_core::params::Params;
use corrlab_pipeline::sweep::DEFAULT_TRIALS;

/// corrlab: explore how sample size, slope, and noise shape Pearson's r.
#[derive(Parser, Debug)]
#[command(name = "corrlab", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Sample size (50 to 1000, step 50).
    #[arg(short, long, default_value = "200", env = "CORRLAB_N")]
    pub n: usize,

    /// Slope of the linear model (-5 to 5, step 0.5).
    #[arg(long, default_value = "2.0", env = "CORRLAB_SLOPE", allow_negative_numbers = true)]
    pub slope: f64,

    /// Noise standard deviation (0 to 5, step 0.2).
    #[arg(long, default_value = "1.0", env = "CORRLAB_NOISE")]
    pub noise: f64,

    /// Random seed.
    #[arg(long, default_value = "42", env = "CORRLAB_SEED")]
    pub seed: u64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the scatter plot as SVG to this file.
    #[arg(long)]
    pub plot: Option<PathBuf>,

    /// Write the full dataset as CSV to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Launch the interactive explorer.
    #[arg(long, conflicts_with = "sweep")]
    pub tui: bool,

    /// Sweep every noise level and report mean |r|.
    #[arg(long)]
    pub sweep: bool,

    /// Seeds per noise level in sweep mode.
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Quiet mode (only output r).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip the preview table.
    #[arg(long)]
    pub no_preview: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validate the three slider values into a parameter snapshot.
    pub fn params(&self) -> Result<Params, CorrError> {
        Params::new(self.n, self.slope, self.noise)
    }
}
