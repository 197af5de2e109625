//! Noise sweep: mean |r| across seeds for each noise level.
//!
//! Trial `t` of every level uses seed `base_seed + t`, so all levels share
//! the same x draws and the same standard-normal draws; only σ differs
//! between levels.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::Serialize;
use tracing::{debug, info};

use corrlab_core::error::CorrError;
use corrlab_core::estimate_correlation;
use corrlab_core::metric::mean;
use corrlab_core::params::{Params, NOISE};
use corrlab_core::progress::CancellationToken;

use crate::interfaces::ProgressReporter;

/// Default number of seeds per noise level.
pub const DEFAULT_TRIALS: usize = 20;

/// What to sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub n: usize,
    pub slope: f64,
    /// Noise levels in ascending order.
    pub noise_levels: Vec<f64>,
    pub trials: usize,
    pub base_seed: u64,
}

impl SweepConfig {
    /// Sweep the whole noise slider at the given sample size and slope.
    #[must_use]
    pub fn from_params(params: &Params, trials: usize, base_seed: u64) -> Self {
        Self {
            n: params.n(),
            slope: params.slope(),
            noise_levels: NOISE.grid(),
            trials,
            base_seed,
        }
    }

    fn validate(&self) -> Result<Vec<Params>, CorrError> {
        if self.trials == 0 {
            return Err(CorrError::Config("sweep needs at least one trial".into()));
        }
        if self.noise_levels.is_empty() {
            return Err(CorrError::Config("sweep needs at least one noise level".into()));
        }
        self.noise_levels
            .iter()
            .map(|&noise| Params::new(self.n, self.slope, noise))
            .collect()
    }
}

/// Aggregate over the trials of one noise level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepPoint {
    pub noise: f64,
    /// Mean |r| over the defined trials; `None` when every trial was degenerate.
    pub mean_abs_r: Option<f64>,
    /// Sample standard deviation of |r| (0 with a single defined trial).
    pub std_abs_r: Option<f64>,
    pub trials: usize,
    /// Trials whose correlation was undefined.
    pub degenerate: usize,
}

/// Full sweep output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepResult {
    pub n: usize,
    pub slope: f64,
    pub points: Vec<SweepPoint>,
}

impl SweepResult {
    /// Whether mean |r| never rises by more than `tolerance` as σ grows.
    ///
    /// Levels without a defined mean are skipped.
    #[must_use]
    pub fn is_non_increasing(&self, tolerance: f64) -> bool {
        let means: Vec<f64> = self.points.iter().filter_map(|p| p.mean_abs_r).collect();
        means.windows(2).all(|w| w[1] <= w[0] + tolerance)
    }
}

/// Run the sweep on the rayon pool.
///
/// Cancellation is checked before every trial; a cancelled sweep returns
/// `CorrError::Cancelled` and no partial result.
pub fn run_sweep(
    config: &SweepConfig,
    cancel: &CancellationToken,
    reporter: &dyn ProgressReporter,
) -> Result<SweepResult, CorrError> {
    let levels = config.validate()?;
    let start = Instant::now();
    let total = levels.len() * config.trials;
    let completed = AtomicUsize::new(0);
    let mut points = Vec::with_capacity(levels.len());

    for params in &levels {
        let outcomes = (0..config.trials)
            .into_par_iter()
            .map(|t| {
                cancel.check_cancelled()?;
                let seed = config.base_seed.wrapping_add(t as u64);
                let r = estimate_correlation(params, seed);
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                reporter.report(done, total);
                Ok(r)
            })
            .collect::<Result<Vec<_>, CorrError>>()?;

        let point = aggregate(params.noise(), &outcomes);
        debug!(
            noise = point.noise,
            mean_abs_r = ?point.mean_abs_r,
            degenerate = point.degenerate,
            "Sweep level done"
        );
        points.push(point);
    }

    reporter.complete();
    info!(
        levels = points.len(),
        trials = config.trials,
        elapsed = ?start.elapsed(),
        "Noise sweep complete"
    );

    Ok(SweepResult {
        n: config.n,
        slope: config.slope,
        points,
    })
}

#[allow(clippy::cast_precision_loss)]
fn aggregate(noise: f64, outcomes: &[Result<f64, CorrError>]) -> SweepPoint {
    let abs: Vec<f64> = outcomes
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|r| r.abs())
        .collect();
    let mean_abs_r = mean(&abs);
    let std_abs_r = mean_abs_r.map(|m| {
        if abs.len() < 2 {
            0.0
        } else {
            let ss: f64 = abs.iter().map(|v| (v - m).powi(2)).sum();
            (ss / (abs.len() - 1) as f64).sqrt()
        }
    });
    SweepPoint {
        noise,
        mean_abs_r,
        std_abs_r,
        trials: outcomes.len(),
        degenerate: outcomes.len() - abs.len(),
    }
}
