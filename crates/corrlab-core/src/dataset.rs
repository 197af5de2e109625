//! Synthetic linear dataset generation.
//!
//! The generator takes the random source explicitly. All `n` x-values are
//! drawn first, then all `n` noise values, so a given seed always yields the
//! same dataset regardless of the parameter values that consumed it before.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::constants::{X_MAX, X_MIN};
use crate::error::CorrError;
use crate::params::Params;

/// Ordered (x, y) samples stored column-wise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Dataset {
    /// Build a dataset from two columns of equal length.
    pub fn from_columns(x: Vec<f64>, y: Vec<f64>) -> Result<Self, CorrError> {
        if x.len() != y.len() {
            return Err(CorrError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    /// The x column.
    #[must_use]
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// The y column.
    #[must_use]
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Number of (x, y) pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over the (x, y) pairs in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Generate `params.n()` pairs with x ~ U[-3, 3) and y = slope * x + N(0, σ).
pub fn generate<R: Rng + ?Sized>(params: &Params, rng: &mut R) -> Dataset {
    let n = params.n();
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(X_MIN..X_MAX)).collect();
    let noise: Vec<f64> = (0..n)
        .map(|_| random_normal(rng, 0.0, params.noise()))
        .collect();
    let y = x
        .iter()
        .zip(&noise)
        .map(|(&xi, &eps)| params.slope() * xi + eps)
        .collect();
    Dataset { x, y }
}

/// Generate from a fresh ChaCha20 stream seeded with `seed`.
///
/// The output is a pure function of `(params, seed)` and is identical on
/// every platform.
#[must_use]
pub fn generate_seeded(params: &Params, seed: u64) -> Dataset {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    generate(params, &mut rng)
}

/// One Normal(mean, std_dev) draw via the Box–Muller transform.
///
/// Consumes exactly two uniform draws; `std_dev == 0` returns `mean`.
pub fn random_normal<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let u1 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
    let u2 = rng.gen::<f64>();
    let radius = (-2.0 * u1.ln()).sqrt();
    let theta = 2.0 * std::f64::consts::PI * u2;
    mean + std_dev * radius * theta.cos()
}
