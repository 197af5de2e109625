//! The three adjustable parameters and their slider specifications.
//!
//! Every parameter lives on a fixed grid `min + k * step` inside
//! `[min, max]`. A [`Params`] value is an immutable snapshot whose fields are
//! always on their grids; downstream cells only ever read it.

use std::fmt;

use serde::Serialize;

use crate::error::CorrError;

/// Absolute tolerance when deciding whether a value is on a step grid.
const GRID_TOLERANCE: f64 = 1e-9;

/// Upper bound on the decimal places derived from a step.
const MAX_STEP_DECIMALS: i32 = 9;

/// Range and step of one slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Short name used in flags, logs, and errors.
    pub name: &'static str,
    /// Human-readable label shown next to the slider.
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

/// Sample size: integer, 50–1000, step 50.
pub const SAMPLE_SIZE: ParamSpec = ParamSpec {
    name: "n",
    label: "Sample size (n)",
    min: 50.0,
    max: 1000.0,
    step: 50.0,
    default: 200.0,
};

/// Slope of the linear model.
pub const SLOPE: ParamSpec = ParamSpec {
    name: "slope",
    label: "Slope (β₁)",
    min: -5.0,
    max: 5.0,
    step: 0.5,
    default: 2.0,
};

/// Standard deviation of the additive Gaussian noise.
pub const NOISE: ParamSpec = ParamSpec {
    name: "noise",
    label: "Noise σ",
    min: 0.0,
    max: 5.0,
    step: 0.2,
    default: 1.0,
};

impl ParamSpec {
    /// Number of decimal places needed to represent the step.
    #[must_use]
    pub fn decimals(&self) -> i32 {
        let mut scaled = self.step;
        let mut decimals = 0;
        while decimals < MAX_STEP_DECIMALS && (scaled - scaled.round()).abs() > GRID_TOLERANCE {
            scaled *= 10.0;
            decimals += 1;
        }
        decimals
    }

    /// Whether `value` lies inside `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp into range and round to the nearest grid position.
    ///
    /// The result is rounded to the step's precision, so `3 * 0.2` comes
    /// back as `0.6`. NaN snaps to the default.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        let value = if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        };
        let steps = ((value - self.min) / self.step).round();
        let snapped = round_to(self.min + steps * self.step, self.decimals());
        normalize_zero(snapped.clamp(self.min, self.max))
    }

    /// Whether `value` is inside the range and on the step grid.
    #[must_use]
    pub fn is_on_grid(&self, value: f64) -> bool {
        self.contains(value) && (self.snap(value) - value).abs() <= GRID_TOLERANCE
    }

    /// Validate a value, returning its canonical grid representation.
    pub fn validate(&self, value: f64) -> Result<f64, CorrError> {
        if value.is_nan() || !self.contains(value) {
            return Err(CorrError::OutOfRange {
                param: self.name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        if !self.is_on_grid(value) {
            return Err(CorrError::OffStep {
                param: self.name,
                value,
                min: self.min,
                step: self.step,
            });
        }
        Ok(self.snap(value))
    }

    /// One step up, saturating at `max`.
    #[must_use]
    pub fn step_up(&self, value: f64) -> f64 {
        self.snap(self.snap(value) + self.step)
    }

    /// One step down, saturating at `min`.
    #[must_use]
    pub fn step_down(&self, value: f64) -> f64 {
        self.snap(self.snap(value) - self.step)
    }

    /// Number of grid positions between `min` and `max` inclusive.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn positions(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }

    /// Every grid value in ascending order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn grid(&self) -> Vec<f64> {
        let decimals = self.decimals();
        (0..self.positions())
            .map(|k| normalize_zero(round_to(self.min + k as f64 * self.step, decimals)))
            .collect()
    }

    /// Slider position of `value` as a fraction of the range.
    #[must_use]
    pub fn ratio(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Identifies one of the three parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ParamId {
    SampleSize,
    Slope,
    Noise,
}

impl ParamId {
    /// All parameters in slider order.
    pub const ALL: [ParamId; 3] = [ParamId::SampleSize, ParamId::Slope, ParamId::Noise];

    /// The slider specification of this parameter.
    #[must_use]
    pub fn spec(self) -> &'static ParamSpec {
        match self {
            Self::SampleSize => &SAMPLE_SIZE,
            Self::Slope => &SLOPE,
            Self::Noise => &NOISE,
        }
    }

    /// The next parameter in slider order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::SampleSize => Self::Slope,
            Self::Slope => Self::Noise,
            Self::Noise => Self::SampleSize,
        }
    }

    /// The previous parameter in slider order, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::SampleSize => Self::Noise,
            Self::Slope => Self::SampleSize,
            Self::Noise => Self::Slope,
        }
    }
}

impl fmt::Display for ParamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.spec().name)
    }
}

/// Immutable snapshot of the three parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Params {
    n: usize,
    slope: f64,
    noise: f64,
}

impl Default for Params {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn default() -> Self {
        Self {
            n: SAMPLE_SIZE.default as usize,
            slope: SLOPE.default,
            noise: NOISE.default,
        }
    }
}

impl Params {
    /// Build a validated snapshot.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(n: usize, slope: f64, noise: f64) -> Result<Self, CorrError> {
        SAMPLE_SIZE.validate(n as f64)?;
        Ok(Self {
            n,
            slope: SLOPE.validate(slope)?,
            noise: NOISE.validate(noise)?,
        })
    }

    /// Sample size.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Slope of the linear model.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Noise standard deviation.
    #[must_use]
    pub fn noise(&self) -> f64 {
        self.noise
    }

    /// Current value of a parameter as a float.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn get(&self, id: ParamId) -> f64 {
        match id {
            ParamId::SampleSize => self.n as f64,
            ParamId::Slope => self.slope,
            ParamId::Noise => self.noise,
        }
    }

    /// Snapshot with one parameter replaced by a validated value.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn with(self, id: ParamId, value: f64) -> Result<Self, CorrError> {
        let value = id.spec().validate(value)?;
        Ok(match id {
            ParamId::SampleSize => Self {
                n: value as usize,
                ..self
            },
            ParamId::Slope => Self {
                slope: value,
                ..self
            },
            ParamId::Noise => Self {
                noise: value,
                ..self
            },
        })
    }

    /// Snapshot with one parameter snapped to the grid position nearest `value`.
    #[must_use]
    pub fn snapped(self, id: ParamId, value: f64) -> Self {
        self.with(id, id.spec().snap(value)).unwrap_or(self)
    }

    /// Snapshot with one parameter moved a single step.
    #[must_use]
    pub fn stepped(self, id: ParamId, up: bool) -> Self {
        let spec = id.spec();
        let current = self.get(id);
        let next = if up {
            spec.step_up(current)
        } else {
            spec.step_down(current)
        };
        self.snapped(id, next)
    }
}
