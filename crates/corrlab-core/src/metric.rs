//! Pearson correlation coefficient.

use crate::dataset::Dataset;
use crate::error::CorrError;

/// Arithmetic mean, or `None` for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Pearson correlation coefficient of two equally long columns.
///
/// Uses mean-centred sums and clamps the result to `[-1, 1]`. Fails instead
/// of returning NaN when fewer than two samples are given or either column
/// is constant.
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64, CorrError> {
    if x.len() != y.len() {
        return Err(CorrError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(CorrError::InsufficientSamples(x.len()));
    }

    if is_constant(x) {
        return Err(CorrError::ZeroVariance("x"));
    }
    if is_constant(y) {
        return Err(CorrError::ZeroVariance("y"));
    }

    let (Some(mean_x), Some(mean_y)) = (mean(x), mean(y)) else {
        return Err(CorrError::InsufficientSamples(0));
    };

    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 {
        return Err(CorrError::ZeroVariance("x"));
    }
    if syy == 0.0 {
        return Err(CorrError::ZeroVariance("y"));
    }

    let r = sxy / sxx.sqrt() / syy.sqrt();
    if !r.is_finite() {
        return Err(CorrError::NonFinite);
    }
    Ok(r.clamp(-1.0, 1.0))
}

// Exact comparison: a rounded mean leaves a non-zero centred sum for
// columns such as [0.1; 3].
#[allow(clippy::float_cmp)]
fn is_constant(values: &[f64]) -> bool {
    values.iter().all(|&v| v == values[0])
}

/// Pearson correlation between the x and y columns of a dataset.
pub fn correlation(dataset: &Dataset) -> Result<f64, CorrError> {
    pearson(dataset.x(), dataset.y())
}
