//! Error type shared by the corrlab crates.

/// Errors raised while validating parameters or computing cell outputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CorrError {
    /// A parameter value lies outside its allowed range.
    #[error("{param} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        param: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A parameter value is not on its step grid.
    #[error("{param} = {value} is not on the grid {min} + k * {step}")]
    OffStep {
        param: &'static str,
        value: f64,
        min: f64,
        step: f64,
    },

    /// Correlation needs at least two samples.
    #[error("correlation needs at least 2 samples, got {0}")]
    InsufficientSamples(usize),

    /// One of the columns is constant.
    #[error("column {0} has zero variance")]
    ZeroVariance(&'static str),

    /// The x and y columns have different lengths.
    #[error("column lengths differ: x has {x}, y has {y}")]
    LengthMismatch { x: usize, y: usize },

    /// The inputs produced a non-finite coefficient.
    #[error("correlation is not finite")]
    NonFinite,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The operation was cancelled.
    #[error("operation cancelled")]
    Cancelled,
}

impl CorrError {
    /// Whether this error means the correlation is undefined for the data.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            Self::InsufficientSamples(_)
                | Self::ZeroVariance(_)
                | Self::LengthMismatch { .. }
                | Self::NonFinite
        )
    }

    /// Whether this error comes from an invalid parameter or setting.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::OffStep { .. } | Self::Config(_)
        )
    }
}
