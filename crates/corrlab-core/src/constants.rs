//! Constants for data generation, rendering, and process exit codes.

/// Seed of the random source when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Lower bound of the uniform x draw.
pub const X_MIN: f64 = -3.0;

/// Upper bound (exclusive) of the uniform x draw.
pub const X_MAX: f64 = 3.0;

/// Number of rows shown by the table preview.
pub const PREVIEW_ROWS: usize = 10;

/// Decimal places used when reporting the correlation coefficient.
pub const CORRELATION_DECIMALS: usize = 3;

/// Fraction of the data range added on each side of a plot axis.
pub const PLOT_PADDING: f64 = 0.05;

/// Opacity of scatter points in rendered figures.
pub const POINT_OPACITY: f64 = 0.6;

/// Scatter plot title.
pub const PLOT_TITLE: &str = "y vs x (linear model with noise)";

/// Horizontal axis label.
pub const X_LABEL: &str = "x";

/// Vertical axis label.
pub const Y_LABEL: &str = "y";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, rendering).
    pub const ERROR_GENERIC: i32 = 1;
    /// The correlation was undefined for the generated data.
    pub const ERROR_DEGENERATE: i32 = 3;
    /// Invalid configuration or parameter value.
    pub const ERROR_CONFIG: i32 = 4;
    /// Cancelled by the user (Ctrl+C).
    pub const ERROR_CANCELED: i32 = 130;
}
