//! Markdown summary of the current settings and the correlation.

use std::fmt::Write as _;

use crate::constants::CORRELATION_DECIMALS;
use crate::error::CorrError;
use crate::params::Params;

const INTERPRETATION: &str =
    "**Interpretation:** Increasing σ usually weakens |r|; larger |β₁| strengthens it.";

/// Format a parameter float in shortest round-trip form (`2.0`, `0.6`).
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

/// Format a correlation with [`CORRELATION_DECIMALS`] decimals.
#[must_use]
pub fn format_correlation(r: f64) -> String {
    format!("{r:.prec$}", prec = CORRELATION_DECIMALS)
}

/// Render the summary report.
///
/// Pure formatting: identical inputs produce a byte-identical string.
#[must_use]
pub fn render_summary(params: &Params, correlation: Result<f64, &CorrError>) -> String {
    let r = match correlation {
        Ok(r) => format_correlation(r),
        Err(err) => format!("undefined ({err})"),
    };

    let mut out = String::with_capacity(256);
    out.push_str("### Current settings\n");
    let _ = writeln!(
        out,
        "- **n** = {}, **β₁ (slope)** = {}, **σ (noise)** = {}",
        params.n(),
        format_value(params.slope()),
        format_value(params.noise()),
    );
    let _ = writeln!(out, "- **Estimated Pearson r** = {r}");
    out.push('\n');
    out.push_str(INTERPRETATION);
    out.push('\n');
    out
}
