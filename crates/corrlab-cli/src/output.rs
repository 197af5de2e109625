//! CLI output formatting.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use clap::ValueEnum;

use corrlab_core::dataset::Dataset;
use corrlab_core::preview::{PreviewRow, PREVIEW_HEADERS};
use corrlab_core::summary::format_correlation;
use corrlab_pipeline::sweep::SweepResult;

/// Decimals shown for x and y in tables.
const TABLE_DECIMALS: usize = 4;

/// How batch results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain terminal text.
    #[default]
    Text,
    /// The markdown summary and a markdown table.
    Markdown,
    /// A single JSON document.
    Json,
}

/// Format preview rows as an aligned text table or a markdown table.
#[must_use]
pub fn format_preview_table(rows: &[PreviewRow], format: OutputFormat) -> String {
    let [index, x, y] = PREVIEW_HEADERS;
    let mut out = String::new();
    match format {
        OutputFormat::Markdown => {
            let _ = writeln!(out, "| {index} | {x} | {y} |");
            out.push_str("|---:|---:|---:|\n");
            for row in rows {
                let _ = writeln!(
                    out,
                    "| {} | {:.prec$} | {:.prec$} |",
                    row.index,
                    row.x,
                    row.y,
                    prec = TABLE_DECIMALS
                );
            }
        }
        OutputFormat::Text | OutputFormat::Json => {
            let _ = writeln!(out, "{index:>4} {x:>10} {y:>10}");
            for row in rows {
                let _ = writeln!(
                    out,
                    "{:>4} {:>10.prec$} {:>10.prec$}",
                    row.index,
                    row.x,
                    row.y,
                    prec = TABLE_DECIMALS
                );
            }
        }
    }
    out
}

/// Format a noise sweep as a text table with a bar per level.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn format_sweep_table(result: &SweepResult) -> String {
    const BAR_WIDTH: f64 = 30.0;
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>6} {:>8} {:>8} {:>6}  mean |r|",
        "sigma", "mean|r|", "sd", "undef"
    );
    for point in &result.points {
        let (mean, sd, bar) = match (point.mean_abs_r, point.std_abs_r) {
            (Some(mean), Some(sd)) => (
                format_correlation(mean),
                format_correlation(sd),
                "#".repeat((mean * BAR_WIDTH).round() as usize),
            ),
            _ => ("-".to_owned(), "-".to_owned(), String::new()),
        };
        let _ = writeln!(
            out,
            "{:>6.1} {mean:>8} {sd:>8} {:>6}  {bar}",
            point.noise, point.degenerate
        );
    }
    out
}

/// Bare mean |r| column, one line per noise level, `-` where undefined.
#[must_use]
pub fn format_sweep_quiet(result: &SweepResult) -> String {
    result
        .points
        .iter()
        .map(|point| point.mean_abs_r.map_or_else(|| "-".to_owned(), format_correlation) + "\n")
        .collect()
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Serialize a value as pretty JSON.
pub fn to_json<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

/// Write the full dataset as CSV with an `x,y` header.
///
/// Floats use their shortest round-trip form, so reading the file back
/// yields the exact generated values.
pub fn write_dataset_csv(path: &Path, dataset: &Dataset) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = io::BufWriter::new(file);
    write_csv(&mut writer, dataset)?;
    writer.flush()
}

/// Write the dataset as CSV to any writer.
pub fn write_csv(out: &mut dyn Write, dataset: &Dataset) -> io::Result<()> {
    writeln!(out, "x,y")?;
    for (x, y) in dataset.points() {
        writeln!(out, "{x:?},{y:?}")?;
    }
    Ok(())
}
