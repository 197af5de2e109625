//! CLI report presenter.

use std::path::PathBuf;

use corrlab_core::plot::ScatterPlot;
use corrlab_core::preview::PreviewRow;
use corrlab_pipeline::interfaces::ReportPresenter;

use crate::output::{format_preview_table, OutputFormat};
use crate::plot::render_svg;
use crate::ui;

/// Prints batch outputs to stdout and writes the SVG plot.
///
/// In JSON mode and in quiet mode nothing is printed to stdout; the caller
/// prints the run report or the bare correlation instead.
pub struct CLIReportPresenter {
    format: OutputFormat,
    quiet: bool,
    plot_path: Option<PathBuf>,
}

impl CLIReportPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, quiet: bool, plot_path: Option<PathBuf>) -> Self {
        Self {
            format,
            quiet,
            plot_path,
        }
    }

    fn prints(&self) -> bool {
        !self.quiet && self.format != OutputFormat::Json
    }
}

impl ReportPresenter for CLIReportPresenter {
    fn present_summary(&self, summary: &str) {
        if !self.prints() {
            return;
        }
        match self.format {
            OutputFormat::Markdown => print!("{summary}"),
            _ => print!(
                "{}",
                ui::render_markdown(summary, !ui::is_color_disabled())
            ),
        }
    }

    fn present_plot(&self, plot: &ScatterPlot) -> anyhow::Result<()> {
        let Some(path) = &self.plot_path else {
            return Ok(());
        };
        render_svg(path, plot)?;
        tracing::info!(path = %path.display(), points = plot.points.len(), "Plot written");
        if self.prints() {
            ui::print_success(&format!("Plot written to {}", path.display()));
        }
        Ok(())
    }

    fn present_preview(&self, rows: &[PreviewRow]) {
        if !self.prints() {
            return;
        }
        println!();
        print!("{}", format_preview_table(rows, self.format));
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
