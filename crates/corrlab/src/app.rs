//! Application entry point and dispatch.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use tracing::info;

use corrlab_cli::output::{
    format_duration, format_sweep_quiet, format_sweep_table, to_json, write_dataset_csv,
    OutputFormat,
};
use corrlab_cli::presenter::CLIReportPresenter;
use corrlab_cli::progress::CLIProgressReporter;
use corrlab_cli::ui;
use corrlab_core::graph::Notebook;
use corrlab_core::observers::LoggingObserver;
use corrlab_core::params::Params;
use corrlab_core::progress::CancellationToken;
use corrlab_core::summary::{format_correlation, format_value};
use corrlab_pipeline::runner::{run_batch, RunOptions};
use corrlab_pipeline::sweep::{run_sweep, SweepConfig};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        corrlab_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let params = config.params()?;

    if config.tui {
        return run_tui(config, params);
    }

    if config.sweep {
        return run_noise_sweep(config, &params);
    }

    run_cli(config, params)
}

fn run_cli(config: &AppConfig, params: Params) -> Result<()> {
    let mut notebook = Notebook::new(params, config.seed);
    if config.verbose {
        notebook.register(Arc::new(LoggingObserver::new()));
    }

    let presenter = CLIReportPresenter::new(config.format, config.quiet, config.plot.clone());
    let opts = RunOptions {
        show_preview: !config.no_preview,
    };
    let report = run_batch(&mut notebook, &presenter, &opts)?;

    if let Some(path) = &config.output {
        let dataset = notebook
            .dataset()
            .ok_or_else(|| anyhow!("dataset cell was not evaluated"))?;
        write_dataset_csv(path, dataset)
            .with_context(|| format!("writing dataset to {}", path.display()))?;
        info!(path = %path.display(), rows = dataset.len(), "Dataset written");
    }

    if config.format == OutputFormat::Json {
        println!("{}", to_json(&report)?);
    } else if config.quiet {
        println!("{}", format_correlation(report.correlation));
    }

    Ok(())
}

fn run_noise_sweep(config: &AppConfig, params: &Params) -> Result<()> {
    let sweep = SweepConfig::from_params(params, config.trials, config.seed);
    let cancel = CancellationToken::new();
    ctrlc_handler(cancel.clone())?;

    let json = config.format == OutputFormat::Json;
    let reporter = CLIProgressReporter::new(config.quiet || json);
    let start = Instant::now();
    let result = run_sweep(&sweep, &cancel, &reporter)?;
    let elapsed = start.elapsed();

    if json {
        println!("{}", to_json(&result)?);
    } else if config.quiet {
        print!("{}", format_sweep_quiet(&result));
    } else {
        ui::print_header(&format!(
            "{} | noise sweep: n = {}, slope = {}, {} seeds per level",
            full_version(),
            result.n,
            format_value(result.slope),
            sweep.trials
        ));
        print!("{}", format_sweep_table(&result));
        ui::print_success(&format!("Sweep finished in {}", format_duration(elapsed)));
    }

    Ok(())
}

fn run_tui(config: &AppConfig, params: Params) -> Result<()> {
    let notebook = Notebook::new(params, config.seed);
    let mut app = corrlab_tui::TuiApp::new(notebook);

    app.run().map_err(|e| anyhow!("TUI error: {e}"))?;

    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) -> Result<()> {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .context("setting Ctrl+C handler")
}
