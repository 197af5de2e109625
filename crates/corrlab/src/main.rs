//! corrlab: interactive correlation explorer.

use std::process::ExitCode;

use corrlab_cli::ui;
use corrlab_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // The TUI owns the terminal; logging there would corrupt the screen.
    if !config.tui {
        let level = if config.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        };
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !errors::already_presented(&err) {
                ui::print_error(&format!("{err:#}"));
            }
            ExitCode::from(u8::try_from(errors::exit_code(&err)).unwrap_or(1))
        }
    }
}
