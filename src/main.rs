//! envtier entry point.
//!
//! With no subcommand this is the Lambda bootstrap.

use std::process::ExitCode;

use clap::Parser;
use console::style;
use envtier::cli::{Cli, CommandDispatcher};
use envtier::config::{LogFormat, Settings};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr so command output on stdout stays parseable.
fn init_tracing(debug: bool, format: LogFormat) {
    let filter = if debug {
        EnvFilter::new("envtier=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("envtier=info"))
    };

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .with(filter)
            .init(),
    }
}

fn report(err: &dyn std::fmt::Display) {
    eprintln!("{} {}", style("Error:").red().bold(), err);
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            report(&e);
            return ExitCode::from(1);
        }
    };

    init_tracing(cli.debug, settings.log_format);
    tracing::debug!("envtier starting with args: {:?}", cli);

    let dispatcher = CommandDispatcher::new(settings);
    let mut stdout = std::io::stdout();

    match dispatcher.dispatch(&cli, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::from(1)
        }
    }
}
