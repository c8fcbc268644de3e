//! cicfacts CLI entry point.

use std::process::ExitCode;

use cicfacts::cli::{Cli, CommandDispatcher};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `--quiet` / `--verbose` lower or raise it
/// 3. `RUST_LOG` environment variable (if set)
/// 4. Default is WARN
///
/// Diagnostics go to stderr so fact output on stdout stays parseable.
fn init_tracing(cli: &Cli) {
    let filter = if cli.debug {
        EnvFilter::new("cicfacts=debug")
    } else if cli.quiet {
        EnvFilter::new("cicfacts=error")
    } else if cli.verbose {
        EnvFilter::new("cicfacts=info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cicfacts=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    tracing::debug!("cicfacts starting with args: {:?}", cli);

    let dispatcher = CommandDispatcher::new();

    match dispatcher.dispatch(&cli) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
