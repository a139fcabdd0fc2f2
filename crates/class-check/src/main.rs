//! class-check: finds Bootstrap 4 classes that are gone or renamed in Bootstrap 5.

mod cli;
mod config;
mod orchestrator;
mod output;

use clap::Parser;
use cli::Args;
use orchestrator::RunError;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "CLASS_CHECK_LOG";

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    match orchestrator::run(&args) {
        Ok(summary) => {
            if summary.failed() {
                std::process::exit(1);
            }
        }
        Err(RunError::MissingFolder(path)) => {
            error!("Path {} does not exist", path);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }
}

/// Logs go to stderr so findings on stdout stay parseable.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
