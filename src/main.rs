//! SlideLister: inventory of digital microscope slide files.
//!
//! Thin binary entry point. All logic lives in the `slidelister-core`
//! and `slidelister-cli` crates.

use clap::Parser;
use slidelister_cli::{exit_code_for, is_no_match, Args, RunConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialise structured logging. Reports go to a file, so all log
    // output goes to stderr.
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("SlideLister starting");

    let outcome = RunConfig::from_args(args).and_then(|config| slidelister_cli::run(&config));
    match outcome {
        Ok(_) => {
            tracing::info!("All done");
            ExitCode::SUCCESS
        }
        Err(err) => {
            if is_no_match(&err) {
                tracing::warn!("{err:#}");
            } else {
                tracing::error!("{err:#}");
            }
            ExitCode::from(exit_code_for(&err))
        }
    }
}
