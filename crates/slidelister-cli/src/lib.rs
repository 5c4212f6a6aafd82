/// SlideLister CLI: argument parsing, configuration, and the run pipeline.
///
/// The binary entry point only parses [`Args`], sets up logging, and hands
/// over to [`run`]. Exit codes are decided by [`exit_code_for`].
pub mod args;
pub mod config;
pub mod pipeline;

pub use args::Args;
pub use config::RunConfig;
pub use pipeline::{run, RunOutcome};

use slidelister_core::ScanError;

/// Exit code when no tracked files were found.
pub const EXIT_NO_FILES: u8 = 2;

/// Exit code for every other failure.
pub const EXIT_FAILURE: u8 = 1;

/// Map a failed run to its process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<ScanError>() {
        Some(ScanError::NoMatches { .. }) => EXIT_NO_FILES,
        None => EXIT_FAILURE,
    }
}

/// `true` when a run stopped because nothing matched.
pub fn is_no_match(err: &anyhow::Error) -> bool {
    exit_code_for(err) == EXIT_NO_FILES
}
