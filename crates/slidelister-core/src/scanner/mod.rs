/// Scanner module: one synchronous pass over a folder tree.
///
/// [`scan`] drives the [`walk::Walk`] iterator into a [`classify::Classifier`]
/// and returns the frozen [`ScanResult`]. A scan that finds no tracked files
/// is reported as [`ScanError::NoMatches`] so the caller can stop before any
/// report is created.
pub mod classify;
pub mod walk;

pub use classify::{Classifier, ContainerSizeAccumulator};
pub use walk::{Walk, WalkEntry};

use crate::error::ScanError;
use crate::model::ScanResult;
use crate::rules::ContainerRules;
use compact_str::CompactString;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, warn};

/// What to scan and how to interpret it.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    pub root: PathBuf,
    /// Normalised tracked extensions, in report order.
    pub extensions: Vec<CompactString>,
    pub rules: ContainerRules,
}

pub fn scan(request: &ScanRequest) -> Result<ScanResult, ScanError> {
    let start = Instant::now();
    info!("Scanning {}", request.root.display());

    let mut classifier = Classifier::new(&request.extensions, &request.rules);
    let mut walk = Walk::new(&request.root);
    for entry in walk.by_ref() {
        classifier.observe(&entry);
    }
    let walk_errors = walk.error_count();
    if walk_errors > 0 {
        warn!("{walk_errors} entries could not be read and were skipped");
    }

    let result = classifier.finish(request.root.clone(), walk_errors);
    debug!(
        "Scan complete: {} files ({} tracked) in {:?}",
        result.counters.all,
        result.counters.tracked(),
        start.elapsed()
    );

    if result.tracked_count() == 0 {
        return Err(ScanError::NoMatches {
            root: request.root.clone(),
        });
    }
    Ok(result)
}
