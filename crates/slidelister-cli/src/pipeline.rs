/// The scan → summary → report pipeline.
use crate::config::RunConfig;
use anyhow::{Context, Result};
use slidelister_core::analysis::summarise_extensions;
use slidelister_core::model::size::{format_size, group_thousands};
use slidelister_core::model::ScanResult;
use slidelister_core::report::{write_report, ReportSummary};
use slidelister_core::scanner::scan;
use tracing::{debug, info};

/// Everything a successful run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub scan: ScanResult,
    pub report: ReportSummary,
}

/// Scan the configured folder and write the report.
///
/// Nothing is written when the scan finds no tracked files; the returned
/// error then wraps [`slidelister_core::ScanError::NoMatches`].
pub fn run(config: &RunConfig) -> Result<RunOutcome> {
    let result = scan(&config.scan).context("Scan failed")?;
    log_summary(&result);

    debug!("Writing report to {}", config.report.output.display());
    let report = write_report(&result, &config.report).with_context(|| {
        format!("Failed to write report {}", config.report.output.display())
    })?;

    info!(
        "Total entries: {} in {}",
        group_thousands(report.rows as u64),
        config.report.output.display()
    );
    Ok(RunOutcome {
        scan: result,
        report,
    })
}

fn log_summary(result: &ScanResult) {
    info!(
        "Total files found in '{}': {}",
        result.root.display(),
        group_thousands(result.counters.all)
    );
    for stats in summarise_extensions(result) {
        if stats.resolved + stats.unresolved > 0 {
            info!(
                "  {}: {} ({}, {} containers found, {} missing)",
                stats.extension,
                group_thousands(stats.file_count),
                format_size(stats.total_size),
                stats.resolved,
                stats.unresolved
            );
        } else {
            info!(
                "  {}: {} ({})",
                stats.extension,
                group_thousands(stats.file_count),
                format_size(stats.total_size)
            );
        }
    }
    info!("  other: {}", group_thousands(result.counters.other));
}
