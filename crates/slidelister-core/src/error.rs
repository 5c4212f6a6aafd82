/// Error types for the core crate.
///
/// Only one failure is part of normal operation: a scan that finds no files
/// with a tracked extension. Everything else is a configuration problem
/// (bad container rules) or an output problem (the report could not be
/// written).
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The walk finished without discovering a single tracked file.
    #[error("no files found in folder '{}'", root.display())]
    NoMatches { root: PathBuf },
}

/// Errors raised while building container rules.
#[derive(Debug, Error)]
pub enum RuleError {
    /// A component pattern is not a valid regular expression.
    #[error("invalid component pattern for extension '{extension}': {source}")]
    InvalidPattern {
        extension: String,
        #[source]
        source: regex::Error,
    },

    /// A rule names an empty extension.
    #[error("container rule #{index} has an empty extension")]
    EmptyExtension { index: usize },

    /// The rules file could not be read.
    #[error("could not read rules file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The rules file is not valid JSON for a rule set.
    #[error("malformed rules file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
