/// SlideLister Core: scanning, container aggregation, and report writing.
///
/// This crate contains all business logic with zero CLI dependencies.
/// A run is a single linear pipeline: walk the folder tree, classify every
/// entry into an immutable [`model::ScanResult`], then render that result
/// into a spreadsheet (or CSV) report.
///
/// # Modules
///
/// - [`model`]: File records, per-extension groups, and column-width tracking.
/// - [`rules`]: Container rules describing multi-file slide formats.
/// - [`scanner`]: Directory walk plus classification / container-size aggregation.
/// - [`analysis`]: Post-scan per-extension summaries.
/// - [`report`]: Sheet planning, hyperlink budget, XLSX and CSV writers.
/// - [`platform`]: Platform-specific hyperlink roots.
pub mod analysis;
pub mod error;
pub mod model;
pub mod platform;
pub mod report;
pub mod rules;
pub mod scanner;

pub use error::{ReportError, RuleError, ScanError};
