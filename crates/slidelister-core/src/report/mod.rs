/// Report module: renders a [`ScanResult`] to disk.
///
/// Writing happens in two steps: [`plan::plan_sheets`] decides every cell,
/// width, and hyperlink; a format-specific writer ([`xlsx`] or
/// [`delimited`]) renders the plans. The output is only created after the
/// scan succeeded, and is written in a single pass.
pub mod delimited;
pub mod links;
pub mod plan;
pub mod xlsx;

pub use links::{LinkBudget, LinkTarget, EXCEL_MAX_LINKS};
pub use plan::{Cell, SheetLayout, SheetPlan};

use crate::error::ReportError;
use crate::model::ScanResult;
use plan::LinkPlanner;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ReportFormat {
    /// Format implied by an output file name; anything but `.csv` is XLSX.
    pub fn from_path(path: &Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Xlsx,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub output: PathBuf,
    pub format: ReportFormat,
    pub layout: SheetLayout,
    /// Hyperlink root; `None` disables links.
    pub links: Option<LinkTarget>,
    pub max_links: u32,
}

/// What a finished report contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub files: Vec<PathBuf>,
    pub sheets: usize,
    pub rows: usize,
    pub links: u32,
}

pub fn write_report(
    result: &ScanResult,
    options: &ReportOptions,
) -> Result<ReportSummary, ReportError> {
    // CSV cannot carry hyperlinks, so the budget is left untouched.
    let target = match options.format {
        ReportFormat::Xlsx => options.links.as_ref(),
        ReportFormat::Csv => None,
    };
    let mut budget = LinkBudget::new(options.max_links);
    let plans = {
        let mut planner = LinkPlanner::new(target, &mut budget);
        plan::plan_sheets(result, options.layout, &mut planner)
    };

    let files = match options.format {
        ReportFormat::Xlsx => {
            xlsx::write_workbook(&plans, &options.output)?;
            vec![options.output.clone()]
        }
        ReportFormat::Csv => match options.layout {
            SheetLayout::Combined => {
                for plan in &plans {
                    delimited::write_csv(plan, &options.output)?;
                }
                vec![options.output.clone()]
            }
            SheetLayout::Split => {
                let mut files = Vec::with_capacity(plans.len());
                for plan in &plans {
                    let path = delimited::split_output_path(&options.output, &plan.name);
                    delimited::write_csv(plan, &path)?;
                    files.push(path);
                }
                files
            }
        },
    };

    debug!("{} hyperlinks left in budget", budget.remaining());

    let summary = ReportSummary {
        files,
        sheets: plans.len(),
        rows: plans.iter().map(|p| p.rows.len()).sum(),
        links: budget.emitted(),
    };
    info!(
        "Wrote {} sheet(s), {} entries, {} hyperlinks",
        summary.sheets, summary.rows, summary.links
    );
    Ok(summary)
}
