/// XLSX rendering of sheet plans with `rust_xlsxwriter`.
///
/// Every sheet gets a bold header row (numeric headers right-aligned), a
/// frozen top row, an auto-filter across all columns, and the planned column
/// widths. The workbook is assembled in memory and written to disk once, by
/// the final `save`.
use super::plan::{Cell, SheetPlan, EMPTY_SHEET_TEXT, HEADER, RIGHT_ALIGNED};
use crate::error::ReportError;
use rust_xlsxwriter::{ColNum, Format, FormatAlign, RowNum, Url, Workbook, Worksheet};
use std::path::Path;
use tracing::debug;

/// Grouped-thousands display format for numeric cells.
pub const GROUPED_THOUSANDS: &str = "### ### ### ### ### ##0";

struct Formats {
    header: Format,
    header_right: Format,
    number: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            header: Format::new().set_bold(),
            header_right: Format::new().set_bold().set_align(FormatAlign::Right),
            number: Format::new().set_num_format(GROUPED_THOUSANDS),
        }
    }
}

pub fn write_workbook(plans: &[SheetPlan], output: &Path) -> Result<(), ReportError> {
    let formats = Formats::new();
    let mut workbook = Workbook::new();

    for plan in plans {
        let sheet = workbook.add_worksheet();
        render_sheet(sheet, plan, &formats)?;
        debug!(
            "sheet '{}': {} rows, {} links",
            plan.name,
            plan.rows.len(),
            plan.link_count()
        );
    }

    workbook.save(output)?;
    Ok(())
}

fn render_sheet(
    sheet: &mut Worksheet,
    plan: &SheetPlan,
    formats: &Formats,
) -> Result<(), ReportError> {
    sheet.set_name(&plan.name)?;

    for (col, title) in HEADER.iter().enumerate() {
        let format = if RIGHT_ALIGNED.contains(&col) {
            &formats.header_right
        } else {
            &formats.header
        };
        sheet.write_string_with_format(0, col as ColNum, *title, format)?;
    }
    sheet.set_freeze_panes(1, 0)?;

    let last_row = plan.rows.len().max(1) as RowNum;
    sheet.autofilter(0, 0, last_row, (HEADER.len() - 1) as ColNum)?;

    if plan.rows.is_empty() {
        sheet.write_string(1, 0, EMPTY_SHEET_TEXT)?;
    }

    for (i, row) in plan.rows.iter().enumerate() {
        let row_num = (i + 1) as RowNum;
        for (col, cell) in row.iter().enumerate() {
            let col = col as ColNum;
            match cell {
                Cell::Number(n) => {
                    sheet.write_number_with_format(row_num, col, *n as f64, &formats.number)?;
                }
                Cell::Text(text) => {
                    sheet.write_string(row_num, col, text)?;
                }
                Cell::Link { url, text } => {
                    sheet.write_url_with_text(row_num, col, Url::new(url.as_str()), text)?;
                }
            }
        }
    }

    for (col, width) in plan.widths.iter().enumerate() {
        sheet.set_column_width(col as ColNum, *width as f64)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plan(name: &str, rows: Vec<[Cell; 6]>) -> SheetPlan {
        SheetPlan {
            name: name.to_string(),
            rows,
            widths: [3, 11, 11, 11, 11, 11],
        }
    }

    fn row(n: u64) -> [Cell; 6] {
        [
            Cell::Number(n),
            Cell::Text("ndpi".into()),
            Cell::Link {
                url: "file:////s".into(),
                text: "s".into(),
            },
            Cell::Text("a.ndpi".into()),
            Cell::Text("2024-01-01 10:00:00".into()),
            Cell::Number(1_234_567),
        ]
    }

    #[test]
    fn workbook_is_saved_with_all_sheets() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("slides.xlsx");
        let plans = vec![plan("ndpi", vec![row(1), row(2)]), plan("mrxs", Vec::new())];

        write_workbook(&plans, &out).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        assert!(bytes.starts_with(b"PK"), "xlsx files are zip containers");
    }

    #[test]
    fn duplicate_sheet_names_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dup.xlsx");
        let plans = vec![plan("ndpi", Vec::new()), plan("ndpi", Vec::new())];

        let err = write_workbook(&plans, &out).unwrap_err();
        assert!(matches!(err, ReportError::Xlsx(_)));
    }
}
