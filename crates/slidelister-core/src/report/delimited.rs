/// CSV rendering of sheet plans.
///
/// CSV has no formatting and no hyperlinks: numbers are written as plain
/// digits and link cells as their display text.
use super::plan::{Cell, SheetPlan, HEADER};
use crate::error::ReportError;
use std::path::Path;

pub fn write_csv(plan: &SheetPlan, output: &Path) -> Result<(), ReportError> {
    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(HEADER)?;
    for row in &plan.rows {
        writer.write_record(row.iter().map(|cell| cell.text().into_owned()))?;
    }
    writer.flush()?;
    Ok(())
}

/// File name for one sheet of a split CSV report: `<stem>_<sheet>.csv`
/// next to `output`.
pub fn split_output_path(output: &Path, sheet: &str) -> std::path::PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    output.with_file_name(format!("{stem}_{sheet}.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn csv_has_header_and_plain_values() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("slides.csv");
        let plan = SheetPlan {
            name: "ndpi".into(),
            rows: vec![[
                Cell::Number(1),
                Cell::Text("ndpi".into()),
                Cell::Link {
                    url: "file:////data/a b".into(),
                    text: "data/a b".into(),
                },
                Cell::Text("x, y.ndpi".into()),
                Cell::Text(String::new()),
                Cell::Number(1_234_567),
            ]],
            widths: [0; 6],
        };

        write_csv(&plan, &out).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "#,extension,file path,file name,file date,file size");
        assert_eq!(lines[1], "1,ndpi,data/a b,\"x, y.ndpi\",,1234567");
    }

    #[test]
    fn split_paths_carry_sheet_name() {
        assert_eq!(
            split_output_path(Path::new("/out/digital slides.csv"), "mrxs"),
            Path::new("/out/digital slides_mrxs.csv")
        );
    }
}
