/// Sheet planning: turns a [`ScanResult`] into format-agnostic sheets.
///
/// A [`SheetPlan`] holds every cell value, which cells are hyperlinks, and
/// the final column widths. The XLSX and CSV writers only render plans, so
/// everything observable about a report (numbering, widths, link budget) is
/// decided here.
use super::links::{LinkBudget, LinkTarget, MAX_URL_LEN};
use crate::model::size::decimal_width;
use crate::model::{ColumnWidths, FileRecord, ScanResult};
use std::borrow::Cow;

/// Header row, in column order.
pub const HEADER: [&str; 6] = [
    "#",
    "extension",
    "file path",
    "file name",
    "file date",
    "file size",
];

/// Header cells rendered right-aligned (the numeric columns).
pub const RIGHT_ALIGNED: [usize; 2] = [0, 5];

/// Characters added to the longest value of each column.
pub const COLUMN_PADDING: usize = 2;

/// Text written in the first data row of a sheet without records.
pub const EMPTY_SHEET_TEXT: &str = "no files found";

/// Name of the sheet in combined mode.
pub const COMBINED_SHEET_NAME: &str = "slides";

/// Longest worksheet name a spreadsheet accepts.
const MAX_SHEET_NAME: usize = 31;

/// One sheet per extension, or everything on one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetLayout {
    #[default]
    Split,
    Combined,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Number(u64),
    Text(String),
    Link { url: String, text: String },
}

impl Cell {
    /// Plain-text rendering, used by CSV output.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Cell::Number(n) => Cow::Owned(n.to_string()),
            Cell::Text(t) | Cell::Link { text: t, .. } => Cow::Borrowed(t),
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Cell::Link { .. })
    }
}

pub type Row = [Cell; 6];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPlan {
    pub name: String,
    pub rows: Vec<Row>,
    /// Final column widths in characters, padding included.
    pub widths: [usize; 6],
}

impl SheetPlan {
    pub fn link_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| c.is_link())
            .count()
    }
}

/// Hyperlink settings for planning. `None` target means no links at all.
pub struct LinkPlanner<'a> {
    target: Option<&'a LinkTarget>,
    budget: &'a mut LinkBudget,
}

impl<'a> LinkPlanner<'a> {
    pub fn new(target: Option<&'a LinkTarget>, budget: &'a mut LinkBudget) -> Self {
        Self { target, budget }
    }

    /// A link cell while the budget lasts, plain text afterwards.
    fn cell(&mut self, display: String, link_path: &str) -> Cell {
        let Some(target) = self.target else {
            return Cell::Text(display);
        };
        let url = target.url_for(link_path);
        if url.len() > MAX_URL_LEN || !self.budget.try_take() {
            return Cell::Text(display);
        }
        Cell::Link { url, text: display }
    }
}

/// Plan every sheet of the report.
pub fn plan_sheets(
    result: &ScanResult,
    layout: SheetLayout,
    links: &mut LinkPlanner<'_>,
) -> Vec<SheetPlan> {
    match layout {
        SheetLayout::Split => {
            let mut sheets: Vec<SheetPlan> = Vec::with_capacity(result.groups.len());
            for group in &result.groups {
                let rows = group
                    .records
                    .iter()
                    .map(|r| record_row(r, u64::from(r.sequence), links))
                    .collect();
                let name = unique_sheet_name(&group.extension, &sheets);
                sheets.push(SheetPlan {
                    name,
                    rows,
                    widths: column_widths(
                        group.len(),
                        group.extension.chars().count(),
                        &group.widths,
                    ),
                });
            }
            sheets
        }
        SheetLayout::Combined => {
            let rows: Vec<Row> = result
                .records()
                .enumerate()
                .map(|(i, r)| record_row(r, i as u64 + 1, links))
                .collect();
            let longest_ext = result
                .groups
                .iter()
                .map(|g| g.extension.chars().count())
                .max()
                .unwrap_or(0);
            let widths = column_widths(rows.len(), longest_ext, &result.combined_widths());
            vec![SheetPlan {
                name: COMBINED_SHEET_NAME.to_string(),
                rows,
                widths,
            }]
        }
    }
}

fn record_row(record: &FileRecord, number: u64, links: &mut LinkPlanner<'_>) -> Row {
    let folder = record.display_folder();
    let path_cell = links.cell(folder.clone(), &folder);
    let name_cell = links.cell(record.name.to_string(), &record.display_file());
    [
        Cell::Number(number),
        Cell::Text(record.extension.to_string()),
        path_cell,
        name_cell,
        Cell::Text(record.date_text()),
        Cell::Number(record.size),
    ]
}

/// `max(longest value, header) + padding` for each column.
///
/// `row_count` sizes the `#` column: the largest number it will hold is the
/// record count (split) or the last row number (combined), which coincide.
pub fn column_widths(row_count: usize, extension_len: usize, tracked: &ColumnWidths) -> [usize; 6] {
    let longest = [
        decimal_width(row_count as u64),
        extension_len,
        tracked.path,
        tracked.name,
        tracked.date,
        tracked.size,
    ];
    let mut widths = [0; 6];
    for (i, width) in widths.iter_mut().enumerate() {
        *width = longest[i].max(HEADER[i].chars().count()) + COLUMN_PADDING;
    }
    widths
}

/// Worksheet name for an extension: forbidden characters replaced with `_`,
/// no leading or trailing apostrophe, truncated to the 31-character limit.
pub fn sheet_name(extension: &str) -> String {
    let cleaned: String = extension
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    let name: String = cleaned.trim_matches('\'').chars().take(MAX_SHEET_NAME).collect();
    if name.is_empty() {
        "sheet".to_string()
    } else {
        name
    }
}

/// [`sheet_name`] made unique among the sheets planned so far. Names compare
/// case-insensitively; clashes get `_2`, `_3`, ... within the length limit.
fn unique_sheet_name(extension: &str, planned: &[SheetPlan]) -> String {
    let taken = |name: &str| {
        let name = name.to_lowercase();
        planned.iter().any(|s| s.name.to_lowercase() == name)
    };
    let base = sheet_name(extension);
    if !taken(&base) {
        return base;
    }
    let mut n = 2usize;
    loop {
        let suffix = format!("_{n}");
        let stem: String = base.chars().take(MAX_SHEET_NAME - suffix.len()).collect();
        let candidate = format!("{stem}{suffix}");
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
