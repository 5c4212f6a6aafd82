/// The immutable outcome of a scan, handed from the classifier to the
/// report writer.
use super::columns::ColumnWidths;
use super::file_record::FileRecord;
use compact_str::CompactString;
use std::path::PathBuf;

/// All records of one tracked extension, in discovery order.
#[derive(Debug, Clone)]
pub struct ExtensionGroup {
    pub extension: CompactString,
    pub records: Vec<FileRecord>,
    pub widths: ColumnWidths,
}

impl ExtensionGroup {
    pub fn new(extension: CompactString) -> Self {
        Self {
            extension,
            records: Vec::new(),
            widths: ColumnWidths::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// File counts gathered during the walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Every file seen: tracked plus other.
    pub all: u64,
    /// Files whose extension is not tracked.
    pub other: u64,
}

impl Counters {
    pub fn tracked(&self) -> u64 {
        self.all - self.other
    }
}

#[derive(Debug, Clone)]
pub struct ScanResult {
    pub root: PathBuf,
    /// One group per tracked extension, in the configured order. Groups
    /// without records are kept so every extension gets its sheet.
    pub groups: Vec<ExtensionGroup>,
    pub counters: Counters,
    /// Entries the walker could not read and skipped.
    pub walk_errors: u64,
}

impl ScanResult {
    pub fn group(&self, extension: &str) -> Option<&ExtensionGroup> {
        self.groups.iter().find(|g| g.extension == extension)
    }

    /// Records of every group, grouped by extension in configured order.
    pub fn records(&self) -> impl Iterator<Item = &FileRecord> {
        self.groups.iter().flat_map(|g| g.records.iter())
    }

    pub fn tracked_count(&self) -> usize {
        self.groups.iter().map(ExtensionGroup::len).sum()
    }

    /// Column widths across all groups, for the combined sheet.
    pub fn combined_widths(&self) -> ColumnWidths {
        let mut widths = ColumnWidths::default();
        for group in &self.groups {
            widths.merge(&group.widths);
        }
        widths
    }
}
