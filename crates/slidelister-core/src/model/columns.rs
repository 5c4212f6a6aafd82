/// Longest-value tracking for the variable-width report columns.
///
/// The classifier feeds every finished record through [`ColumnWidths::observe`]
/// so the report writer can size columns without rescanning the rows.
/// Lengths are counted in characters, not bytes.
use super::file_record::FileRecord;
use super::size::decimal_width;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub path: usize,
    pub name: usize,
    pub date: usize,
    /// Width of the plain decimal size (no grouping separators).
    pub size: usize,
}

impl ColumnWidths {
    pub fn observe(&mut self, record: &FileRecord) {
        self.path = self.path.max(record.display_folder().chars().count());
        self.name = self.name.max(record.name.chars().count());
        self.date = self.date.max(record.date_text().chars().count());
        self.size = self.size.max(decimal_width(record.size));
    }

    /// Column-wise maximum of `self` and `other`.
    pub fn merge(&mut self, other: &ColumnWidths) {
        self.path = self.path.max(other.path);
        self.name = self.name.max(other.name);
        self.date = self.date.max(other.date);
        self.size = self.size.max(other.size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordLocation;
    use compact_str::CompactString;
    use std::path::PathBuf;

    fn record(dir: &str, name: &str, size: u64) -> FileRecord {
        FileRecord {
            sequence: 1,
            extension: CompactString::new("ndpi"),
            dir: PathBuf::from(dir),
            name: CompactString::new(name),
            modified: None,
            size,
            location: RecordLocation::Plain,
        }
    }

    #[test]
    fn observe_keeps_longest_values() {
        let mut widths = ColumnWidths::default();
        widths.observe(&record("/a/bb", "short.ndpi", 5));
        widths.observe(&record("/a", "a-much-longer-name.ndpi", 123_456));

        assert_eq!(widths.path, "a/bb".len());
        assert_eq!(widths.name, "a-much-longer-name.ndpi".len());
        assert_eq!(widths.size, 6);
        assert_eq!(widths.date, 0, "records without timestamps add no width");
    }

    /// Non-ASCII names are measured in characters so umlauts do not widen
    /// the column twice.
    #[test]
    fn observe_counts_characters() {
        let mut widths = ColumnWidths::default();
        widths.observe(&record("/Färbung", "Größe.ndpi", 1));
        assert_eq!(widths.path, 7);
        assert_eq!(widths.name, 10);
    }

    #[test]
    fn merge_takes_columnwise_maximum() {
        let mut a = ColumnWidths {
            path: 10,
            name: 2,
            date: 19,
            size: 1,
        };
        let b = ColumnWidths {
            path: 3,
            name: 8,
            date: 0,
            size: 7,
        };
        a.merge(&b);
        assert_eq!(
            a,
            ColumnWidths {
                path: 10,
                name: 8,
                date: 19,
                size: 7,
            }
        );
    }
}
