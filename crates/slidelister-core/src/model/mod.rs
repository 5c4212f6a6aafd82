/// Data model for a SlideLister scan.
///
/// Re-exports the file record, the per-extension grouping, and the
/// supporting width / size helpers used by the report writer.
pub mod columns;
pub mod file_record;
pub mod scan_result;
pub mod size;

pub use columns::ColumnWidths;
pub use file_record::{display_path, FileRecord, RecordLocation};
pub use scan_result::{Counters, ExtensionGroup, ScanResult};
