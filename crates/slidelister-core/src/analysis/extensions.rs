/// Per-extension totals for the end-of-scan summary.
///
/// Unlike a generic file-type breakdown, the order here is the configured
/// extension order (the same order the report sheets use), and composite
/// formats additionally report how many slides had their container found.
use crate::model::{RecordLocation, ScanResult};
use compact_str::CompactString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionStats {
    pub extension: CompactString,
    pub file_count: u64,
    /// Sum of record sizes (container totals for resolved composites).
    pub total_size: u64,
    pub resolved: u64,
    pub unresolved: u64,
}

pub fn summarise_extensions(result: &ScanResult) -> Vec<ExtensionStats> {
    result
        .groups
        .iter()
        .map(|group| {
            let mut stats = ExtensionStats {
                extension: group.extension.clone(),
                file_count: group.records.len() as u64,
                total_size: 0,
                resolved: 0,
                unresolved: 0,
            };
            for record in &group.records {
                stats.total_size += record.size;
                match record.location {
                    RecordLocation::Plain => {}
                    RecordLocation::Resolved { .. } => stats.resolved += 1,
                    RecordLocation::Unresolved { .. } => stats.unresolved += 1,
                }
            }
            stats
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ContainerRules;
    use crate::scanner::{Classifier, WalkEntry};
    use std::path::PathBuf;

    fn result_for(entries: &[WalkEntry]) -> ScanResult {
        let exts = [CompactString::new("mrxs"), CompactString::new("svs")];
        let mut classifier = Classifier::new(&exts, &ContainerRules::builtin());
        for e in entries {
            classifier.observe(e);
        }
        classifier.finish(PathBuf::from("/s"), 0)
    }

    #[test]
    fn stats_follow_configured_order() {
        let result = result_for(&[WalkEntry::file("/s/x.svs", 10, None)]);
        let stats = summarise_extensions(&result);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].extension, "mrxs");
        assert_eq!(stats[0].file_count, 0);
        assert_eq!(stats[1].extension, "svs");
        assert_eq!(stats[1].total_size, 10);
    }

    #[test]
    fn stats_count_container_outcomes() {
        let result = result_for(&[
            WalkEntry::file("/s/a.mrxs", 1, None),
            WalkEntry::file("/s/a/Data0000.dat", 100, None),
            WalkEntry::file("/s/b.mrxs", 2, None),
        ]);
        let mrxs = &summarise_extensions(&result)[0];
        assert_eq!(mrxs.file_count, 2);
        assert_eq!(mrxs.resolved, 1);
        assert_eq!(mrxs.unresolved, 1);
        assert_eq!(mrxs.total_size, 102);
    }

    #[test]
    fn plain_records_have_no_container_outcome() {
        let result = result_for(&[WalkEntry::file("/s/x.svs", 10, None)]);
        let svs = &summarise_extensions(&result)[1];
        assert_eq!(svs.resolved + svs.unresolved, 0);
    }
}
