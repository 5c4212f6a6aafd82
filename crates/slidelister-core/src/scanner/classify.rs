/// Classification and container-size aggregation.
///
/// The [`Classifier`] is the whole mutable state of a scan. It sees every
/// walk entry once, and is then consumed by [`Classifier::finish`] into an
/// immutable [`ScanResult`]:
///
/// 1. Files matching a container component pattern add their size to the
///    [`ContainerSizeAccumulator`] under the rule's container folder.
/// 2. Files with a tracked extension become [`FileRecord`]s. Records of a
///    composite format remember the container folder they expect.
/// 3. Everything else only bumps the `other` counter.
///
/// Resolution of composite records happens in `finish`, after the walk, so
/// components discovered after their marker file still count.
use super::walk::WalkEntry;
use crate::model::{Counters, ExtensionGroup, FileRecord, RecordLocation, ScanResult};
use crate::rules::{normalise_extension, ContainerRules};
use compact_str::CompactString;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Running byte totals keyed by container folder.
#[derive(Debug, Default)]
pub struct ContainerSizeAccumulator {
    totals: HashMap<PathBuf, u64>,
}

impl ContainerSizeAccumulator {
    pub fn add(&mut self, container: PathBuf, bytes: u64) {
        *self.totals.entry(container).or_insert(0) += bytes;
    }

    pub fn total(&self, container: &Path) -> Option<u64> {
        self.totals.get(container).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// A composite record waiting for its container to be resolved.
#[derive(Debug)]
struct PendingContainer {
    group: usize,
    record: usize,
    container: PathBuf,
}

pub struct Classifier {
    rules: ContainerRules,
    groups: Vec<ExtensionGroup>,
    /// Extension → index into `groups`.
    group_index: HashMap<CompactString, usize>,
    accumulator: ContainerSizeAccumulator,
    pending: Vec<PendingContainer>,
    counters: Counters,
}

impl Classifier {
    /// `extensions` must already be normalised (lowercase, no dot, unique).
    pub fn new(extensions: &[CompactString], rules: &ContainerRules) -> Self {
        let groups: Vec<ExtensionGroup> = extensions
            .iter()
            .cloned()
            .map(ExtensionGroup::new)
            .collect();
        let group_index = extensions
            .iter()
            .enumerate()
            .map(|(i, ext)| (ext.clone(), i))
            .collect();

        Self {
            rules: rules.restricted_to(extensions),
            groups,
            group_index,
            accumulator: ContainerSizeAccumulator::default(),
            pending: Vec::new(),
            counters: Counters::default(),
        }
    }

    pub fn observe(&mut self, entry: &WalkEntry) {
        if entry.is_dir {
            return;
        }
        let Some(file_name) = entry.path.file_name() else {
            return;
        };
        let name = file_name.to_string_lossy();

        for rule in self.rules.component_rules(&name) {
            if let Some(container) = rule.container_of(&entry.path) {
                trace!(
                    "component {} → {}",
                    entry.path.display(),
                    container.display()
                );
                self.accumulator.add(container, entry.size);
            }
        }

        self.counters.all += 1;

        let group = entry
            .path
            .extension()
            .map(|ext| normalise_extension(&ext.to_string_lossy()))
            .and_then(|ext| self.group_index.get(&ext).copied());
        let Some(group) = group else {
            self.counters.other += 1;
            return;
        };

        let dir = entry.path.parent().map(Path::to_path_buf).unwrap_or_default();
        let extension = self.groups[group].extension.clone();
        let records = &mut self.groups[group].records;

        let location = match self.rules.for_extension(&extension) {
            Some(rule) => {
                self.pending.push(PendingContainer {
                    group,
                    record: records.len(),
                    container: rule.container_for_marker(&dir, &name),
                });
                // Placeholder until `finish` resolves the container.
                RecordLocation::Unresolved {
                    expected: PathBuf::new(),
                }
            }
            None => RecordLocation::Plain,
        };

        records.push(FileRecord {
            sequence: (records.len() + 1) as u32,
            extension,
            dir,
            name: CompactString::new(&name),
            modified: entry.modified,
            size: entry.size,
            location,
        });
    }

    /// Resolve composite records against the accumulated container sizes
    /// and freeze the result.
    pub fn finish(mut self, root: PathBuf, walk_errors: u64) -> ScanResult {
        debug!(
            "resolving {} composite records against {} containers",
            self.pending.len(),
            self.accumulator.len()
        );

        for pending in self.pending.drain(..) {
            let record = &mut self.groups[pending.group].records[pending.record];
            match self.accumulator.total(&pending.container) {
                Some(total) => {
                    record.size = total;
                    record.location = RecordLocation::Resolved {
                        container: pending.container,
                    };
                }
                None => {
                    debug!(
                        "no container found for {} (expected {})",
                        record.file_path().display(),
                        pending.container.display()
                    );
                    record.location = RecordLocation::Unresolved {
                        expected: pending.container,
                    };
                }
            }
        }

        for group in &mut self.groups {
            for record in &group.records {
                group.widths.observe(record);
            }
        }

        ScanResult {
            root,
            groups: self.groups,
            counters: self.counters,
            walk_errors,
        }
    }
}
