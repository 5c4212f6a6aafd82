/// Directory walker using `jwalk`.
///
/// Produces a lazy sequence of every file and directory under the root,
/// unfiltered by extension. The walk runs serially with siblings sorted by
/// name, so two runs over the same tree yield the same order (and the same
/// sequence numbers). Unreadable entries are logged at debug level, counted,
/// and skipped; an unreadable root therefore yields an empty sequence.
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// One filesystem entry as seen by the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub is_dir: bool,
    /// Byte size; always 0 for directories.
    pub size: u64,
    pub modified: Option<SystemTime>,
}

impl WalkEntry {
    pub fn file(path: impl Into<PathBuf>, size: u64, modified: Option<SystemTime>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
            size,
            modified,
        }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
            size: 0,
            modified: None,
        }
    }
}

/// Iterator over the entries below a root folder.
pub struct Walk {
    inner: jwalk::DirEntryIter<((), ())>,
    errors: u64,
}

impl Walk {
    pub fn new(root: &Path) -> Self {
        let inner = jwalk::WalkDir::new(root)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true)
            .parallelism(jwalk::Parallelism::Serial)
            .into_iter();
        Self { inner, errors: 0 }
    }

    /// Entries skipped so far because they could not be read.
    pub fn error_count(&self) -> u64 {
        self.errors
    }
}

impl Iterator for Walk {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<WalkEntry> {
        loop {
            let entry = match self.inner.next()? {
                Ok(e) => e,
                Err(err) => {
                    self.errors += 1;
                    debug!("skipping unreadable entry: {err}");
                    continue;
                }
            };

            let path = entry.path();
            if entry.file_type().is_dir() {
                return Some(WalkEntry::dir(path));
            }

            // Stat here rather than in jwalk so broken entries are skipped
            // one at a time instead of failing the whole directory read.
            match std::fs::symlink_metadata(&path) {
                Ok(meta) => {
                    return Some(WalkEntry::file(path, meta.len(), meta.modified().ok()));
                }
                Err(err) => {
                    self.errors += 1;
                    debug!("skipping {}: {err}", path.display());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn walk_yields_files_and_directories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("sub")).unwrap();
        fs::write(tmp.path().join("sub").join("a.ndpi"), b"12345").unwrap();
        fs::write(tmp.path().join("b.txt"), b"1").unwrap();

        let entries: Vec<WalkEntry> = Walk::new(tmp.path()).collect();

        let file = entries
            .iter()
            .find(|e| e.path.ends_with("sub/a.ndpi"))
            .expect("nested file missing");
        assert!(!file.is_dir);
        assert_eq!(file.size, 5);
        assert!(file.modified.is_some());

        assert!(entries.iter().any(|e| e.is_dir && e.path.ends_with("sub")));
        assert!(entries.iter().any(|e| e.path.ends_with("b.txt")));
    }

    #[test]
    fn walk_order_is_stable() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.svs", "a.svs", "b.svs"] {
            fs::write(tmp.path().join(name), b"x").unwrap();
        }
        let names = |w: Walk| -> Vec<PathBuf> {
            w.filter(|e| !e.is_dir).map(|e| e.path).collect()
        };
        let first = names(Walk::new(tmp.path()));
        let second = names(Walk::new(tmp.path()));
        assert_eq!(first, second);
        assert!(first[0].ends_with("a.svs"));
    }

    /// A missing root is not a hard error: the walk is simply empty of files.
    #[test]
    fn missing_root_yields_no_files() {
        let tmp = TempDir::new().unwrap();
        let mut walk = Walk::new(&tmp.path().join("does-not-exist"));
        assert!(walk.by_ref().all(|e| e.is_dir));
    }
}
