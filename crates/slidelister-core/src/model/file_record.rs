/// A single discovered slide file.
///
/// Records are created by the classifier during the walk and are immutable
/// once the scan finishes. The only post-hoc change is for composite slide
/// formats, whose size and location are patched after the walk once the
/// container folder has been matched (or not) against the accumulated
/// component sizes.
use chrono::{DateTime, Local};
use compact_str::CompactString;
use std::borrow::Cow;
use std::path::{Component, Path, PathBuf, Prefix};
use std::time::SystemTime;

/// Timestamp layout used in the `file date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Where the logical slide lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordLocation {
    /// Single-file format: the slide is the file itself.
    Plain,
    /// Composite format whose container folder was found; the record's size
    /// is the sum of the container's component files.
    Resolved { container: PathBuf },
    /// Composite format whose expected container folder held no components.
    /// The record keeps the marker file's own size.
    Unresolved { expected: PathBuf },
}

#[derive(Debug, Clone)]
pub struct FileRecord {
    /// 1-based position among the records of the same extension.
    pub sequence: u32,
    /// Tracked extension, lowercase, without the leading dot.
    pub extension: CompactString,
    /// Directory containing the marker / slide file.
    pub dir: PathBuf,
    /// File name only.
    pub name: CompactString,
    pub modified: Option<SystemTime>,
    /// Byte size. For resolved composite records this is the container total.
    pub size: u64,
    pub location: RecordLocation,
}

impl FileRecord {
    /// Folder shown in the `file path` column: the container for resolved
    /// composite slides, otherwise the directory holding the file.
    pub fn folder(&self) -> &Path {
        match &self.location {
            RecordLocation::Resolved { container } => container,
            RecordLocation::Plain | RecordLocation::Unresolved { .. } => &self.dir,
        }
    }

    /// Full path of the file on disk.
    pub fn file_path(&self) -> PathBuf {
        self.dir.join(self.name.as_str())
    }

    pub fn display_folder(&self) -> String {
        display_path(self.folder())
    }

    pub fn display_file(&self) -> String {
        display_path(&self.file_path())
    }

    /// Modification time in local time, or an empty string when the
    /// platform could not provide one.
    pub fn date_text(&self) -> String {
        self.modified
            .map(|t| DateTime::<Local>::from(t).format(DATE_FORMAT).to_string())
            .unwrap_or_default()
    }
}

/// Render a path for display: components joined with `/`, without the
/// leading root separator.
///
/// Text is always UTF-8. Bytes that do not decode are replaced with U+FFFD;
/// this is the only place path bytes are turned into display text.
///
/// Windows prefixes keep their meaning: `C:\x` becomes `C:/x` and the UNC
/// share `\\server\share\x` becomes `server/share/x`.
pub fn display_path(path: &Path) -> String {
    let mut parts: Vec<Cow<'_, str>> = Vec::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => match prefix.kind() {
                Prefix::UNC(server, share) | Prefix::VerbatimUNC(server, share) => {
                    parts.push(server.to_string_lossy());
                    parts.push(share.to_string_lossy());
                }
                Prefix::Disk(letter) | Prefix::VerbatimDisk(letter) => {
                    parts.push(Cow::Owned(format!("{}:", letter as char)));
                }
                _ => parts.push(prefix.as_os_str().to_string_lossy()),
            },
            Component::RootDir | Component::CurDir => {}
            Component::ParentDir => parts.push(Cow::Borrowed("..")),
            Component::Normal(segment) => parts.push(segment.to_string_lossy()),
        }
    }
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn record(location: RecordLocation) -> FileRecord {
        FileRecord {
            sequence: 1,
            extension: CompactString::new("mrxs"),
            dir: PathBuf::from("/data/slides"),
            name: CompactString::new("case 12.mrxs"),
            modified: None,
            size: 42,
            location,
        }
    }

    #[test]
    fn display_path_drops_root_separator() {
        assert_eq!(
            display_path(Path::new("/media/dfsP/DIGITALE MIKROSKOPIE")),
            "media/dfsP/DIGITALE MIKROSKOPIE"
        );
    }

    #[test]
    fn display_path_of_relative_path_is_unchanged() {
        assert_eq!(display_path(Path::new("slides/batch1")), "slides/batch1");
        assert_eq!(display_path(Path::new("./slides")), "slides");
    }

    #[cfg(unix)]
    #[test]
    fn display_path_replaces_undecodable_bytes() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"/data/sl\xffide");
        assert_eq!(display_path(Path::new(raw)), "data/sl\u{FFFD}ide");
    }

    #[test]
    fn plain_record_shows_its_directory() {
        let r = record(RecordLocation::Plain);
        assert_eq!(r.display_folder(), "data/slides");
        assert_eq!(r.display_file(), "data/slides/case 12.mrxs");
    }

    #[test]
    fn resolved_record_shows_its_container() {
        let r = record(RecordLocation::Resolved {
            container: PathBuf::from("/data/slides/case 12"),
        });
        assert_eq!(r.display_folder(), "data/slides/case 12");
        // The file link still points at the marker file.
        assert_eq!(r.display_file(), "data/slides/case 12.mrxs");
    }

    /// An unresolved composite falls back to the raw directory, never the
    /// container it expected to find.
    #[test]
    fn unresolved_record_shows_its_directory() {
        let r = record(RecordLocation::Unresolved {
            expected: PathBuf::from("/data/slides/case 12"),
        });
        assert_eq!(r.display_folder(), "data/slides");
    }

    #[test]
    fn date_text_has_fixed_width() {
        let mut r = record(RecordLocation::Plain);
        assert_eq!(r.date_text(), "");

        r.modified = Some(SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000));
        let text = r.date_text();
        assert_eq!(text.len(), 19, "unexpected date text {text:?}");
        assert!(text.starts_with("2020-09-1"));
    }
}
