/// Platform-specific functionality: hyperlink targets for report cells.
///
/// Report paths are displayed without their root separator (see
/// [`crate::model::display_path`]), so the link root supplies the scheme and
/// whatever the display form dropped. The spreadsheet writer strips
/// `file:///` and keeps a target absolute only when what remains starts with
/// `/`, a drive letter or `\\`:
///
/// - POSIX paths (`/media/…`) link as `file:////media/…`, stored as `/media/…`.
/// - Windows drives (`C:\…`) display as `C:/…` and link as `file:///C:/…`.
/// - Windows UNC shares (`\\server\share\…`) display as `server/share/…` and
///   link as `file:///\\server\share\…`.
use crate::report::LinkTarget;
use std::path::{Component, Path, Prefix};

/// Link root for shares addressed by host name. Joined with `\`.
pub const UNC_LINK_ROOT: &str = r"file:///\\";

/// Link root for local absolute paths.
#[cfg(windows)]
pub const LOCAL_LINK_ROOT: &str = "file:///";

/// Link root for local absolute paths. The extra `/` restores the root
/// separator the display form dropped.
#[cfg(not(windows))]
pub const LOCAL_LINK_ROOT: &str = "file:////";

/// Choose the hyperlink target for a scan rooted at `root`.
pub fn default_link_target(root: &Path) -> LinkTarget {
    if is_unc(root) {
        LinkTarget::with_backslashes(UNC_LINK_ROOT)
    } else {
        LinkTarget::new(LOCAL_LINK_ROOT)
    }
}

/// `true` for `\\server\share` paths. Prefixes are only parsed on Windows,
/// so this is always `false` elsewhere.
pub fn is_unc(path: &Path) -> bool {
    matches!(
        path.components().next(),
        Some(Component::Prefix(p)) if matches!(p.kind(), Prefix::UNC(..) | Prefix::VerbatimUNC(..))
    )
}
