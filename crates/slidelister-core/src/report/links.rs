/// Hyperlink targets and the shared hyperlink budget.
///
/// Excel refuses workbooks with more than 65 530 hyperlinks per worksheet,
/// so link cells draw from a budget shared across the whole workbook. Once
/// it runs out, cells silently fall back to plain text.
use std::borrow::Cow;

/// Excel's hyperlink ceiling.
pub const EXCEL_MAX_LINKS: u32 = 65_530;

/// Longest URL Excel accepts in a hyperlink cell.
pub const MAX_URL_LEN: usize = 2_079;

/// Monotonically decreasing count of hyperlink cells still allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkBudget {
    remaining: u32,
    emitted: u32,
}

impl LinkBudget {
    pub fn new(limit: u32) -> Self {
        Self {
            remaining: limit,
            emitted: 0,
        }
    }

    /// Take one link from the budget. Returns `false` (and changes nothing)
    /// once the budget is exhausted.
    pub fn try_take(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.emitted += 1;
        true
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn emitted(&self) -> u32 {
        self.emitted
    }
}

impl Default for LinkBudget {
    fn default() -> Self {
        Self::new(EXCEL_MAX_LINKS)
    }
}

/// Builds hyperlink URLs from display paths.
///
/// Display paths are `/`-separated without a leading separator. The root
/// restores whatever the spreadsheet needs to read the target as absolute,
/// and the separator is swapped for targets that must use `\`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTarget {
    root: String,
    separator: char,
}

impl LinkTarget {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            separator: '/',
        }
    }

    /// Target joined with `\`, as Windows share paths require.
    pub fn with_backslashes(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            separator: '\\',
        }
    }

    pub fn url_for(&self, display_path: &str) -> String {
        let path: Cow<'_, str> = if self.separator == '/' {
            Cow::Borrowed(display_path)
        } else {
            Cow::Owned(display_path.replace('/', &self.separator.to_string()))
        };
        if self.root.ends_with(['/', '\\']) || path.is_empty() {
            format!("{}{}", self.root, path)
        } else {
            format!("{}{}{}", self.root, self.separator, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_counts_down_and_stops_at_zero() {
        let mut budget = LinkBudget::new(2);
        assert!(budget.try_take());
        assert!(budget.try_take());
        assert!(!budget.try_take());
        assert!(!budget.try_take());
        assert_eq!(budget.remaining(), 0);
        assert_eq!(budget.emitted(), 2);
    }

    #[test]
    fn zero_budget_never_links() {
        let mut budget = LinkBudget::new(0);
        assert!(!budget.try_take());
        assert_eq!(budget.emitted(), 0);
    }

    #[test]
    fn default_budget_is_excel_ceiling() {
        assert_eq!(LinkBudget::default().remaining(), EXCEL_MAX_LINKS);
    }

    #[test]
    fn url_joins_root_and_path() {
        assert_eq!(
            LinkTarget::new("file:////").url_for("media/dfsP/a b"),
            "file:////media/dfsP/a b"
        );
        assert_eq!(
            LinkTarget::new("file://fileserver/P").url_for("slides/x.ndpi"),
            "file://fileserver/P/slides/x.ndpi"
        );
    }

    #[test]
    fn backslash_target_rewrites_separators() {
        let target = LinkTarget::with_backslashes(r"file:///\\");
        assert_eq!(
            target.url_for("server/share/slides/x.ndpi"),
            r"file:///\\server\share\slides\x.ndpi"
        );
    }
}
