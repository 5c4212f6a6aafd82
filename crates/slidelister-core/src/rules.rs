/// Container rules for composite slide formats.
///
/// A composite slide is a small marker file (`case.mrxs`) next to a sibling
/// folder named after it (`case/`) that holds the actual image data. The
/// knowledge of which files inside that folder are data components, and how
/// deep they sit below the container folder, is external format knowledge,
/// so it is kept as data: one rule per extension, loadable from JSON.
///
/// ```json
/// { "rules": [
///     { "extension": "mrxs", "component_pattern": "^(Data\\d+|Index)\\.dat$", "parent_offset": 0 }
/// ] }
/// ```
use crate::error::RuleError;
use compact_str::CompactString;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Serialised form of one container rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerRuleDef {
    /// Marker file extension, without the leading dot.
    pub extension: String,
    /// Regex matched against the file name of each component.
    pub component_pattern: String,
    /// How many directories above the component's own directory the
    /// container folder sits. `0` means components live directly in it.
    #[serde(default)]
    pub parent_offset: usize,
}

/// Serialised rule set, the top-level shape of a rules file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub rules: Vec<ContainerRuleDef>,
}

impl RuleSet {
    /// Rules shipped with the tool.
    ///
    /// - MIRAX (`.mrxs`): `case/Data0000.dat`, `case/Index.dat`, … directly
    ///   inside the container folder.
    /// - VSF (`.vsf`): per-scan subfolders holding `level0.jpg`, `level1.jpg`, …,
    ///   one level below the container folder.
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                ContainerRuleDef {
                    extension: "mrxs".into(),
                    component_pattern: r"^(Data\d+|Index)\.dat$".into(),
                    parent_offset: 0,
                },
                ContainerRuleDef {
                    extension: "vsf".into(),
                    component_pattern: r"(?i)^level\d+\.(jpe?g|png|tiff?)$".into(),
                    parent_offset: 1,
                },
            ],
        }
    }
}

/// A compiled container rule.
#[derive(Debug, Clone)]
pub struct ContainerRule {
    extension: CompactString,
    pattern: Regex,
    parent_offset: usize,
}

impl ContainerRule {
    pub fn parent_offset(&self) -> usize {
        self.parent_offset
    }

    /// Whether `file_name` is a data component of this format.
    pub fn is_component(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
    }

    /// Container folder a component at `component_path` belongs to, or
    /// `None` when the path is too shallow for the rule's offset.
    pub fn container_of(&self, component_path: &Path) -> Option<PathBuf> {
        let mut dir = component_path.parent()?;
        for _ in 0..self.parent_offset {
            dir = dir.parent()?;
        }
        Some(dir.to_path_buf())
    }

    /// Container folder a marker file points to: its directory joined with
    /// the file name minus the `.ext` suffix.
    pub fn container_for_marker(&self, dir: &Path, marker_name: &str) -> PathBuf {
        let cut = marker_name.len().saturating_sub(self.extension.len() + 1);
        let stem = marker_name.get(..cut).unwrap_or(marker_name);
        dir.join(stem)
    }
}

/// The set of compiled container rules in effect for a run.
#[derive(Debug, Clone, Default)]
pub struct ContainerRules {
    rules: Vec<ContainerRule>,
}

impl ContainerRules {
    pub fn builtin() -> Self {
        Self::compile(&RuleSet::builtin()).expect("built-in container patterns are valid")
    }

    /// Compile a rule set. Extensions are normalised to lowercase without a
    /// leading dot; a later rule for the same extension replaces an earlier one.
    pub fn compile(set: &RuleSet) -> Result<Self, RuleError> {
        let mut rules: Vec<ContainerRule> = Vec::with_capacity(set.rules.len());
        for (index, def) in set.rules.iter().enumerate() {
            let extension = normalise_extension(&def.extension);
            if extension.is_empty() {
                return Err(RuleError::EmptyExtension { index });
            }
            let pattern =
                Regex::new(&def.component_pattern).map_err(|source| RuleError::InvalidPattern {
                    extension: extension.to_string(),
                    source,
                })?;
            rules.retain(|r| r.extension != extension);
            rules.push(ContainerRule {
                extension,
                pattern,
                parent_offset: def.parent_offset,
            });
        }
        Ok(Self { rules })
    }

    pub fn from_json(text: &str) -> Result<Self, RuleError> {
        let set: RuleSet = serde_json::from_str(text)?;
        Self::compile(&set)
    }

    pub fn load(path: &Path) -> Result<Self, RuleError> {
        let text = std::fs::read_to_string(path).map_err(|source| RuleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Keep only rules whose extension is tracked. Rules for untracked
    /// extensions would accumulate sizes nothing ever consumes.
    pub fn restricted_to(&self, extensions: &[CompactString]) -> Self {
        Self {
            rules: self
                .rules
                .iter()
                .filter(|r| extensions.iter().any(|e| *e == r.extension))
                .cloned()
                .collect(),
        }
    }

    pub fn for_extension(&self, extension: &str) -> Option<&ContainerRule> {
        self.rules.iter().find(|r| r.extension == extension)
    }

    /// Rules whose component pattern matches `file_name`.
    pub fn component_rules<'a>(
        &'a self,
        file_name: &'a str,
    ) -> impl Iterator<Item = &'a ContainerRule> + 'a {
        self.rules.iter().filter(move |r| r.is_component(file_name))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Lowercase an extension and strip any leading dots (`".MRXS"` → `"mrxs"`).
pub fn normalise_extension(raw: &str) -> CompactString {
    CompactString::new(raw.trim().trim_start_matches('.').to_ascii_lowercase())
}
