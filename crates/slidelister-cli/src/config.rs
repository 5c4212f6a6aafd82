/// Runtime configuration, validated from parsed [`Args`].
///
/// Normalises the extension list, resolves the output format and hyperlink
/// root, and loads container rules, so the pipeline only ever sees a
/// consistent configuration.
use crate::args::{Args, FormatArg};
use anyhow::{bail, Context, Result};
use slidelister_core::platform::default_link_target;
use slidelister_core::report::{LinkTarget, ReportFormat, ReportOptions, SheetLayout};
use slidelister_core::rules::{normalise_extension, ContainerRules};
use slidelister_core::scanner::ScanRequest;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub scan: ScanRequest,
    pub report: ReportOptions,
}

impl RunConfig {
    pub fn from_args(args: Args) -> Result<Self> {
        let mut extensions = Vec::with_capacity(args.extensions.len());
        for raw in &args.extensions {
            let ext = normalise_extension(raw);
            if ext.is_empty() {
                bail!("invalid extension '{raw}'");
            }
            if !extensions.contains(&ext) {
                extensions.push(ext);
            }
        }
        if extensions.is_empty() {
            bail!("no extensions given");
        }

        let rules = match &args.rules {
            Some(path) => ContainerRules::load(path).with_context(|| {
                format!("Failed to load container rules from {}", path.display())
            })?,
            None => ContainerRules::builtin(),
        };

        let root = resolve_root(args.path);

        let links = args.links.then(|| match &args.link_root {
            Some(custom) => LinkTarget::new(custom.clone()),
            None => default_link_target(&root),
        });

        let format = match args.format {
            Some(FormatArg::Xlsx) => ReportFormat::Xlsx,
            Some(FormatArg::Csv) => ReportFormat::Csv,
            None => ReportFormat::from_path(&args.output),
        };

        let layout = if args.combined {
            SheetLayout::Combined
        } else {
            SheetLayout::Split
        };

        debug!(
            "config: root={} extensions={:?} rules={} format={:?} layout={:?}",
            root.display(),
            extensions,
            rules.len(),
            format,
            layout
        );

        Ok(Self {
            scan: ScanRequest {
                root,
                extensions,
                rules,
            },
            report: ReportOptions {
                output: args.output,
                format,
                layout,
                links,
                max_links: args.max_links,
            },
        })
    }
}

/// Absolute form of the scan root, so displayed paths and hyperlinks are
/// anchored. A root that cannot be resolved is kept as given; the walk will
/// then find nothing and report it.
fn resolve_root(path: PathBuf) -> PathBuf {
    std::fs::canonicalize(&path).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    fn config(argv: &[&str]) -> Result<RunConfig> {
        let mut full = vec!["slidelister"];
        full.extend_from_slice(argv);
        RunConfig::from_args(Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn extensions_are_normalised_and_deduplicated() {
        let cfg = config(&["-x", ".NDPI", "ndpi", "svs"]).unwrap();
        let exts: Vec<&str> = cfg.scan.extensions.iter().map(|e| e.as_str()).collect();
        assert_eq!(exts, vec!["ndpi", "svs"]);
    }

    #[test]
    fn blank_extension_is_rejected() {
        assert!(config(&["-x", "."]).is_err());
    }

    #[test]
    fn format_is_inferred_from_output() {
        assert_eq!(config(&["-o", "out.csv"]).unwrap().report.format, ReportFormat::Csv);
        assert_eq!(config(&["-o", "out.xlsx"]).unwrap().report.format, ReportFormat::Xlsx);
        assert_eq!(
            config(&["-o", "out.csv", "-f", "xlsx"]).unwrap().report.format,
            ReportFormat::Xlsx
        );
    }

    #[test]
    fn links_are_off_unless_requested() {
        assert!(config(&[]).unwrap().report.links.is_none());

        let cfg = config(&["-l", "--link-root", "file://srv/P"]).unwrap();
        assert_eq!(cfg.report.links, Some(LinkTarget::new("file://srv/P")));
    }

    #[test]
    fn links_default_to_platform_target() {
        let cfg = config(&["-l", "-p", "/definitely/not/here"]).unwrap();
        assert_eq!(
            cfg.report.links,
            Some(default_link_target(Path::new("/definitely/not/here")))
        );
    }

    #[test]
    fn combined_flag_selects_layout() {
        assert_eq!(config(&[]).unwrap().report.layout, SheetLayout::Split);
        assert_eq!(config(&["--combined"]).unwrap().report.layout, SheetLayout::Combined);
    }

    #[test]
    fn missing_rules_file_is_an_error() {
        let err = config(&["--rules", "/definitely/not/here.json"]).unwrap_err();
        assert!(format!("{err:#}").contains("container rules"));
    }

    #[test]
    fn unresolvable_root_is_kept_as_given() {
        let cfg = config(&["-p", "/definitely/not/here"]).unwrap();
        assert_eq!(cfg.scan.root, PathBuf::from("/definitely/not/here"));
    }
}
