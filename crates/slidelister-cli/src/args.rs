/// Command-line arguments, parsed with clap derive macros.
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Extensions tracked when `--extensions` is not given.
pub const DEFAULT_EXTENSIONS: [&str; 5] = ["mrxs", "ndpi", "svs", "vmic", "vsf"];

/// Inventory digital microscope slide files into a spreadsheet
#[derive(Parser, Debug, Clone)]
#[command(
    name = "slidelister",
    version,
    about = "Check a folder for digital slide files and export them to an XLSX (or CSV) report",
    long_about = "Recursively walks a folder, collects every file with a tracked extension \
                  (path, name, date, size) and writes one worksheet per extension.\n\n\
                  Composite formats such as MIRAX (.mrxs) report the total size of their \
                  data folder instead of the size of the small marker file.",
    after_help = "EXAMPLES:\n    \
        slidelister -p /media/slides -o slides.xlsx\n    \
        slidelister -p /media/slides -x ndpi svs --combined --links\n    \
        slidelister -p /media/slides -o slides.csv\n    \
        slidelister -p /media/slides --rules rules.json -v"
)]
pub struct Args {
    /// Folder that contains the slide files
    #[arg(short, long, default_value = ".", value_name = "DIR")]
    pub path: PathBuf,

    /// File extensions to track (with or without leading dot)
    #[arg(
        short = 'x',
        long,
        num_args = 1..,
        default_values = DEFAULT_EXTENSIONS,
        value_name = "EXT"
    )]
    pub extensions: Vec<String>,

    /// Put all extensions on one combined worksheet instead of one sheet each
    #[arg(long)]
    pub combined: bool,

    /// Render path and file name cells as hyperlinks
    #[arg(short, long)]
    pub links: bool,

    /// Hyperlink root, used verbatim with `/` separators (default: chosen per platform)
    #[arg(long, value_name = "URL", requires = "links")]
    pub link_root: Option<String>,

    /// Maximum number of hyperlink cells in the workbook
    #[arg(long, default_value_t = slidelister_core::report::EXCEL_MAX_LINKS, value_name = "NUM")]
    pub max_links: u32,

    /// Output file
    #[arg(short, long, default_value = "digital slides.xlsx", value_name = "FILE")]
    pub output: PathBuf,

    /// Output format (default: inferred from the output file extension)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// JSON file with container rules for composite slide formats
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// More output while the scan is running
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Xlsx,
    Csv,
}
