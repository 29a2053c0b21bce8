//! Discovery and counting configuration.
//!
//! The extension allow-lists, the fixed directory exclusion fragments, and
//! the policy knobs exposed on the `count` command.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Directory-name fragments that disqualify a file wherever they appear in
/// its parent directory path. Matched as plain substrings, so `anaconda3`
/// is excluded by `conda` and `__pycache__` by `pycache`.
pub const EXCLUDED_DIR_FRAGMENTS: &[&str] = &["pycache", "node_modules", "conda"];

static NARROW_EXTENSIONS: &[&str] = &["css", "tsx", "ts", "md"];

static BROAD_EXTENSIONS: &[&str] = &[
    "js", "jsx", "css", "tsx", "ts", "docx", "tex", "readme", "txt", "ipynb", "text", "bib", "py",
    "json", "csv", "dat", "db", "dbf", "log", "sql", "tar", "xml", "html", "c", "class", "java",
    "php", "sh", "swift", "h", "cpp", "xlsx", "xls", "xlsm", "dmp", "wpd", "rtf",
];

/// Which extension allow-list discovery uses.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionMode {
    /// Documentation and front-end sources only
    #[default]
    Narrow,
    /// Every known text-like extension
    Broad,
}

impl ExtensionMode {
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ExtensionMode::Narrow => NARROW_EXTENSIONS,
            ExtensionMode::Broad => BROAD_EXTENSIONS,
        }
    }

    /// Extension match is case-sensitive: `NOTES.MD` is not discovered.
    pub fn allows(&self, extension: &str) -> bool {
        self.extensions().contains(&extension)
    }
}

/// What to do when a directory entry or file cannot be read.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Terminate the run on the first unreadable path
    #[default]
    Abort,
    /// Log a warning and keep going; the path contributes nothing
    Skip,
}

/// Word tokenizer selection.
///
/// `SlashWRuns` splits on `/W+` — a literal slash followed by one or more
/// capital W's. Ordinary prose never contains that sequence, so each
/// segment counts as a single word. `NonWordRuns` splits on runs of
/// non-word characters and yields conventional word counts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum WordSplit {
    #[default]
    SlashWRuns,
    NonWordRuns,
}
