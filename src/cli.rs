use crate::config::ExtensionMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "textmap")]
#[command(about = "Text metrics aggregator and image masking utilities", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count line, character, and word metrics across a directory tree
    Count {
        /// Root directory to scan
        path: PathBuf,

        /// Extension allow-list used for discovery
        #[arg(long, value_enum, default_value = "narrow")]
        mode: ExtensionMode,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Glob patterns to exclude from discovery
        #[arg(long = "exclude", value_delimiter = ',')]
        exclude: Vec<String>,

        /// Skip unreadable paths with a warning instead of aborting
        #[arg(long = "skip-errors")]
        skip_errors: bool,

        /// Split words on runs of non-word characters instead of the
        /// default `/W+` pattern
        #[arg(long = "real-words")]
        real_words: bool,

        /// Suppress the per-file progress lines
        #[arg(short, long, env = "TEXTMAP_QUIET")]
        quiet: bool,
    },

    /// Rewrite an image so white pixels become transparent and the rest opaque black
    Mask {
        /// Input image
        input: PathBuf,

        /// Output image (defaults to the input name with a `_bw` suffix)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
