// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod mask;
pub mod metrics;

// Re-export commonly used types
pub use crate::core::{CountReport, Counters, FileCount};

pub use crate::core::counters::{combine, sum_counters, total_of};

pub use crate::config::{ErrorPolicy, ExtensionMode, WordSplit, EXCLUDED_DIR_FRAGMENTS};

pub use crate::io::output::{create_writer, OutputFormat, ReportWriter};
pub use crate::io::walker::{normalize_separators, tail_segments, FileWalker};

pub use crate::metrics::segments::{CountError, SegmentConfig, SegmentCounter};

pub use crate::mask::{mask_file, mask_white_to_alpha};

pub use crate::commands::count::run_count;
