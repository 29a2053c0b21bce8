use crate::config::{ErrorPolicy, ExtensionMode, WordSplit};
use crate::core::{CountReport, Counters, FileCount};
use crate::io::output::{create_writer, OutputFormat};
use crate::io::walker::{tail_segments, FileWalker};
use crate::metrics::segments::{SegmentConfig, SegmentCounter};
use anyhow::Result;
use chrono::Utc;
use log::warn;
use std::path::PathBuf;

/// Everything the `count` command needs, built from CLI flags.
#[derive(Clone, Debug)]
pub struct CountConfig {
    pub root: PathBuf,
    pub mode: ExtensionMode,
    pub exclude: Vec<String>,
    pub error_policy: ErrorPolicy,
    pub word_split: WordSplit,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

pub fn handle_count(config: CountConfig) -> Result<()> {
    let report = run_count(&config)?;

    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_report(&report)
}

/// Discover files and fold their metrics into a running total, one file at
/// a time in discovery order. Unless `quiet` is set, each file emits a
/// progress line showing the tail of its path and the running total so
/// far, followed by a blank line.
pub fn run_count(config: &CountConfig) -> Result<CountReport> {
    let files = FileWalker::new(config.root.clone())
        .with_mode(config.mode)
        .with_exclude_patterns(config.exclude.clone())
        .with_error_policy(config.error_policy)
        .walk()?;

    let counter = SegmentCounter::new(SegmentConfig {
        word_split: config.word_split,
    });

    let mut total = Counters::default();
    let mut counted = Vec::with_capacity(files.len());
    for path in files {
        let counters = match counter.count_file(&path) {
            Ok(counters) => counters,
            Err(err) => match config.error_policy {
                ErrorPolicy::Abort => return Err(err.into()),
                ErrorPolicy::Skip => {
                    warn!("{err}");
                    continue;
                }
            },
        };

        total += counters;
        if !config.quiet {
            println!("{} {}", tail_segments(&path, 3), total);
            println!();
        }
        counted.push(FileCount { path, counters });
    }

    Ok(CountReport {
        root: config.root.clone(),
        timestamp: Utc::now(),
        files: counted,
        total,
    })
}
