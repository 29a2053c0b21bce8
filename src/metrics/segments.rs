//! Segment-based text metrics.
//!
//! A file is read as one string, newlines are flattened to spaces, and the
//! text is split on `.` into segments. Each segment contributes one line,
//! its full character length, its ASCII-letter count, and its word-split
//! piece count to the file's [`Counters`].
//!
//! "Line" here means a period-delimited segment, not a newline-delimited
//! line. The piece after a trailing period is a segment too, so `"a."`
//! counts two lines, the second one empty.
//!
//! The default word tokenizer splits on `/W+` (a literal slash followed by
//! capital W's), which ordinary text never contains — so each segment
//! contributes exactly one word. Counting actual words requires opting in
//! to [`WordSplit::NonWordRuns`].

use crate::config::WordSplit;
use crate::core::Counters;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

static SLASH_W_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new("/W+").expect("valid pattern"));
static NON_WORD_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").expect("valid pattern"));

#[derive(Debug, Error)]
pub enum CountError {
    /// Covers both unreadable files and non-UTF-8 content that the
    /// extension allow-list let through.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration for segment counting.
#[derive(Copy, Clone, Debug, Default)]
pub struct SegmentConfig {
    pub word_split: WordSplit,
}

/// Counts segment metrics for file content.
#[derive(Copy, Clone, Debug, Default)]
pub struct SegmentCounter {
    config: SegmentConfig,
}

impl SegmentCounter {
    pub fn new(config: SegmentConfig) -> Self {
        Self { config }
    }

    /// Read a file as UTF-8 text and count it.
    pub fn count_file(&self, path: &Path) -> Result<Counters, CountError> {
        let content = std::fs::read_to_string(path).map_err(|source| CountError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.count_content(&content))
    }

    /// Count content (pure function).
    pub fn count_content(&self, content: &str) -> Counters {
        let flattened = content.replace('\n', " ");

        let mut counters = Counters::default();
        for segment in flattened.split('.') {
            counters.line_count += 1;
            counters.character_count += segment.chars().count() as u64;
            counters.character_without_spaces_count += count_letters(segment) as u64;
            counters.word_count += self.word_pieces(segment) as u64;
        }
        counters
    }

    fn word_pieces(&self, segment: &str) -> usize {
        let pattern = match self.config.word_split {
            WordSplit::SlashWRuns => &SLASH_W_RUNS,
            WordSplit::NonWordRuns => &NON_WORD_RUNS,
        };
        pattern.split(segment).count()
    }
}

/// ASCII letters only; digits, punctuation, and accented letters are not
/// counted, whatever the output field name suggests.
fn count_letters(segment: &str) -> usize {
    segment.chars().filter(|c| c.is_ascii_alphabetic()).count()
}
