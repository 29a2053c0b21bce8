pub mod counters;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Running tally of text metrics for one aggregation scope.
///
/// `line_count` counts period-delimited segments, not newline-delimited
/// lines, and `character_without_spaces_count` tallies ASCII letters only;
/// both names are kept for output compatibility.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub line_count: u64,
    pub character_count: u64,
    pub character_without_spaces_count: u64,
    pub word_count: u64,
}

impl Add for Counters {
    type Output = Counters;

    fn add(self, rhs: Counters) -> Counters {
        Counters {
            line_count: self.line_count + rhs.line_count,
            character_count: self.character_count + rhs.character_count,
            character_without_spaces_count: self.character_without_spaces_count
                + rhs.character_without_spaces_count,
            word_count: self.word_count + rhs.word_count,
        }
    }
}

impl AddAssign for Counters {
    fn add_assign(&mut self, rhs: Counters) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Counters {
    /// Flattened key/value pairs, the per-file progress line format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line_count {} character_count {} character_without_spaces_count {} word_count {}",
            self.line_count,
            self.character_count,
            self.character_without_spaces_count,
            self.word_count
        )
    }
}

/// Metrics for one discovered file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileCount {
    pub path: PathBuf,
    pub counters: Counters,
}

/// Full result of one aggregation run, in discovery order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CountReport {
    pub root: PathBuf,
    pub timestamp: DateTime<Utc>,
    pub files: Vec<FileCount>,
    pub total: Counters,
}
