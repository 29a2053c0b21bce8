use crate::core::{Counters, FileCount};

pub fn combine(left: Counters, right: Counters) -> Counters {
    left + right
}

pub fn sum_counters<I>(counters: I) -> Counters
where
    I: IntoIterator<Item = Counters>,
{
    counters.into_iter().fold(Counters::default(), combine)
}

pub fn total_of(files: &[FileCount]) -> Counters {
    sum_counters(files.iter().map(|f| f.counters))
}
