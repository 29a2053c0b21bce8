pub mod segments;

pub use segments::{CountError, SegmentConfig, SegmentCounter};
