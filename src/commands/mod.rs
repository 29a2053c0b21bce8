//! CLI command implementations.
//!
//! Available commands:
//! - **count**: walk a directory tree and aggregate text metrics per file
//! - **mask**: rewrite an image so white pixels become transparent

pub mod count;
pub mod mask;

pub use count::{handle_count, run_count, CountConfig};
pub use mask::{handle_mask, MaskConfig};
