use crate::mask;
use anyhow::Result;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct MaskConfig {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
}

pub fn handle_mask(config: MaskConfig) -> Result<()> {
    let output = config
        .output
        .unwrap_or_else(|| default_output_path(&config.input));

    mask::mask_file(&config.input, &output)?;
    println!("Wrote {}", output.display());
    Ok(())
}

/// `photo.png` becomes `photo_bw.png` next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}_bw.{ext}"),
        None => format!("{stem}_bw"),
    };
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_keeps_extension() {
        assert_eq!(
            default_output_path(Path::new("public/logo.png")),
            PathBuf::from("public/logo_bw.png")
        );
    }

    #[test]
    fn test_default_output_without_extension() {
        assert_eq!(
            default_output_path(Path::new("snapshot")),
            PathBuf::from("snapshot_bw")
        );
    }
}
