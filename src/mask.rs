//! White-to-transparent image masking.
//!
//! Rewrites an RGBA buffer so that pure-white pixels become fully
//! transparent and every other pixel becomes opaque black. The white match
//! is exact (R, G, and B all 255) and ignores the source alpha.

use anyhow::{Context, Result};
use image::{Rgba, RgbaImage};
use std::path::Path;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const OPAQUE_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Apply the mask in place. Dimensions are unchanged; every pixel ends up
/// as one of exactly two values.
pub fn mask_white_to_alpha(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let Rgba([r, g, b, _]) = *pixel;
        *pixel = if r == 255 && g == 255 && b == 255 {
            TRANSPARENT
        } else {
            OPAQUE_BLACK
        };
    }
}

/// Load `input`, apply the mask, and save to `output`. The output format
/// is inferred from the output extension. A missing or undecodable input
/// is fatal.
pub fn mask_file(input: &Path, output: &Path) -> Result<()> {
    let decoded = image::open(input)
        .with_context(|| format!("failed to open image {}", input.display()))?;

    let mut rgba = decoded.to_rgba8();
    mask_white_to_alpha(&mut rgba);

    rgba.save(output)
        .with_context(|| format!("failed to write image {}", output.display()))?;
    Ok(())
}
