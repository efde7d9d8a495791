//! Presentation of the finished raster.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use glint_renderer::FrameBuffer;
use image::RgbaImage;

/// Write the frame buffer to `path` as an 8-bit RGBA PNG.
pub fn save_png(buffer: &FrameBuffer, path: &Path) -> Result<()> {
    let image = RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.to_rgba8())
        .ok_or_else(|| anyhow!("Frame buffer does not match its own dimensions"))?;

    image
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!("Image saved as {}", path.display());
    Ok(())
}
