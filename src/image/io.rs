//! Export helpers for decoded grids and JSON summaries.
//!
//! - `save_grid_png`: write one pixel grid as an 8-bit grayscale PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{ImageU8, PixelGrid};
use image::{DynamicImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Save a pixel grid to a grayscale PNG.
pub fn save_grid_png(grid: &PixelGrid, path: &Path) -> Result<(), String> {
    save_view_png(&grid.as_view(), path)
}

/// Save any 8-bit view to a grayscale PNG, packing strided rows first.
pub fn save_view_png(view: &ImageU8<'_>, path: &Path) -> Result<(), String> {
    if view.w == 0 || view.h == 0 {
        return Err(format!(
            "Refusing to save empty {}x{} image to {}",
            view.w,
            view.h,
            path.display()
        ));
    }
    ensure_parent_dir(path)?;
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(view.w as u32, view.h as u32, view.to_packed())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
