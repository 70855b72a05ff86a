//! I/O helpers for frames and JSON.
//!
//! - `load_gray_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `load_rgb_image`: read an image into an owned interleaved RGB frame.
//! - `save_rgb_image`: write an `RgbFrame` to disk (format from extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{GrayFrame, RgbFrame};
use image::RgbImage;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_gray_image(path: &Path) -> Result<GrayFrame, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayFrame::new(width, height, img.into_raw()))
}

/// Load an image from disk and convert to interleaved 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbFrame, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(RgbFrame::from_raw(width, height, img.into_raw()))
}

/// Save an RGB frame to disk; the format is inferred from the extension.
pub fn save_rgb_image(frame: &RgbFrame, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let out = RgbImage::from_raw(frame.w as u32, frame.h as u32, frame.data.clone())
        .ok_or_else(|| "RGB frame buffer has inconsistent dimensions".to_string())?;
    out.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Pretty-print a serializable value to a JSON file.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write {}: {e}", path.display()))
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
