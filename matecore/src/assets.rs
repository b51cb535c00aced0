//! Bundled asset decoding
//!
//! The application ships its raster assets embedded in the binary with
//! `include_bytes!`.  Decoding happens once at startup, before the event
//! loop; a decode failure means the build itself is broken, so callers
//! treat it as fatal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to decode embedded image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decode an embedded raster image into an RGBA [`egui::ColorImage`].
pub fn decode_image(bytes: &[u8]) -> Result<egui::ColorImage, AssetError> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        rgba.as_flat_samples().as_slice(),
    ))
}
