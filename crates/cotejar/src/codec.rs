//! PNG encode/decode helpers shared by capture, storage, and comparison.

use crate::result::{CotejarError, CotejarResult};
use image::{ImageEncoder, RgbaImage};

/// Encode an RGBA image to PNG bytes
pub fn encode_png(image: &RgbaImage) -> CotejarResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buffer);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(|e| CotejarError::encode(e.to_string()))?;
    Ok(buffer)
}

/// Decode PNG (or any supported raster format) bytes into an RGBA image
pub fn decode_png(bytes: &[u8]) -> CotejarResult<RgbaImage> {
    let dynamic =
        image::load_from_memory(bytes).map_err(|e| CotejarError::decode(e.to_string()))?;
    Ok(dynamic.to_rgba8())
}
