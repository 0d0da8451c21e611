//! PNG decode/encode primitives.
//!
//! Encoding is lossless at a fixed maximum compression effort: the `image`
//! PNG encoder runs at `CompressionType::Best` with adaptive filtering, then
//! oxipng recompresses the encoded stream. Identical input pixels always
//! produce identical output bytes.

use std::path::Path;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::{DynamicImage, ExtendedColorType, ImageEncoder, ImageError, RgbaImage};
use tracing::warn;

use crate::utils::{OptimizerError, OptimizerResult};

/// oxipng preset. 6 is the highest effort short of zopfli.
const SQUEEZE_PRESET: u8 = 6;

/// Decodes a raster image from `path`.
pub fn decode(path: &Path) -> OptimizerResult<DynamicImage> {
    image::open(path).map_err(|e| match e {
        ImageError::IoError(io) => {
            OptimizerError::io(format!("Failed to read '{}': {}", path.display(), io))
        }
        other => {
            OptimizerError::decode(format!("Failed to decode '{}': {}", path.display(), other))
        }
    })
}

/// Encodes `image` as a losslessly max-compressed RGBA PNG.
pub fn encode_rgba_max(image: &RgbaImage) -> OptimizerResult<Vec<u8>> {
    let mut encoded = Vec::new();
    let encoder = PngEncoder::new_with_quality(
        &mut encoded,
        CompressionType::Best,
        PngFilterType::Adaptive,
    );
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| OptimizerError::encode(format!("PNG encode failed: {e}")))?;

    Ok(squeeze(encoded))
}

/// Recompresses an encoded PNG stream with oxipng.
///
/// Falls back to the input bytes when oxipng fails or cannot shrink the
/// stream; the result is a valid lossless PNG either way.
fn squeeze(encoded: Vec<u8>) -> Vec<u8> {
    let mut options = oxipng::Options::from_preset(SQUEEZE_PRESET);
    // The decoded color mode must stay RGBA with untouched pixel values, so
    // the type/depth reductions stay off.
    options.color_type_reduction = false;
    options.bit_depth_reduction = false;
    options.palette_reduction = false;
    options.grayscale_reduction = false;

    match oxipng::optimize_from_memory(&encoded, &options) {
        Ok(squeezed) if squeezed.len() < encoded.len() => squeezed,
        Ok(_) => encoded,
        Err(e) => {
            warn!("oxipng pass failed, keeping encoder output: {e}");
            encoded
        }
    }
}
