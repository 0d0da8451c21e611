//! Lossless re-encoding of the primary logo.

use std::path::Path;
use image::GenericImageView;
use tracing::debug;

use crate::core::{EncodeSettings, OptimizationResult};
use crate::utils::{
    OptimizerError, OptimizerResult, extract_filename, get_file_size, validate_settings,
};

use super::codec::{decode, encode_rgba_max};

/// Optimizes one image: decode, normalize to RGBA, re-encode losslessly at
/// maximum compression, write exactly one file at `output_path`.
///
/// Dimensions are preserved; when the source lacks an alpha channel the
/// existing channel values are kept and a fully-opaque alpha is added. The
/// input file is never mutated. `settings.quality` is validated but not
/// consulted by the encoder: the PNG path is lossless.
pub fn optimize(
    input_path: &Path,
    output_path: &Path,
    settings: &EncodeSettings,
) -> OptimizerResult<OptimizationResult> {
    validate_settings(settings)?;

    // Original size before any transformation
    let original_size = get_file_size(input_path)?;

    let image = decode(input_path)?;

    debug!(
        "Loaded '{}': {}×{}",
        extract_filename(input_path),
        image.width(),
        image.height()
    );

    if !image.color().has_alpha() {
        debug!("Converting '{}' to RGBA", extract_filename(input_path));
    }
    let rgba = image.to_rgba8();

    let encoded = encode_rgba_max(&rgba)?;
    std::fs::write(output_path, &encoded)
        .map_err(|e| OptimizerError::io(format!(
            "Failed to write '{}': {}", output_path.display(), e
        )))?;

    let optimized_size = encoded.len() as u64;
    let saved_bytes = original_size as i64 - optimized_size as i64;
    let compression_ratio = if original_size > 0 {
        saved_bytes as f64 / original_size as f64 * 100.0
    } else {
        0.0
    };

    debug!(
        "'{}' → {} bytes saved ({:.1}%)",
        extract_filename(input_path),
        saved_bytes,
        compression_ratio
    );

    Ok(OptimizationResult {
        original_path: input_path.to_path_buf(),
        optimized_path: output_path.to_path_buf(),
        original_size,
        optimized_size,
        saved_bytes,
        compression_ratio,
    })
}
