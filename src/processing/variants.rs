//! Fixed-size variant generation for the optimized logo.

use std::path::Path;
use image::imageops::FilterType;
use tracing::debug;

use crate::core::VariantResult;
use crate::utils::{OptimizerError, OptimizerResult};

use super::codec::{decode, encode_rgba_max};

/// One fixed resample target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSpec {
    pub width: u32,
    pub height: u32,
}

impl VariantSpec {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Output filename derived from the target dimensions.
    pub fn file_name(&self) -> String {
        format!("logo-{}.png", self.width)
    }
}

/// The fixed set of variant targets.
pub const VARIANT_SIZES: [VariantSpec; 4] = [
    VariantSpec::new(512, 512),
    VariantSpec::new(256, 256),
    VariantSpec::new(128, 128),
    VariantSpec::new(64, 64),
];

/// Produces one downscaled copy per entry of [`VARIANT_SIZES`].
///
/// The source is decoded once, resampled with Lanczos to each exact target
/// (the target is fixed regardless of the source aspect ratio), and written
/// as `logo-<size>.png` into `output_dir` with the same lossless
/// max-compression encoding as the primary output. The first failure aborts
/// the remaining variants; nothing else in `output_dir` is touched.
pub fn generate_size_variants(
    input_path: &Path,
    output_dir: &Path,
) -> OptimizerResult<Vec<VariantResult>> {
    let image = decode(input_path)?;

    let mut results = Vec::with_capacity(VARIANT_SIZES.len());

    for spec in VARIANT_SIZES {
        let resized = image.resize_exact(spec.width, spec.height, FilterType::Lanczos3);
        let encoded = encode_rgba_max(&resized.to_rgba8())?;

        let output_path = output_dir.join(spec.file_name());
        std::fs::write(&output_path, &encoded)
            .map_err(|e| OptimizerError::io(format!(
                "Failed to write '{}': {}", output_path.display(), e
            )))?;

        debug!(
            "✓ {}×{}: {} bytes - {}",
            spec.width,
            spec.height,
            encoded.len(),
            spec.file_name()
        );

        results.push(VariantResult {
            width: spec.width,
            height: spec.height,
            path: output_path,
            size_bytes: encoded.len() as u64,
        });
    }

    Ok(results)
}
