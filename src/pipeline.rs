//! Sequential pipeline driving one optimization run.
//!
//! One linear pass: validate, optimize the source logo, then derive the size
//! variants from the optimized output. No retries, no partial-success path;
//! the first error is terminal for the run.

use tracing::{debug, info};

use crate::core::{PipelineConfig, PipelineReport};
use crate::processing::{generate_size_variants, optimize};
use crate::utils::{
    OptimizerResult, extract_filename, validate_input_path, validate_output_dir,
    validate_output_path, validate_settings,
};

/// Runs the full pipeline described by `config`.
///
/// The input existence check happens before anything is written; a missing
/// input produces `OptimizerError::MissingInput` and no output files.
/// Re-running with unchanged input and settings overwrites the previous
/// outputs with identical bytes.
pub fn run(config: &PipelineConfig) -> OptimizerResult<PipelineReport> {
    validate_settings(&config.settings)?;
    validate_input_path(&config.input_path)?;
    validate_output_path(&config.optimized_path)?;
    validate_output_dir(&config.variant_dir)?;

    info!("Optimizing '{}'", config.input_path.display());
    let optimization = optimize(&config.input_path, &config.optimized_path, &config.settings)?;

    let file_name = extract_filename(&config.input_path);
    let saved_kb = optimization.saved_bytes as f64 / 1024.0;
    info!(
        "{file_name} optimized ({saved_kb:.2} KB saved / {:.0}% compression)",
        optimization.compression_ratio
    );

    let payload = serde_json::json!({
        "fileName": file_name,
        "originalSize": optimization.original_size,
        "optimizedSize": optimization.optimized_size,
        "savedBytes": optimization.saved_bytes,
        "compressionRatio": format!("{:.2}", optimization.compression_ratio),
    });
    debug!("{payload}");

    info!("Creating size variants in '{}'", config.variant_dir.display());
    let variants = generate_size_variants(&config.optimized_path, &config.variant_dir)?;

    Ok(PipelineReport { optimization, variants })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use image::{GenericImageView, Rgb, RgbImage, Rgba};
    use crate::core::EncodeSettings;
    use crate::utils::OptimizerError;

    fn test_config(dir: &Path) -> PipelineConfig {
        PipelineConfig {
            input_path: dir.join("logo.png"),
            optimized_path: dir.join("logo-optimized.png"),
            variant_dir: dir.to_path_buf(),
            settings: EncodeSettings::default(),
        }
    }

    fn write_opaque_rgb(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 64])
        });
        img.save(path).unwrap();
    }

    #[test]
    fn end_to_end_produces_optimized_logo_and_four_variants() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        write_opaque_rgb(&config.input_path, 100, 80);

        let report = run(&config).unwrap();

        // Primary output: dimensions preserved, RGBA, channels intact.
        let optimized = image::open(&config.optimized_path).unwrap();
        assert_eq!((optimized.width(), optimized.height()), (100, 80));
        assert!(optimized.color().has_alpha());
        let rgba = optimized.to_rgba8();
        assert_eq!(rgba.get_pixel(13, 7), &Rgba([13, 7, 64, 255]));

        // Exactly four variants at the exact fixed sizes, despite the 100x80
        // source aspect ratio.
        assert_eq!(report.variants.len(), 4);
        for (variant, expected) in report.variants.iter().zip([512u32, 256, 128, 64]) {
            assert_eq!((variant.width, variant.height), (expected, expected));
            let decoded = image::open(&variant.path).unwrap();
            assert_eq!((decoded.width(), decoded.height()), (expected, expected));
        }
    }

    #[test]
    fn rerun_overwrites_with_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        write_opaque_rgb(&config.input_path, 48, 48);

        run(&config).unwrap();
        let first = std::fs::read(&config.optimized_path).unwrap();
        let first_variant = std::fs::read(dir.path().join("logo-64.png")).unwrap();

        run(&config).unwrap();
        assert_eq!(std::fs::read(&config.optimized_path).unwrap(), first);
        assert_eq!(std::fs::read(dir.path().join("logo-64.png")).unwrap(), first_variant);
    }

    #[test]
    fn missing_input_fails_without_writing_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());

        let err = run(&config).unwrap_err();
        assert!(matches!(err, OptimizerError::MissingInput(_)));
        assert!(!config.optimized_path.exists());
        assert!(!dir.path().join("logo-512.png").exists());
    }

    #[test]
    fn invalid_quality_fails_before_touching_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        write_opaque_rgb(&config.input_path, 16, 16);
        config.settings.quality = 0;

        let err = run(&config).unwrap_err();
        assert!(matches!(err, OptimizerError::Validation(_)));
        assert!(!config.optimized_path.exists());
    }

    #[test]
    fn missing_variant_dir_is_rejected_up_front() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        write_opaque_rgb(&config.input_path, 16, 16);
        config.variant_dir = dir.path().join("nonexistent");

        let err = run(&config).unwrap_err();
        assert!(matches!(err, OptimizerError::Validation(_)));
        assert!(!config.optimized_path.exists());
    }
}
