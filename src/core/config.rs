//! Pipeline configuration.
//!
//! The paths the binary operates on live here instead of as globals so the
//! pipeline can be pointed at temporary directories in tests.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::core::EncodeSettings;

/// Configuration for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Path to the source logo
    #[serde(rename = "inputPath")]
    pub input_path: PathBuf,
    /// Path where the optimized logo is written
    #[serde(rename = "optimizedPath")]
    pub optimized_path: PathBuf,
    /// Directory that receives the size variants
    #[serde(rename = "variantDir")]
    pub variant_dir: PathBuf,
    /// Encode settings shared by the optimized logo and all variants
    pub settings: EncodeSettings,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("public/logo.png"),
            optimized_path: PathBuf::from("public/logo-optimized.png"),
            variant_dir: PathBuf::from("public"),
            settings: EncodeSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_logo() {
        let config = PipelineConfig::default();
        assert_eq!(config.input_path, PathBuf::from("public/logo.png"));
        assert_eq!(config.optimized_path, PathBuf::from("public/logo-optimized.png"));
        assert_eq!(config.variant_dir, PathBuf::from("public"));
        assert_eq!(config.settings.quality, 85);
    }
}
