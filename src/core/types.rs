//! Core types for encode settings and pipeline results.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};

/// Configuration settings for PNG encoding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EncodeSettings {
    /// Quality hint (1-100). The PNG path is lossless and driven by a fixed
    /// maximum compression effort, so this value is validated but never
    /// consulted by the encoder.
    pub quality: u32,
}

impl Default for EncodeSettings {
    fn default() -> Self {
        Self { quality: 85 }
    }
}

/// Result of optimizing the primary logo file.
///
/// Contains the original and optimized file information along with
/// compression statistics.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    /// Path to the original input file
    pub original_path: PathBuf,
    /// Path to the optimized output file
    pub optimized_path: PathBuf,
    /// Original file size in bytes
    pub original_size: u64,
    /// Optimized file size in bytes
    pub optimized_size: u64,
    /// Bytes saved (can be negative if file grew)
    #[serde(rename = "savedBytes")]
    pub saved_bytes: i64,
    /// Compression ratio as a percentage
    #[serde(rename = "compressionRatio")]
    pub compression_ratio: f64,
}

/// One written size variant.
#[derive(Debug, Clone, Serialize)]
pub struct VariantResult {
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
    /// Path to the written variant file
    pub path: PathBuf,
    /// Resulting file size in bytes
    #[serde(rename = "sizeBytes")]
    pub size_bytes: u64,
}

/// Result of a full pipeline run: the optimized logo plus its size variants.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub optimization: OptimizationResult,
    pub variants: Vec<VariantResult>,
}
