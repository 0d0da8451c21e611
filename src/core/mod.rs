//! Core pipeline types and configuration.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - [`PipelineConfig`]: Paths and settings for one run
//! - [`EncodeSettings`]: Configuration for PNG encoding
//! - [`OptimizationResult`]: Result of optimizing the primary logo
//! - [`VariantResult`]: One written size variant
//! - [`PipelineReport`]: Full run summary

mod config;
mod types;

pub use config::PipelineConfig;
pub use types::{EncodeSettings, OptimizationResult, VariantResult, PipelineReport};
