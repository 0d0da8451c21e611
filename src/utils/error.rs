//! Error types for the logo optimizer.
//!
//! Provides a hierarchy of error types using `thiserror` for ergonomic error handling.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the optimizer pipeline.
///
/// All errors are terminal for a run: there is no retry path, the first
/// failure propagates to the binary which reports it and exits non-zero.
#[derive(Error, Debug)]
pub enum OptimizerError {
    /// Input file was absent at the up-front existence check
    #[error("Input file not found: {0}")]
    MissingInput(PathBuf),

    /// Input could not be parsed as a supported raster format
    #[error("Decode error: {0}")]
    Decode(String),

    /// Encoding the processed image failed
    #[error("Encode error: {0}")]
    Encode(String),

    /// File IO error
    #[error("IO error: {0}")]
    Io(String),

    /// Invalid settings or output location
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience result type for optimizer operations.
pub type OptimizerResult<T> = Result<T, OptimizerError>;

// Helper methods for error creation
impl OptimizerError {
    pub fn missing_input(path: impl Into<PathBuf>) -> Self {
        Self::MissingInput(path.into())
    }

    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        Self::Io(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }
}

// Convert std::io::Error to OptimizerError
impl From<io::Error> for OptimizerError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
