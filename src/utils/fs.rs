use std::path::Path;
use crate::utils::{OptimizerError, OptimizerResult};

/// Get file size in bytes
pub fn get_file_size(path: impl AsRef<Path>) -> OptimizerResult<u64> {
    std::fs::metadata(path.as_ref())
        .map(|m| m.len())
        .map_err(|e| OptimizerError::io(format!("Failed to get file size: {}", e)))
}

/// Get file extension as lowercase string
pub fn get_extension(path: impl AsRef<Path>) -> OptimizerResult<String> {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| OptimizerError::validation(
            format!("File has no extension: {}", path.as_ref().display())
        ))
}

/// Extract the file name component for log messages, falling back to the full path.
pub fn extract_filename(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.to_string())
        .unwrap_or_else(|| path.display().to_string())
}
