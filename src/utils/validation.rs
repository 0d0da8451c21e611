use std::path::Path;
use crate::core::EncodeSettings;
use crate::utils::{OptimizerError, OptimizerResult, fs::get_extension};

/// Validates the input file path and format
pub fn validate_input_path(path: &Path) -> OptimizerResult<()> {
    if !path.exists() {
        return Err(OptimizerError::missing_input(path));
    }

    if !path.is_file() {
        return Err(OptimizerError::validation(
            format!("Input path is not a file: {}", path.display())
        ));
    }

    let ext = get_extension(path)?;
    if ext != "png" {
        return Err(OptimizerError::validation(
            format!("Unsupported input format '{}': expected png", ext)
        ));
    }

    Ok(())
}

/// Validates the directory that receives the size variants
pub fn validate_output_dir(path: &Path) -> OptimizerResult<()> {
    if !path.exists() {
        return Err(OptimizerError::validation(
            format!("Output directory does not exist: {}", path.display())
        ));
    }

    if !path.is_dir() {
        return Err(OptimizerError::validation(
            format!("Output path is not a directory: {}", path.display())
        ));
    }

    Ok(())
}

/// Validates the parent directory of a single output file
pub fn validate_output_path(path: &Path) -> OptimizerResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(OptimizerError::validation(
                format!("Output directory does not exist: {}", parent.display())
            ));
        }
    }

    Ok(())
}

/// Validates encode settings
pub fn validate_settings(settings: &EncodeSettings) -> OptimizerResult<()> {
    if settings.quality == 0 || settings.quality > 100 {
        return Err(OptimizerError::validation(
            format!("Invalid quality value: {}. Must be between 1 and 100", settings.quality)
        ));
    }

    Ok(())
}
