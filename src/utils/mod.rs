pub mod error;
pub mod fs;
pub mod validation;

pub use error::{OptimizerError, OptimizerResult};
pub use fs::{get_file_size, extract_filename};
pub use validation::{
    validate_input_path,
    validate_output_dir,
    validate_output_path,
    validate_settings,
};
