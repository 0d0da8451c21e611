//! Image processing via the pure-Rust imaging stack.
//!
//! # Architecture
//!
//! - [`codec`]: PNG decode and lossless max-compression encode (`image` +
//!   an oxipng recompression pass).
//! - [`optimizer`]: Re-encodes the primary logo in place-for-place RGBA.
//! - [`variants`]: Resamples the optimized logo to the fixed variant sizes.

mod codec;
mod optimizer;
mod variants;

pub use codec::{decode, encode_rgba_max};
pub use optimizer::optimize;
pub use variants::{VariantSpec, VARIANT_SIZES, generate_size_variants};
