//! Image processing: pure Rust via the `image` crate.
//!
//! The module is split into:
//! - **Calculations**: pure dimension math ([`fit_within`])
//! - **Parameters**: [`ThumbnailSpec`], the bounding box and sampling filter
//! - **Codec**: decode bytes, downscale, encode PNG

mod calculations;
pub mod codec;
mod params;

pub use calculations::fit_within;
pub use codec::{ImagingError, decode, thumbnail, write_png};
pub use params::{THUMBNAIL_EDGE, ThumbnailSpec};
