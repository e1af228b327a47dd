//! Decode, downscale and PNG-encode, using the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG) | `image::load_from_memory` (format sniffed from bytes) |
//! | Downscale | `DynamicImage::resize_exact` with the `ThumbnailSpec` filter |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |

use super::calculations::fit_within;
use super::params::ThumbnailSpec;
use image::DynamicImage;
use image::codecs::png::PngEncoder;
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImagingError {
    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("PNG encode failed: {0}")]
    Encode(#[source] image::ImageError),
}

/// Decode an in-memory image, guessing the format from its header.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage, ImagingError> {
    image::load_from_memory(bytes).map_err(ImagingError::Decode)
}

/// Downscale `img` to fit the bounding box of `spec`.
///
/// Images already inside the box come back unchanged.
pub fn thumbnail(img: &DynamicImage, spec: &ThumbnailSpec) -> DynamicImage {
    let source = (img.width(), img.height());
    let (width, height) = fit_within(source, spec.bounds());
    if (width, height) == source {
        return img.clone();
    }
    img.resize_exact(width, height, spec.filter)
}

/// Encode `img` as PNG into `writer`.
pub fn write_png<W: Write>(img: &DynamicImage, writer: W) -> Result<(), ImagingError> {
    img.write_with_encoder(PngEncoder::new(writer))
        .map_err(ImagingError::Encode)
}
