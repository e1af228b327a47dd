//! Parameter types for thumbnail operations.
//!
//! [`ThumbnailSpec`] describes *what* a thumbnail should be (bounding box and
//! sampling filter); [`codec`](super::codec) does the pixel work.

use image::imageops::FilterType;

/// Edge length of the default thumbnail bounding box.
pub const THUMBNAIL_EDGE: u32 = 128;

/// Bounding box and resampling filter for a thumbnail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailSpec {
    pub max_width: u32,
    pub max_height: u32,
    pub filter: FilterType,
}

impl ThumbnailSpec {
    pub fn bounds(&self) -> (u32, u32) {
        (self.max_width, self.max_height)
    }
}

impl Default for ThumbnailSpec {
    /// 128x128 box, nearest-neighbor sampling.
    fn default() -> Self {
        Self {
            max_width: THUMBNAIL_EDGE,
            max_height: THUMBNAIL_EDGE,
            filter: FilterType::Nearest,
        }
    }
}
