//! Pure calculation functions for thumbnail dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate dimensions that fit inside a bounding box, preserving aspect ratio.
///
/// Images already inside the box are returned unchanged (never upscaled).
/// Otherwise the limiting edge lands exactly on the box and the other edge is
/// rounded to the nearest pixel (not truncated), never below 1px.
///
/// # Arguments
/// * `source` - Original image dimensions (width, height)
/// * `bounds` - Bounding box (max width, max height)
///
/// # Examples
/// ```
/// # use gopher_catalog::imaging::fit_within;
/// // 300x200 landscape into 128x128 → width hits the box
/// assert_eq!(fit_within((300, 200), (128, 128)), (128, 85));
///
/// // 64x48 is already small enough → unchanged
/// assert_eq!(fit_within((64, 48), (128, 128)), (64, 48));
/// ```
pub fn fit_within(source: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (src_w, src_h) = source;
    let (max_w, max_h) = bounds;

    if src_w <= max_w && src_h <= max_h {
        return source;
    }

    // Compare src_w/src_h against max_w/max_h without dividing.
    if src_w as u64 * max_h as u64 >= src_h as u64 * max_w as u64 {
        // Wider than the box: width is the limiting edge
        let h = (src_h as f64 * max_w as f64 / src_w as f64).round() as u32;
        (max_w, h.max(1))
    } else {
        // Taller than the box: height is the limiting edge
        let w = (src_w as f64 * max_h as f64 / src_h as f64).round() as u32;
        (w.max(1), max_h)
    }
}
