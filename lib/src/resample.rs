/// Terminal cells are roughly twice as tall as they are wide
pub const CELL_ASPECT_CORRECTION: f64 = 0.5;

/// Resolve the output grid size for a source image
///
/// # Arguments
/// * `src_width`, `src_height` - Source dimensions in pixels
/// * `width` - Requested columns
/// * `height` - Requested rows, 0 to derive from the aspect ratio
///
/// # Returns
/// `(columns, rows)`. Rows are `floor(width * src_height / src_width * 0.5)`
/// when derived, and 0 for a source with a zero dimension.
pub fn target_dimensions(src_width: u32, src_height: u32, width: u32, height: u32) -> (u32, u32) {
    if src_width == 0 || src_height == 0 {
        return (width, 0);
    }
    if height > 0 {
        return (width, height);
    }

    let aspect = f64::from(src_height) / f64::from(src_width);
    // `as` saturates, so negative or NaN results clamp to 0
    let rows = (f64::from(width) * aspect * CELL_ASPECT_CORRECTION).floor() as u32;

    (width, rows)
}

/// Map an output coordinate to its nearest-neighbor source coordinate
///
/// `floor(pos * src_len / out_len)`, no blending of neighbors. The result is
/// always below `src_len` for `pos < out_len`.
#[inline]
pub fn source_coord(pos: u32, src_len: u32, out_len: u32) -> u32 {
    (u64::from(pos) * u64::from(src_len) / u64::from(out_len)) as u32
}
