//! Window arithmetic for fixed-height virtual lists.

use std::ops::Range;

/// Rows intersecting a viewport, widened by `overscan` rows on each side and
/// clamped to `0..len`.
pub fn visible_range(
    scroll_top: f64,
    viewport_height: f64,
    row_height: f64,
    len: usize,
    overscan: usize,
) -> Range<usize> {
    if len == 0 || row_height <= 0.0 {
        return 0..0;
    }
    let top = scroll_top.max(0.0);
    let first = ((top / row_height).floor() as usize).min(len);
    let last = (((top + viewport_height.max(0.0)) / row_height).ceil() as usize).min(len);

    first.saturating_sub(overscan)..last.saturating_add(overscan).min(len)
}

/// Row shown by recycled slot `slot`, for slots `0..range.len()`.
///
/// Each index `i` in `range` belongs to slot `i % range.len()`, so scrolling
/// by one row moves exactly one slot and leaves the others bound as they are.
pub fn slot_index(range: &Range<usize>, slot: usize) -> Option<usize> {
    let count = range.len();
    if slot >= count {
        return None;
    }
    let base = range.start - range.start % count;
    let index = base + slot;
    Some(if index < range.start { index + count } else { index })
}

/// New `scroll_top` that brings row `index` fully into view with the
/// smallest scroll, or `None` when it is visible already.
pub fn reveal_scroll_top(
    index: usize,
    scroll_top: f64,
    viewport_height: f64,
    row_height: f64,
) -> Option<f64> {
    let row_top = index as f64 * row_height;
    let row_bottom = row_top + row_height;

    if row_top < scroll_top {
        Some(row_top)
    } else if row_bottom > scroll_top + viewport_height {
        Some((row_bottom - viewport_height).max(0.0))
    } else {
        None
    }
}
