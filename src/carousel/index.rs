//! Carousel index arithmetic.
//!
//! All functions are pure. Physical indices address the repeated array
//! (`base_len * copies` tiles); logical indices address the base list.
//!
//! ```
//! use memo_cards::carousel::reposition_if_needed;
//!
//! // Two tiles from the left edge of a 3 x 140 strip: jump one copy right.
//! assert_eq!(reposition_if_needed(2, 140, 3, 5), Some(142));
//! // Comfortably inside the middle copy: leave it alone.
//! assert_eq!(reposition_if_needed(200, 140, 3, 5), None);
//! ```

/// Fewest copies that leave a full copy on each side of the middle one.
pub const MIN_COPIES: usize = 3;

/// Copies used when the host doesn't choose.
pub const DEFAULT_COPIES: usize = 3;

/// Tiles from either edge that trigger a remap.
pub const DEFAULT_BUFFER_ZONE: usize = 5;

/// Length of the repeated array.
#[must_use]
pub const fn physical_len(base_len: usize, copies: usize) -> usize {
    base_len * copies
}

/// First physical index of the middle copy.
#[must_use]
pub const fn middle_start(base_len: usize, copies: usize) -> usize {
    base_len * (copies / 2)
}

/// Logical item shown at a physical index. `None` for an empty list.
#[must_use]
pub const fn logical_index(physical: usize, base_len: usize) -> Option<usize> {
    if base_len == 0 {
        None
    } else {
        Some(physical % base_len)
    }
}

/// Buffer zone for a base list of `base_len` items.
///
/// Capped at half the list so the remap target is always outside the
/// opposite trigger zone. Zero (repositioning off) for lists under two items.
#[must_use]
pub fn buffer_zone_for(base_len: usize) -> usize {
    DEFAULT_BUFFER_ZONE.min(base_len / 2)
}

fn repositioning_enabled(base_len: usize, copies: usize, buffer_zone: usize) -> bool {
    base_len > 0 && copies >= MIN_COPIES && buffer_zone > 0 && base_len >= 2 * buffer_zone
}

/// Where to move the scroll position once motion settles, if anywhere.
///
/// - inside the left buffer: one base length forward
/// - inside the right buffer: one base length back
/// - otherwise: `None`
///
/// The result always shows the same logical item as `current_index`.
///
/// Returns `None` whenever the geometry can't support a seamless jump:
/// empty list, fewer than `MIN_COPIES` copies, zero buffer, or a list
/// shorter than two buffers. An index past the end of the repeated array
/// is pulled into the middle copy.
#[must_use]
pub fn reposition_if_needed(
    current_index: usize,
    base_len: usize,
    copies: usize,
    buffer_zone: usize,
) -> Option<usize> {
    if !repositioning_enabled(base_len, copies, buffer_zone) {
        return None;
    }

    let total = physical_len(base_len, copies);
    if current_index >= total {
        return Some(middle_start(base_len, copies) + current_index % base_len);
    }

    if current_index < buffer_zone {
        Some(current_index + base_len)
    } else if current_index >= total - buffer_zone {
        Some(current_index - base_len)
    } else {
        None
    }
}

/// Nearest tile to a scroll offset, clamped to `[0, len)`.
///
/// `item_extent` is the width of one tile including spacing. Returns
/// `None` for an empty strip or a non-positive extent.
#[must_use]
pub fn index_at_offset(offset: f64, item_extent: f64, len: usize) -> Option<usize> {
    if len == 0 || item_extent.is_nan() || item_extent <= 0.0 || !offset.is_finite() {
        return None;
    }
    let raw = (offset / item_extent).round();
    if raw <= 0.0 {
        return Some(0);
    }
    Some((raw as usize).min(len - 1))
}

/// Scroll offset that puts `index` at the anchor.
#[must_use]
pub fn offset_for_index(index: usize, item_extent: f64) -> f64 {
    index as f64 * item_extent
}

/// The repeated array handed to the view layer.
#[must_use]
pub fn repeat_items<T: Clone>(items: &[T], copies: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() * copies);
    for _ in 0..copies {
        out.extend_from_slice(items);
    }
    out
}
