//! Owned carousel position.
//!
//! The view reports scroll offsets while the user drags and calls
//! `on_settle` when momentum stops. Only then is the position remapped,
//! so the jump never happens mid-gesture.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::index::{
    buffer_zone_for, index_at_offset, logical_index, middle_start, physical_len,
    reposition_if_needed, DEFAULT_COPIES, MIN_COPIES,
};

/// Physical position in a repeated item strip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselState {
    base_len: usize,
    copies: usize,
    buffer_zone: usize,
    index: usize,
    scrolling: bool,
}

impl CarouselState {
    /// Carousel over `base_len` items with the default copy count,
    /// starting on the first item of the middle copy.
    #[must_use]
    pub fn new(base_len: usize) -> Self {
        Self::with_copies(base_len, DEFAULT_COPIES)
    }

    /// Carousel with an explicit copy count (raised to `MIN_COPIES`).
    #[must_use]
    pub fn with_copies(base_len: usize, copies: usize) -> Self {
        let copies = copies.max(MIN_COPIES);
        Self {
            base_len,
            copies,
            buffer_zone: buffer_zone_for(base_len),
            index: middle_start(base_len, copies),
            scrolling: false,
        }
    }

    /// Current physical index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Item under the anchor, as an index into the base list.
    #[must_use]
    pub fn logical(&self) -> Option<usize> {
        logical_index(self.index, self.base_len)
    }

    /// Items in the base list.
    #[must_use]
    pub fn base_len(&self) -> usize {
        self.base_len
    }

    /// Tiles in the repeated strip.
    #[must_use]
    pub fn physical_len(&self) -> usize {
        physical_len(self.base_len, self.copies)
    }

    /// Buffer derived from the current base length.
    #[must_use]
    pub fn buffer_zone(&self) -> usize {
        self.buffer_zone
    }

    /// Is a gesture in progress?
    #[must_use]
    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Track a scroll offset. Returns the logical item now under the anchor.
    pub fn on_scroll(&mut self, offset: f64, item_extent: f64) -> Option<usize> {
        self.scrolling = true;
        if let Some(index) = index_at_offset(offset, item_extent, self.physical_len()) {
            self.index = index;
        }
        self.logical()
    }

    /// Motion has stopped. Returns the new physical index if the view
    /// must jump (without animation) to keep the illusion going.
    pub fn on_settle(&mut self) -> Option<usize> {
        self.scrolling = false;
        let target = reposition_if_needed(self.index, self.base_len, self.copies, self.buffer_zone)?;
        debug!(from = self.index, to = target, base_len = self.base_len, "carousel repositioned");
        self.index = target;
        Some(target)
    }

    /// Center a logical item in the middle copy. Returns the physical index.
    pub fn scroll_to_logical(&mut self, logical: usize) -> usize {
        let logical = logical.min(self.base_len.saturating_sub(1));
        self.index = middle_start(self.base_len, self.copies) + logical;
        self.index
    }

    /// The base list was replaced wholesale (new source, cleared selection).
    ///
    /// Bounds and buffer are rebuilt from the new length. The logical index
    /// number is kept, clamped to the new list, and moved into the middle
    /// copy; it may now name a different item. Use `on_removed` and
    /// `on_inserted` for single-item changes. Returns the new physical index.
    pub fn set_base_len(&mut self, base_len: usize) -> usize {
        let logical = self.logical().unwrap_or(0);
        self.rebase(base_len, logical)
    }

    /// The item at logical `removed` left the base list (it was selected).
    ///
    /// The anchor stays on the item it was showing. If that item is the one
    /// removed, the anchor moves to its successor (or the new last item).
    /// Returns the new physical index.
    pub fn on_removed(&mut self, removed: usize) -> usize {
        let base_len = self.base_len.saturating_sub(1);
        let anchor = self.logical().unwrap_or(0);
        let logical = if removed < anchor { anchor - 1 } else { anchor };
        debug!(removed, anchor, logical, base_len, "carousel item removed");
        self.rebase(base_len, logical)
    }

    /// An item was inserted at logical `inserted` (it was returned to the
    /// pool). The anchor stays on the item it was showing. Returns the new
    /// physical index.
    pub fn on_inserted(&mut self, inserted: usize) -> usize {
        let base_len = self.base_len + 1;
        let logical = match self.logical() {
            Some(anchor) if inserted <= anchor => anchor + 1,
            Some(anchor) => anchor,
            None => 0,
        };
        debug!(inserted, logical, base_len, "carousel item inserted");
        self.rebase(base_len, logical)
    }

    fn rebase(&mut self, base_len: usize, logical: usize) -> usize {
        self.base_len = base_len;
        self.buffer_zone = buffer_zone_for(base_len);
        self.scroll_to_logical(logical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_middle() {
        let c = CarouselState::new(140);
        assert_eq!(c.index(), 140);
        assert_eq!(c.logical(), Some(0));
        assert_eq!(c.physical_len(), 420);
        assert_eq!(c.buffer_zone(), 5);
    }

    #[test]
    fn test_copies_clamped() {
        let c = CarouselState::with_copies(10, 1);
        assert_eq!(c.physical_len(), 30);
    }

    #[test]
    fn test_settle_near_left_edge() {
        let mut c = CarouselState::new(140);
        assert_eq!(c.on_scroll(2.0 * 80.0, 80.0), Some(2));
        assert!(c.is_scrolling());

        assert_eq!(c.on_settle(), Some(142));
        assert!(!c.is_scrolling());
        assert_eq!(c.logical(), Some(2));
        assert_eq!(c.on_settle(), None);
    }

    #[test]
    fn test_settle_in_safe_zone() {
        let mut c = CarouselState::new(140);
        c.on_scroll(200.0 * 80.0, 80.0);
        assert_eq!(c.on_settle(), None);
        assert_eq!(c.index(), 200);
    }

    #[test]
    fn test_shrinking_list_rederives_bounds() {
        let mut c = CarouselState::new(20);
        c.scroll_to_logical(15);
        assert_eq!(c.index(), 35);

        // Stale bounds would put index 35 past the new 3 x 12 strip.
        let index = c.set_base_len(12);
        assert_eq!(c.logical(), Some(11));
        assert_eq!(index, 23);
        assert!(index < c.physical_len());
        assert_eq!(c.buffer_zone(), 5);
    }

    #[test]
    fn test_removal_keeps_anchored_item() {
        let mut c = CarouselState::new(20);
        c.scroll_to_logical(10);

        // before the anchor: everything shifts left by one
        assert_eq!(c.on_removed(3), 19 + 9);
        assert_eq!(c.logical(), Some(9));

        // after the anchor: unchanged
        c.on_removed(15);
        assert_eq!(c.logical(), Some(9));
        assert_eq!(c.base_len(), 18);

        // the anchored item itself: its successor slides in
        c.on_removed(9);
        assert_eq!(c.logical(), Some(9));

        // last item anchored and removed: clamp to the new last item
        let mut c = CarouselState::new(4);
        c.scroll_to_logical(3);
        c.on_removed(3);
        assert_eq!(c.logical(), Some(2));
    }

    #[test]
    fn test_insertion_keeps_anchored_item() {
        let mut c = CarouselState::new(10);
        c.scroll_to_logical(4);

        c.on_inserted(4);
        assert_eq!(c.logical(), Some(5));
        assert_eq!(c.base_len(), 11);

        c.on_inserted(8);
        assert_eq!(c.logical(), Some(5));

        let mut empty = CarouselState::new(0);
        assert_eq!(empty.on_inserted(0), 1);
        assert_eq!(empty.logical(), Some(0));
    }

    #[test]
    fn test_tiny_lists_never_reposition() {
        let mut c = CarouselState::new(20);
        c.set_base_len(1);
        assert_eq!(c.buffer_zone(), 0);
        c.on_scroll(0.0, 80.0);
        assert_eq!(c.on_settle(), None);

        c.set_base_len(0);
        assert_eq!(c.logical(), None);
        assert_eq!(c.index(), 0);
        assert_eq!(c.on_scroll(100.0, 80.0), None);
        assert_eq!(c.on_settle(), None);
    }
}
