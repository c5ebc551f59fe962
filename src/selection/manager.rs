//! Available/selected bookkeeping.
//!
//! `Selection` is a value: `select` and `deselect` return the next state
//! and leave `self` alone. Both pools are `im` vectors, so the copy is
//! O(1) and the view can keep the previous state around for animations.
//!
//! ```
//! use memo_cards::cards::ImageItem;
//! use memo_cards::core::ImageId;
//! use memo_cards::selection::Selection;
//!
//! let pool = (0..4).map(|i| ImageItem::glyph(i, "x", "t"));
//! let start = Selection::new(pool, 2);
//!
//! let next = start.select(ImageId::new(2));
//! assert_eq!(next.selected().len(), 1);
//! assert_eq!(next.available().len(), 3);
//! assert_eq!(start.selected().len(), 0);
//! ```

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::ImageItem;
use crate::core::ImageId;

/// Which images are picked for the next deck.
///
/// Invariants:
/// - `available` is sorted by `ImageId`
/// - `available` and `selected` are disjoint, and together hold the pool
/// - `selected.len() <= required`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    required: usize,
    available: Vector<ImageItem>,
    selected: Vector<ImageItem>,
}

impl Selection {
    /// Start with every pool item available and all `required` slots empty.
    ///
    /// Items are ordered by id; later duplicates of an id are dropped.
    pub fn new(pool: impl IntoIterator<Item = ImageItem>, required: usize) -> Self {
        let mut seen = FxHashSet::default();
        let mut items: Vec<ImageItem> = pool.into_iter().filter(|item| seen.insert(item.id)).collect();
        items.sort_by_key(|item| item.id);

        Self {
            required,
            available: items.into_iter().collect(),
            selected: Vector::new(),
        }
    }

    /// Items still in the carousel, ordered by id.
    #[must_use]
    pub fn available(&self) -> &Vector<ImageItem> {
        &self.available
    }

    /// Picked items, in pick order.
    #[must_use]
    pub fn selected(&self) -> &Vector<ImageItem> {
        &self.selected
    }

    /// Slot count.
    #[must_use]
    pub fn required(&self) -> usize {
        self.required
    }

    /// Slots still empty.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.required.saturating_sub(self.selected.len())
    }

    /// Are all slots filled?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.selected.len() >= self.required
    }

    /// Is the item in a slot?
    #[must_use]
    pub fn is_selected(&self, id: ImageId) -> bool {
        self.selected.iter().any(|item| item.id == id)
    }

    /// Carousel position of an available item.
    #[must_use]
    pub fn available_position(&self, id: ImageId) -> Option<usize> {
        self.available.iter().position(|item| item.id == id)
    }

    /// One entry per slot; `None` for empty slots.
    pub fn slots(&self) -> impl Iterator<Item = Option<&ImageItem>> + '_ {
        self.selected
            .iter()
            .map(Some)
            .chain(std::iter::repeat(None))
            .take(self.required.max(self.selected.len()))
    }

    /// Picked images in pick order, ready for `build_deck`.
    #[must_use]
    pub fn selected_images(&self) -> Vec<ImageItem> {
        self.selected.iter().cloned().collect()
    }

    /// Move an available item into the next empty slot.
    ///
    /// No-op when the slots are full, the item is already picked, or the
    /// id is not in the available pool.
    #[must_use]
    pub fn select(&self, id: ImageId) -> Selection {
        if self.is_complete() || self.is_selected(id) {
            debug!(image = %id, full = self.is_complete(), "select ignored");
            return self.clone();
        }
        let Some(pos) = self.available_position(id) else {
            debug!(image = %id, "select ignored: not available");
            return self.clone();
        };

        let mut next = self.clone();
        let item = next.available.remove(pos);
        next.selected.push_back(item);
        next
    }

    /// Return a picked item to the carousel at its sorted position.
    ///
    /// No-op when the item isn't selected.
    #[must_use]
    pub fn deselect(&self, id: ImageId) -> Selection {
        let Some(pos) = self.selected.iter().position(|item| item.id == id) else {
            debug!(image = %id, "deselect ignored: not selected");
            return self.clone();
        };

        let mut next = self.clone();
        let item = next.selected.remove(pos);
        let insert_at = next
            .available
            .iter()
            .position(|other| other.id > item.id)
            .unwrap_or(next.available.len());
        next.available.insert(insert_at, item);
        next
    }

    /// Tap handler: deselect if picked, select otherwise.
    #[must_use]
    pub fn toggle(&self, id: ImageId) -> Selection {
        if self.is_selected(id) {
            self.deselect(id)
        } else {
            self.select(id)
        }
    }

    /// Empty every slot.
    #[must_use]
    pub fn clear(&self) -> Selection {
        Selection::new(
            self.available.iter().chain(self.selected.iter()).cloned(),
            self.required,
        )
    }
}
