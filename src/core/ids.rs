//! Identifier newtypes.
//!
//! Images, cards and pairs each get their own id type so a card id can
//! never be passed where a pair id is expected.
//!
//! ```
//! use memo_cards::core::{CardId, PairId};
//!
//! // Cards of pair `p` are allocated as `2p` and `2p + 1`.
//! let pair = PairId::new(3);
//! let (a, b) = pair.card_ids();
//! assert_eq!(a, CardId::new(6));
//! assert_eq!(b, CardId::new(7));
//! assert_eq!(a.pair(), pair);
//! ```

use serde::{Deserialize, Serialize};

/// Stable identifier of an image item.
///
/// Assigned by the image source. Selection order in the carousel is
/// derived from these, so sources should hand them out in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ImageId(pub u32);

impl ImageId {
    /// Create a new image ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image({})", self.0)
    }
}

/// Unique identifier of one board tile within a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The pair this card was allocated for.
    #[must_use]
    pub const fn pair(self) -> PairId {
        PairId(self.0 / 2)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier shared by exactly two cards in a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The two card ids belonging to this pair.
    #[must_use]
    pub const fn card_ids(self) -> (CardId, CardId) {
        (CardId(self.0 * 2), CardId(self.0 * 2 + 1))
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}
