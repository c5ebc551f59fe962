//! Board cards - runtime tile state.
//!
//! A `Card` is created face-down by the deck builder. The match engine is
//! the only thing that flips it.

use serde::{Deserialize, Serialize};

use super::image::ImageItem;
use crate::core::{CardId, PairId};

/// One board tile.
///
/// `matched` implies `face_up`; the setters keep that true.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id within the deck.
    pub id: CardId,

    /// Shared with exactly one other card.
    pub pair_id: PairId,

    /// Picture shown when face-up.
    pub image: ImageItem,

    face_up: bool,
    matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, pair_id: PairId, image: ImageItem) -> Self {
        Self {
            id,
            pair_id,
            image,
            face_up: false,
            matched: false,
        }
    }

    /// Is the picture showing?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Has this card's pair been found?
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Can a tap turn this card over?
    #[must_use]
    pub fn is_flippable(&self) -> bool {
        !self.face_up && !self.matched
    }

    /// Whether two cards form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.pair_id == other.pair_id
    }

    pub(crate) fn turn_up(&mut self) {
        self.face_up = true;
    }

    /// Turns the card back over. Matched cards stay up.
    pub(crate) fn turn_down(&mut self) {
        if !self.matched {
            self.face_up = false;
        }
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}
