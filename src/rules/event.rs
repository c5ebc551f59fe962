//! Events and tickets produced by the match engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{CardId, PairId};

/// A resolution waiting for its display pause.
///
/// `generation` ties the ticket to one deal; after a restart the old
/// ticket is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingResolution {
    /// Deal the ticket belongs to.
    pub generation: u64,

    /// The two face-up cards, in flip order.
    pub cards: [CardId; 2],

    /// Whether the cards share a pair id.
    pub is_match: bool,

    /// How long to show the cards before resolving.
    pub delay: Duration,
}

/// Something the renderer should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Both cards stay up for good.
    PairMatched { pair: PairId, cards: [CardId; 2] },

    /// Both cards turn back down.
    PairMismatched { cards: [CardId; 2] },

    /// Every pair has been found. Emitted once per deal.
    Won { pairs: usize },
}

impl MatchEvent {
    /// Is this the completion event?
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, MatchEvent::Won { .. })
    }
}
