//! Flip/match state machine.
//!
//! ## States
//!
//! - `Idle`: no unresolved card is up
//! - `OneFlipped`: one card up, waiting for its partner
//! - `Resolving`: two cards up, waiting for the pause to run out
//! - `Won`: every pair matched (terminal)
//!
//! Taps that don't fit the current state are ignored, never errors: a
//! double tap or a tap during the pause simply does nothing.

use std::time::Duration;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, info};

use super::event::{MatchEvent, PendingResolution};
use crate::cards::{validate_deck, Card};
use crate::core::{CardId, MemoError, Result, TimingConfig};

/// Current state of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    Idle,
    OneFlipped,
    Resolving,
    Won,
}

/// What a tap did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The tap was ignored.
    Ignored,
    /// First card of an attempt is up.
    FirstUp(CardId),
    /// Second card is up; schedule the ticket.
    SecondUp(PendingResolution),
}

impl FlipOutcome {
    /// The ticket to schedule, if the tap completed an attempt.
    #[must_use]
    pub fn pending(&self) -> Option<PendingResolution> {
        match self {
            FlipOutcome::SecondUp(ticket) => Some(*ticket),
            _ => None,
        }
    }

    /// Whether the tap changed anything.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, FlipOutcome::Ignored)
    }
}

/// Flip/match state machine over one deck.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    cards: Vec<Card>,
    positions: FxHashMap<CardId, usize>,
    face_up: SmallVec<[CardId; 2]>,
    pending: Option<PendingResolution>,
    waited: Duration,
    matched_pairs: usize,
    won: bool,
    generation: u64,
    timing: TimingConfig,
}

impl MatchEngine {
    /// Start an engine over a freshly built deck.
    ///
    /// The deck must be non-empty, pass `validate_deck`, and have at least
    /// one unmatched pair.
    pub fn new(deck: Vec<Card>, timing: TimingConfig) -> Result<Self> {
        Self::check_deck(&deck)?;
        let positions = Self::index(&deck);
        let matched_pairs = deck.iter().filter(|c| c.is_matched()).count() / 2;

        Ok(Self {
            cards: deck,
            positions,
            face_up: SmallVec::new(),
            pending: None,
            waited: Duration::ZERO,
            matched_pairs,
            won: false,
            generation: 0,
            timing,
        })
    }

    /// Replace the deck (restart). Outstanding tickets become stale.
    pub fn reset(&mut self, deck: Vec<Card>) -> Result<()> {
        Self::check_deck(&deck)?;
        self.positions = Self::index(&deck);
        self.matched_pairs = deck.iter().filter(|c| c.is_matched()).count() / 2;
        self.cards = deck;
        self.face_up.clear();
        self.pending = None;
        self.waited = Duration::ZERO;
        self.won = false;
        self.generation += 1;
        debug!(generation = self.generation, cards = self.cards.len(), "engine reset");
        Ok(())
    }

    fn check_deck(deck: &[Card]) -> Result<()> {
        if deck.is_empty() {
            return Err(MemoError::invalid("deck is empty"));
        }
        validate_deck(deck)?;
        if deck.iter().all(Card::is_matched) {
            return Err(MemoError::invalid("deck is already cleared"));
        }
        Ok(())
    }

    fn index(deck: &[Card]) -> FxHashMap<CardId, usize> {
        deck.iter().enumerate().map(|(i, c)| (c.id, i)).collect()
    }

    // === Queries ===

    /// Current state.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        if self.won {
            MatchPhase::Won
        } else if self.pending.is_some() {
            MatchPhase::Resolving
        } else if self.face_up.is_empty() {
            MatchPhase::Idle
        } else {
            MatchPhase::OneFlipped
        }
    }

    /// Cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.positions.get(&id).map(|&i| &self.cards[i])
    }

    /// Cards that are up but not yet resolved (0-2).
    #[must_use]
    pub fn flipped_count(&self) -> usize {
        self.face_up.len()
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Has every pair been found?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Is input locked while a pair resolves?
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    /// The outstanding ticket, if any.
    #[must_use]
    pub fn pending(&self) -> Option<PendingResolution> {
        self.pending
    }

    /// Deal counter; bumped by every `reset`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Cards a tap would currently turn over.
    pub fn flippable(&self) -> impl Iterator<Item = CardId> + '_ {
        let open = !self.won && self.pending.is_none();
        self.cards
            .iter()
            .filter(move |c| open && c.is_flippable())
            .map(|c| c.id)
    }

    // === Transitions ===

    /// Handle a tap on `id`.
    pub fn flip(&mut self, id: CardId) -> FlipOutcome {
        if self.won || self.pending.is_some() {
            debug!(card = %id, "flip ignored: board locked");
            return FlipOutcome::Ignored;
        }

        let Some(&pos) = self.positions.get(&id) else {
            debug!(card = %id, "flip ignored: unknown card");
            return FlipOutcome::Ignored;
        };
        if !self.cards[pos].is_flippable() {
            debug!(card = %id, "flip ignored: already up");
            return FlipOutcome::Ignored;
        }

        self.cards[pos].turn_up();
        self.face_up.push(id);

        if self.face_up.len() < 2 {
            debug!(card = %id, "first card up");
            return FlipOutcome::FirstUp(id);
        }

        let first = self.face_up[0];
        let is_match = self
            .card(first)
            .is_some_and(|c| c.pairs_with(&self.cards[pos]));
        let ticket = PendingResolution {
            generation: self.generation,
            cards: [first, id],
            is_match,
            delay: self.timing.pause_for(is_match),
        };
        self.pending = Some(ticket);
        self.waited = Duration::ZERO;
        debug!(first = %first, second = %id, is_match, "second card up, resolving");

        FlipOutcome::SecondUp(ticket)
    }

    /// Run a scheduled ticket.
    ///
    /// Stale tickets (older deal, or already resolved) are ignored and
    /// produce no events.
    pub fn resolve(&mut self, ticket: &PendingResolution) -> SmallVec<[MatchEvent; 2]> {
        match self.pending {
            Some(pending) if pending == *ticket => self.finish_pending(),
            _ => {
                debug!(generation = ticket.generation, "stale resolution ignored");
                SmallVec::new()
            }
        }
    }

    /// Clock-driven alternative to `resolve`: accumulates `elapsed` and
    /// resolves once the pending ticket's delay has passed.
    pub fn advance(&mut self, elapsed: Duration) -> SmallVec<[MatchEvent; 2]> {
        let Some(pending) = self.pending else {
            return SmallVec::new();
        };
        self.waited = self.waited.saturating_add(elapsed);
        if self.waited < pending.delay {
            return SmallVec::new();
        }
        self.finish_pending()
    }

    fn finish_pending(&mut self) -> SmallVec<[MatchEvent; 2]> {
        let Some(ticket) = self.pending.take() else {
            return SmallVec::new();
        };
        self.face_up.clear();
        self.waited = Duration::ZERO;

        let [a, b] = ticket.cards;
        let (Some(&pa), Some(&pb)) = (self.positions.get(&a), self.positions.get(&b)) else {
            return SmallVec::new();
        };

        if ticket.is_match {
            self.cards[pa].mark_matched();
            self.cards[pb].mark_matched();
            self.matched_pairs += 1;
            let pair = self.cards[pa].pair_id;
            debug!(%pair, matched = self.matched_pairs, "pair matched");

            let mut events: SmallVec<[MatchEvent; 2]> =
                smallvec![MatchEvent::PairMatched { pair, cards: ticket.cards }];
            if let Some(won) = self.check_win() {
                events.push(won);
            }
            events
        } else {
            self.cards[pa].turn_down();
            self.cards[pb].turn_down();
            debug!(first = %a, second = %b, "pair mismatched");
            smallvec![MatchEvent::PairMismatched { cards: ticket.cards }]
        }
    }

    /// Enter `Won` if every pair is matched. Returns the completion event
    /// the first time only.
    pub fn check_win(&mut self) -> Option<MatchEvent> {
        if self.won || self.matched_pairs < self.total_pairs() {
            return None;
        }
        self.won = true;
        info!(pairs = self.matched_pairs, "board cleared");
        Some(MatchEvent::Won { pairs: self.matched_pairs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{build_deck, ImageItem};
    use crate::core::{GameRng, PairId};

    fn engine(pairs: u32, timing: TimingConfig) -> MatchEngine {
        let images: Vec<_> = (0..pairs).map(|i| ImageItem::glyph(i, format!("g{i}"), "t")).collect();
        let deck = build_deck(&images, pairs as usize * 2, &mut GameRng::new(11)).unwrap();
        MatchEngine::new(deck, timing).unwrap()
    }

    fn ids(pair: u32) -> (CardId, CardId) {
        PairId::new(pair).card_ids()
    }

    #[test]
    fn test_starts_idle() {
        let e = engine(2, TimingConfig::default());
        assert_eq!(e.phase(), MatchPhase::Idle);
        assert_eq!(e.flipped_count(), 0);
        assert_eq!(e.total_pairs(), 2);
        assert_eq!(e.flippable().count(), 4);
    }

    #[test]
    fn test_rejects_empty_deck() {
        assert!(MatchEngine::new(Vec::new(), TimingConfig::default()).is_err());
    }

    #[test]
    fn test_rejects_cleared_deck() {
        let images: Vec<_> = (0..2).map(|i| ImageItem::glyph(i, "x", "t")).collect();
        let mut deck = build_deck(&images, 4, &mut GameRng::new(3)).unwrap();
        deck.iter_mut().for_each(Card::mark_matched);

        let err = MatchEngine::new(deck.clone(), TimingConfig::default()).unwrap_err();
        assert!(err.is_configuration());

        let mut e = engine(2, TimingConfig::default());
        assert!(e.reset(deck).is_err());
        assert_eq!(e.generation(), 0);
        assert_eq!(e.phase(), MatchPhase::Idle);

        // A partly matched deck still plays and can be won.
        let mut partial = build_deck(&images, 4, &mut GameRng::new(3)).unwrap();
        partial
            .iter_mut()
            .filter(|c| c.pair_id == PairId::new(0))
            .for_each(Card::mark_matched);
        let mut e = MatchEngine::new(partial, TimingConfig::instant()).unwrap();
        assert_eq!(e.matched_pairs(), 1);
        let (a, b) = ids(1);
        e.flip(a);
        let ticket = e.flip(b).pending().unwrap();
        assert!(e.resolve(&ticket).iter().any(MatchEvent::is_win));
    }

    #[test]
    fn test_match_flow() {
        let mut e = engine(2, TimingConfig::default());
        let (a, b) = ids(0);

        assert_eq!(e.flip(a), FlipOutcome::FirstUp(a));
        assert_eq!(e.phase(), MatchPhase::OneFlipped);

        let ticket = e.flip(b).pending().unwrap();
        assert!(ticket.is_match);
        assert_eq!(ticket.delay, TimingConfig::MATCH_PAUSE);
        assert_eq!(e.phase(), MatchPhase::Resolving);
        assert!(e.is_processing());

        let events = e.resolve(&ticket);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0], MatchEvent::PairMatched { pair: PairId::new(0), cards: [a, b] });
        assert!(e.card(a).unwrap().is_matched());
        assert!(e.card(b).unwrap().is_matched());
        assert_eq!(e.matched_pairs(), 1);
        assert_eq!(e.phase(), MatchPhase::Idle);
    }

    #[test]
    fn test_mismatch_flow() {
        let mut e = engine(2, TimingConfig::default());
        let (a, _) = ids(0);
        let (c, _) = ids(1);

        e.flip(a);
        let ticket = e.flip(c).pending().unwrap();
        assert!(!ticket.is_match);
        assert_eq!(ticket.delay, TimingConfig::MISMATCH_PAUSE);

        let events = e.resolve(&ticket);
        assert_eq!(events.as_slice(), &[MatchEvent::PairMismatched { cards: [a, c] }]);
        assert!(!e.card(a).unwrap().is_face_up());
        assert!(!e.card(c).unwrap().is_face_up());
        assert_eq!(e.matched_pairs(), 0);
        assert_eq!(e.phase(), MatchPhase::Idle);
    }

    #[test]
    fn test_same_card_twice_ignored() {
        let mut e = engine(2, TimingConfig::default());
        let (a, _) = ids(0);

        e.flip(a);
        assert!(e.flip(a).is_ignored());
        assert_eq!(e.phase(), MatchPhase::OneFlipped);
        assert_eq!(e.flipped_count(), 1);
    }

    #[test]
    fn test_input_locked_while_resolving() {
        let mut e = engine(3, TimingConfig::default());
        let (a, _) = ids(0);
        let (c, _) = ids(1);
        let (x, _) = ids(2);

        e.flip(a);
        e.flip(c);
        let before: Vec<Card> = e.cards().to_vec();

        assert!(e.flip(x).is_ignored());
        assert_eq!(e.cards(), before.as_slice());
        assert_eq!(e.flipped_count(), 2);
        assert_eq!(e.flippable().count(), 0);
    }

    #[test]
    fn test_matched_card_ignored() {
        let mut e = engine(2, TimingConfig::instant());
        let (a, b) = ids(0);
        e.flip(a);
        let t = e.flip(b).pending().unwrap();
        e.resolve(&t);

        assert!(e.flip(a).is_ignored());
        assert!(e.flip(CardId::new(99)).is_ignored());
        assert_eq!(e.phase(), MatchPhase::Idle);
    }

    #[test]
    fn test_win_emitted_once() {
        let mut e = engine(2, TimingConfig::instant());
        let mut wins = 0;
        for pair in 0..2 {
            let (a, b) = ids(pair);
            e.flip(a);
            let t = e.flip(b).pending().unwrap();
            wins += e.resolve(&t).iter().filter(|ev| ev.is_win()).count();
            wins += e.resolve(&t).iter().filter(|ev| ev.is_win()).count();
        }

        assert_eq!(wins, 1);
        assert!(e.is_won());
        assert_eq!(e.phase(), MatchPhase::Won);
        assert!(e.check_win().is_none());
        assert!(e.check_win().is_none());
        assert_eq!(e.flippable().count(), 0);
    }

    #[test]
    fn test_advance_waits_for_delay() {
        let mut e = engine(2, TimingConfig::default());
        let (a, _) = ids(0);
        let (c, _) = ids(1);
        e.flip(a);
        e.flip(c);

        assert!(e.advance(Duration::from_millis(1000)).is_empty());
        assert!(e.is_processing());
        let events = e.advance(Duration::from_millis(500));
        assert_eq!(events.len(), 1);
        assert!(!e.is_processing());
        assert!(e.advance(Duration::from_secs(5)).is_empty());
    }

    #[test]
    fn test_reset_makes_tickets_stale() {
        let mut e = engine(2, TimingConfig::default());
        let (a, b) = ids(0);
        e.flip(a);
        let ticket = e.flip(b).pending().unwrap();

        let images: Vec<_> = (0..2).map(|i| ImageItem::glyph(i, "x", "t")).collect();
        let deck = build_deck(&images, 4, &mut GameRng::new(3)).unwrap();
        e.reset(deck).unwrap();

        assert_eq!(e.generation(), 1);
        assert!(e.resolve(&ticket).is_empty());
        assert_eq!(e.phase(), MatchPhase::Idle);
        assert_eq!(e.matched_pairs(), 0);
        assert!(e.cards().iter().all(Card::is_flippable));
    }
}
