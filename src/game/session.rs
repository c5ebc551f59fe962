//! Game session implementation.

use std::time::Duration;

use smallvec::SmallVec;
use tracing::info;

use crate::cards::{build_deck, Card, ImageItem};
use crate::core::{CardId, GameConfig, GameRng, GridLayout, Result};
use crate::rules::{FlipOutcome, MatchEngine, MatchEvent, MatchPhase, PendingResolution};
use crate::selection::Selection;

/// One playable board.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    layout: GridLayout,
    images: Vec<ImageItem>,
    rng: GameRng,
    engine: MatchEngine,
}

impl GameSession {
    /// Deal a board from the chosen images.
    ///
    /// Fails before anything is created if the images can't fill the grid.
    pub fn new(config: GameConfig, images: Vec<ImageItem>) -> Result<Self> {
        let layout = config.layout();
        let root = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut rng = root.for_context("deck");
        let deck = build_deck(&images, layout.total_cards, &mut rng.fork())?;
        let engine = MatchEngine::new(deck, config.timing.clone())?;

        info!(grid = %config.grid, seed = root.seed(), "session started");
        Ok(Self {
            config,
            layout,
            images,
            rng,
            engine,
        })
    }

    /// Deal a board from a completed selection.
    pub fn from_selection(config: GameConfig, selection: &Selection) -> Result<Self> {
        Self::new(config, selection.selected_images())
    }

    /// Reshuffle the same images into a new board.
    ///
    /// Tickets issued for the previous board are ignored afterwards.
    pub fn restart(&mut self) -> Result<()> {
        let deck = build_deck(&self.images, self.layout.total_cards, &mut self.rng.fork())?;
        self.engine.reset(deck)?;
        info!(grid = %self.config.grid, generation = self.engine.generation(), "session restarted");
        Ok(())
    }

    // === Input ===

    /// Tap on a card.
    pub fn flip(&mut self, card: CardId) -> FlipOutcome {
        self.engine.flip(card)
    }

    /// Tap on the tile at a grid cell.
    pub fn flip_at(&mut self, row: usize, column: usize) -> FlipOutcome {
        let Some(id) = self.card_at(row, column).map(|card| card.id) else {
            return FlipOutcome::Ignored;
        };
        self.engine.flip(id)
    }

    /// Run a scheduled resolution ticket.
    pub fn resolve(&mut self, ticket: &PendingResolution) -> SmallVec<[MatchEvent; 2]> {
        self.engine.resolve(ticket)
    }

    /// Feed frame time to a pending resolution.
    pub fn advance(&mut self, elapsed: Duration) -> SmallVec<[MatchEvent; 2]> {
        self.engine.advance(elapsed)
    }

    // === Queries ===

    /// Configuration the session was started with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Board dimensions.
    #[must_use]
    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Cards in row-major board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.engine.cards()
    }

    /// Card at a grid cell.
    #[must_use]
    pub fn card_at(&self, row: usize, column: usize) -> Option<&Card> {
        if row >= self.layout.rows || column >= self.layout.columns {
            return None;
        }
        self.engine.cards().get(row * self.layout.columns + column)
    }

    /// Pairs needed to win.
    #[must_use]
    pub fn required_pairs(&self) -> usize {
        self.layout.required_images()
    }

    /// Pairs found.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.engine.matched_pairs()
    }

    /// Face-up, unresolved cards (0-2).
    #[must_use]
    pub fn flipped_count(&self) -> usize {
        self.engine.flipped_count()
    }

    /// Engine state.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.engine.phase()
    }

    /// Is the board cleared?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.engine.is_won()
    }

    /// Is input locked?
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.engine.is_processing()
    }
}
