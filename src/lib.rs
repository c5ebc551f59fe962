//! # memo-cards
//!
//! Game-board engine for a children's memory-matching game.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: No rendering, navigation or animation. The host
//!    feeds taps, scroll offsets and timer callbacks; the engine answers
//!    with plain data.
//!
//! 2. **Owned State**: Sessions, selections and carousel positions are
//!    values owned by the screen that shows them. Nothing is global.
//!
//! 3. **Replayable**: Shuffles come from a seeded ChaCha stream. Unseeded
//!    sessions draw a fresh seed; a pinned seed replays the same boards.
//!
//! ## Flow
//!
//! An `ImageSource` lists pictures → the player fills a `Selection` while
//! browsing a `CarouselState` → `build_deck` pairs and shuffles the picks →
//! a `GameSession` drives the `MatchEngine` until the board is cleared.
//!
//! ## Modules
//!
//! - `core`: Ids, RNG, configuration, errors
//! - `cards`: Image items, cards, deck construction
//! - `rules`: Flip/match state machine and its events
//! - `carousel`: Circular scrolling arithmetic and position state
//! - `selection`: Available/selected image bookkeeping
//! - `sources`: Image source trait and built-in emoji catalog
//! - `game`: Game session

pub mod core;
pub mod cards;
pub mod rules;
pub mod carousel;
pub mod selection;
pub mod sources;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    CardId, ImageId, PairId,
    GameRng,
    GameConfig, GridLayout, GridSize, TimingConfig,
    MemoError, Result,
};

pub use crate::cards::{build_deck, validate_deck, Card, ImageItem, ImageKind};

pub use crate::rules::{FlipOutcome, MatchEngine, MatchEvent, MatchPhase, PendingResolution};

pub use crate::carousel::{reposition_if_needed, CarouselState};

pub use crate::selection::Selection;

pub use crate::sources::{GlyphCatalog, ImageSource, StaticSource};

pub use crate::game::GameSession;
