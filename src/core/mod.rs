//! Core types: identifiers, RNG, configuration, errors.
//!
//! Everything here is shared by the deck builder, the match engine, the
//! carousel and the selection manager. None of it knows about rendering.

pub mod ids;
pub mod rng;
pub mod config;
pub mod error;

pub use ids::{CardId, ImageId, PairId};
pub use rng::GameRng;
pub use config::{GameConfig, GridLayout, GridSize, TimingConfig};
pub use error::{MemoError, Result};
