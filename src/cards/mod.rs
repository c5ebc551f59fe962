//! Card system: image items, board cards, and deck construction.
//!
//! ## Key Types
//!
//! - `ImageItem`: Opaque picture reference supplied by an image source
//! - `ImageKind`: Glyph, loaded resource, or bundled asset
//! - `Card`: One board tile with face-up/matched flags
//! - `build_deck`: Pairs and shuffles the chosen images

pub mod image;
pub mod card;
pub mod deck;

pub use image::{ImageItem, ImageKind};
pub use card::Card;
pub use deck::{build_deck, validate_deck};
