//! Selection set manager.
//!
//! Moves image items between the carousel's "available" pool and the
//! fixed-size slot set the deck is built from.

pub mod manager;

pub use manager::Selection;
