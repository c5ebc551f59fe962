//! Infinite-looking carousel over a finite item list.
//!
//! The item list is repeated `copies` times (at least three) so there is
//! always content on both sides of the viewport. When scrolling settles
//! near either end of the repeated array, the offset is moved by exactly
//! one base length, which shows the same item and so goes unnoticed.
//!
//! - `index`: pure arithmetic, usable without any state
//! - `state`: an owned position that applies the arithmetic on scroll events

pub mod index;
pub mod state;

pub use index::{
    buffer_zone_for, index_at_offset, logical_index, middle_start, offset_for_index, physical_len,
    repeat_items, reposition_if_needed, DEFAULT_BUFFER_ZONE, DEFAULT_COPIES, MIN_COPIES,
};
pub use state::CarouselState;
