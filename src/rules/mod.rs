//! Match engine: the flip/match state machine.
//!
//! The engine owns the deck during play. It never sleeps: when a second
//! card goes up it hands back a `PendingResolution` ticket, and the host
//! runs that ticket after `ticket.delay` (or drives `advance` from its
//! frame clock). Input is locked out until the ticket resolves.

pub mod engine;
pub mod event;

pub use engine::{FlipOutcome, MatchEngine, MatchPhase};
pub use event::{MatchEvent, PendingResolution};
