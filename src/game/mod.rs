//! Game session: one board from deal to win.
//!
//! A `GameSession` glues the deck builder and the match engine to a
//! `GameConfig`. It is created when the game screen opens, reset by the
//! restart button, and dropped when the player leaves.

mod session;

pub use session::GameSession;
