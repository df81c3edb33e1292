//! Game progression state machine
//!
//! The controller owns the hidden target, the attempt history, and the
//! terminal status, and is mutated only through its three operations:
//! submit a guess, clear the transient error, reset for a new game.

mod controller;
mod source;
mod state;

pub use controller::Game;
pub use source::WordSource;
pub use state::{GameState, Status};
