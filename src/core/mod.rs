//! Core domain types for the game
//!
//! This module contains the fundamental domain types with zero external dependencies
//! beyond a fast hash map. All types here are pure, testable, and side-effect free.

mod verdict;
mod word;

pub use verdict::{AttemptRow, LetterVerdict};
pub use word::{Word, WordError};

/// Number of letters in every target and every accepted guess
pub const WORD_LENGTH: usize = 5;

/// Number of attempts a player gets before the game is over
pub const MAX_ATTEMPTS: usize = 6;
