//! Wordle
//!
//! A single-player word-guessing game: six attempts to find a hidden
//! five-letter word, with per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{AttemptRow, Word};
//!
//! let target = Word::new("alert").unwrap();
//! let guess = Word::new("tiger").unwrap();
//!
//! let row = AttemptRow::evaluate(&guess, &target);
//! assert!(!row.is_winning());
//! ```

// Core domain types
pub mod core;

// Game progression state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
