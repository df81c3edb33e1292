//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary, a file loader for
//! custom lists, and the production [`WordList`] word source.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{ALLOWED_EXTRA, ALLOWED_EXTRA_COUNT, ANSWERS, ANSWERS_COUNT};
pub use list::{WordList, WordListError};
