//! Vocabulary capability injected into the game controller

use crate::core::Word;

/// Supplies the accepted vocabulary and draws target words
///
/// Injected into [`Game::new`](crate::game::Game::new) rather than reached
/// for globally, so games are independently testable with fixed targets.
/// Implementations must only ever produce words of `WORD_LENGTH` letters.
pub trait WordSource {
    /// Whether `word` is an accepted submission
    fn is_valid_word(&self, word: &str) -> bool;

    /// Draw a target word for a new game
    fn choose_target(&self) -> Word;
}
