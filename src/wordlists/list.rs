//! The production word source
//!
//! Bundles the answer pool (words a target can be drawn from) with the extra
//! allowed guesses. The accepted vocabulary is the union of the two.

use crate::core::Word;
use crate::game::WordSource;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for unusable word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    NoAnswers,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAnswers => write!(f, "Answer list is empty, no target word can be drawn"),
        }
    }
}

impl std::error::Error for WordListError {}

/// Answer pool plus accepted-guess vocabulary
#[derive(Debug)]
pub struct WordList {
    answers: Vec<Word>,
    vocabulary: FxHashSet<String>,
}

impl WordList {
    /// Build a word list from an answer pool and extra allowed guesses
    ///
    /// Every answer is a valid guess; `allowed_extra` widens the vocabulary
    /// with words that can never be the target.
    ///
    /// # Errors
    /// Returns `WordListError::NoAnswers` if `answers` is empty.
    pub fn new(answers: Vec<Word>, allowed_extra: &[Word]) -> Result<Self, WordListError> {
        if answers.is_empty() {
            return Err(WordListError::NoAnswers);
        }

        let vocabulary = answers
            .iter()
            .chain(allowed_extra)
            .map(|w| w.text().to_string())
            .collect();

        Ok(Self {
            answers,
            vocabulary,
        })
    }

    /// The embedded lists compiled into the binary
    ///
    /// # Panics
    /// Will not panic - the embedded answer list is generated non-empty at
    /// build time.
    #[must_use]
    pub fn embedded() -> Self {
        use super::loader::words_from_slice;
        use super::{ALLOWED_EXTRA, ANSWERS};

        Self::new(words_from_slice(ANSWERS), &words_from_slice(ALLOWED_EXTRA))
            .expect("embedded answer list is non-empty")
    }

    /// Words the target can be drawn from
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Size of the accepted vocabulary
    #[must_use]
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

impl WordSource for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }

    fn choose_target(&self) -> Word {
        self.answers
            .choose(&mut rand::rng())
            .cloned()
            .expect("answer list is non-empty by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn small_list() -> WordList {
        let answers = words_from_slice(&["alert", "slate"]);
        let extra = words_from_slice(&["tiger"]);
        WordList::new(answers, &extra).unwrap()
    }

    #[test]
    fn empty_answers_rejected() {
        let extra = words_from_slice(&["tiger"]);
        assert_eq!(
            WordList::new(Vec::new(), &extra).unwrap_err(),
            WordListError::NoAnswers
        );
    }

    #[test]
    fn vocabulary_is_union_of_answers_and_extra() {
        let list = small_list();

        assert!(list.is_valid_word("alert"));
        assert!(list.is_valid_word("slate"));
        assert!(list.is_valid_word("tiger")); // Guessable, never a target
        assert!(!list.is_valid_word("crane"));
        assert_eq!(list.vocabulary_len(), 3);
    }

    #[test]
    fn target_always_drawn_from_answers() {
        let list = small_list();

        for _ in 0..50 {
            let target = list.choose_target();
            assert!(
                list.answers().contains(&target),
                "target {target} outside the answer pool"
            );
            assert_ne!(target.text(), "tiger");
        }
    }

    #[test]
    fn embedded_lists_build_a_source() {
        let list = WordList::embedded();

        assert!(!list.answers().is_empty());
        assert!(list.vocabulary_len() >= list.answers().len());
        assert!(list.is_valid_word("alert"));
    }
}
