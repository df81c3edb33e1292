//! The game controller
//!
//! Holds one game's hidden target and state, consumes validated words, and
//! runs the evaluator on each successful submission. Rejected submissions
//! never consume an attempt; they only set the transient error message.

use super::source::WordSource;
use super::state::{GameState, Status};
use crate::core::{AttemptRow, MAX_ATTEMPTS, WORD_LENGTH, Word};

/// One game of guess-the-word
///
/// The target word is private for the duration of the game; it leaks to
/// callers only through verdicts and through [`Game::revealed_answer`] once
/// the game is lost.
pub struct Game<S: WordSource> {
    source: S,
    target: Word,
    state: GameState,
}

impl<S: WordSource> Game<S> {
    /// Start a new game, drawing a target from `source`
    pub fn new(source: S) -> Self {
        let target = source.choose_target();
        Self {
            source,
            target,
            state: GameState::new(),
        }
    }

    /// The observable state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// The target word, revealed only once the game is lost
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Word> {
        if self.state.exhausted() {
            Some(&self.target)
        } else {
            None
        }
    }

    /// Submit a guess
    ///
    /// A no-op in terminal states, leaving every field untouched. Input is
    /// trimmed and lowercased before validation. A wrong-length or
    /// non-vocabulary guess sets the transient error and consumes nothing.
    /// A valid guess fills the next history slot, clears the error, and then
    /// checks for a win before checking for exhaustion, so winning on the
    /// final attempt yields `Won`.
    pub fn submit_guess(&mut self, raw: &str) {
        if self.state.status.is_terminal() {
            return;
        }

        let guess = raw.trim().to_lowercase();

        let Ok(word) = Word::new(&guess) else {
            self.state.transient_error = Some(if guess.chars().count() == WORD_LENGTH {
                format!("\"{}\" is not a valid word!", guess.to_uppercase())
            } else {
                format!("Guess must be {WORD_LENGTH} letters")
            });
            return;
        };

        if !self.source.is_valid_word(word.text()) {
            self.state.transient_error =
                Some(format!("\"{}\" is not a valid word!", word.text().to_uppercase()));
            return;
        }

        let row = AttemptRow::evaluate(&word, &self.target);
        self.state.history[self.state.attempt_index] = row;
        self.state.attempt_index += 1;
        self.state.transient_error = None;

        // Win is checked before exhaustion: a correct sixth guess still wins
        if row.is_winning() {
            self.state.status = Status::Won;
        } else if self.state.attempt_index == MAX_ATTEMPTS {
            self.state.status = Status::Exhausted;
        }
    }

    /// Clear the transient error
    ///
    /// Idempotent and valid in any state; intended for timer-driven callers
    /// dismissing the message after a display delay.
    pub fn clear_error(&mut self) {
        self.state.transient_error = None;
    }

    /// Discard the current game and start a fresh one with a newly drawn target
    pub fn reset(&mut self) {
        self.target = self.source.choose_target();
        self.state = GameState::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic word source for controller tests
    struct FixedSource {
        target: &'static str,
        vocabulary: &'static [&'static str],
    }

    impl WordSource for FixedSource {
        fn is_valid_word(&self, word: &str) -> bool {
            self.vocabulary.contains(&word)
        }

        fn choose_target(&self) -> Word {
            Word::new(self.target).unwrap()
        }
    }

    fn alert_game() -> Game<FixedSource> {
        Game::new(FixedSource {
            target: "alert",
            vocabulary: &["alert", "alter", "tiger", "slate", "crane", "pound", "geese"],
        })
    }

    #[test]
    fn fresh_game_is_active() {
        let game = alert_game();
        let state = game.state();

        assert_eq!(state.status(), Status::Active);
        assert_eq!(state.attempt_index(), 0);
        assert!(state.history().iter().all(AttemptRow::is_blank));
        assert_eq!(state.transient_error(), None);
        assert_eq!(game.revealed_answer(), None);
    }

    #[test]
    fn valid_guess_fills_one_slot() {
        let mut game = alert_game();
        game.submit_guess("tiger");

        let state = game.state();
        assert_eq!(state.attempt_index(), 1);
        assert!(!state.history()[0].is_blank());
        assert!(state.history()[1..].iter().all(AttemptRow::is_blank));
        assert_eq!(state.status(), Status::Active);
    }

    #[test]
    fn guess_is_normalized_before_validation() {
        let mut game = alert_game();
        game.submit_guess("  TIGER ");

        assert_eq!(game.state().attempt_index(), 1);
        assert_eq!(game.state().transient_error(), None);
    }

    #[test]
    fn wrong_length_sets_error_without_consuming_attempt() {
        let mut game = alert_game();
        game.submit_guess("word");

        let state = game.state();
        assert_eq!(state.attempt_index(), 0);
        assert!(state.history().iter().all(AttemptRow::is_blank));
        assert_eq!(state.transient_error(), Some("Guess must be 5 letters"));
        assert_eq!(state.status(), Status::Active);
    }

    #[test]
    fn unknown_word_sets_error_without_consuming_attempt() {
        let mut game = alert_game();
        game.submit_guess("zzzzz");

        let state = game.state();
        assert_eq!(state.attempt_index(), 0);
        assert_eq!(
            state.transient_error(),
            Some("\"ZZZZZ\" is not a valid word!")
        );
    }

    #[test]
    fn successful_guess_clears_previous_error() {
        let mut game = alert_game();
        game.submit_guess("zzzzz");
        assert!(game.state().transient_error().is_some());

        game.submit_guess("tiger");
        assert_eq!(game.state().transient_error(), None);
    }

    #[test]
    fn clear_error_is_idempotent() {
        let mut game = alert_game();
        game.clear_error(); // Nothing set: still fine
        assert_eq!(game.state().transient_error(), None);

        game.submit_guess("wordy"); // Not in vocabulary
        assert!(game.state().transient_error().is_some());

        game.clear_error();
        assert_eq!(game.state().transient_error(), None);
        game.clear_error();
        assert_eq!(game.state().transient_error(), None);
    }

    #[test]
    fn winning_guess_transitions_to_won() {
        let mut game = alert_game();
        game.submit_guess("alert");

        let state = game.state();
        assert_eq!(state.status(), Status::Won);
        assert!(state.won());
        assert!(!state.exhausted());
        assert!(state.history()[0].is_winning());
        // Winners already know the answer; no reveal
        assert_eq!(game.revealed_answer(), None);
    }

    #[test]
    fn six_wrong_guesses_exhaust_the_game() {
        let mut game = alert_game();
        for _ in 0..MAX_ATTEMPTS {
            game.submit_guess("tiger");
        }

        let state = game.state();
        assert_eq!(state.attempt_index(), MAX_ATTEMPTS);
        assert_eq!(state.status(), Status::Exhausted);
        assert!(state.exhausted());
        assert!(!state.won());
        assert_eq!(game.revealed_answer().map(Word::text), Some("alert"));
    }

    #[test]
    fn win_on_final_attempt_beats_exhaustion() {
        let mut game = alert_game();
        for _ in 0..MAX_ATTEMPTS - 1 {
            game.submit_guess("tiger");
        }
        assert_eq!(game.state().status(), Status::Active);

        game.submit_guess("alert");

        let state = game.state();
        assert_eq!(state.attempt_index(), MAX_ATTEMPTS);
        assert_eq!(state.status(), Status::Won);
        assert!(!state.exhausted());
    }

    #[test]
    fn submissions_after_win_are_no_ops() {
        let mut game = alert_game();
        game.submit_guess("alert");
        let before = game.state().clone();

        game.submit_guess("tiger");
        game.submit_guess("zzzzz"); // Even an invalid word must not set the error

        let after = game.state();
        assert_eq!(after.attempt_index(), before.attempt_index());
        assert_eq!(after.status(), before.status());
        assert_eq!(after.transient_error(), before.transient_error());
        assert_eq!(after.history(), before.history());
    }

    #[test]
    fn submissions_after_exhaustion_are_no_ops() {
        let mut game = alert_game();
        for _ in 0..MAX_ATTEMPTS {
            game.submit_guess("tiger");
        }
        let before = game.state().clone();

        game.submit_guess("alert"); // Too late, even for the right answer

        let after = game.state();
        assert_eq!(after.status(), Status::Exhausted);
        assert_eq!(after.attempt_index(), before.attempt_index());
        assert_eq!(after.history(), before.history());
    }

    #[test]
    fn reset_yields_a_pristine_game() {
        let mut game = alert_game();
        game.submit_guess("tiger");
        game.submit_guess("wordy");
        game.reset();

        let state = game.state();
        assert_eq!(state.attempt_index(), 0);
        assert_eq!(state.status(), Status::Active);
        assert!(state.history().iter().all(AttemptRow::is_blank));
        assert_eq!(state.transient_error(), None);

        // The new game plays normally
        game.submit_guess("alert");
        assert!(game.state().won());
    }

    #[test]
    fn recorded_row_matches_direct_evaluation() {
        let mut game = alert_game();
        game.submit_guess("alter");

        let expected = AttemptRow::evaluate(
            &Word::new("alter").unwrap(),
            &Word::new("alert").unwrap(),
        );
        assert_eq!(game.state().history()[0], expected);
    }
}
