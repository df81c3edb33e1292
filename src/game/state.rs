//! Observable game state
//!
//! A single tagged status replaces independently settable won/exhausted
//! flags; the two boolean views are projections of the tag and cannot
//! desynchronize.

use crate::core::{AttemptRow, MAX_ATTEMPTS};

/// Progression tag for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Attempts remain and the target has not been guessed
    Active,
    /// A submitted row matched the target exactly (terminal)
    Won,
    /// All attempts were consumed without a win (terminal)
    Exhausted,
}

impl Status {
    /// Whether no further attempts are accepted
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Exhausted)
    }
}

/// The single source of truth the controller exposes to presentation layers
///
/// Mutated only through [`Game`](crate::game::Game) operations; callers must
/// treat it as a read-only snapshot.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(super) attempt_index: usize,
    pub(super) history: [AttemptRow; MAX_ATTEMPTS],
    pub(super) status: Status,
    pub(super) transient_error: Option<String>,
}

impl GameState {
    /// Fresh state: no attempts consumed, all history slots blank
    #[must_use]
    pub(super) fn new() -> Self {
        Self {
            attempt_index: 0,
            history: [AttemptRow::blank(); MAX_ATTEMPTS],
            status: Status::Active,
            transient_error: None,
        }
    }

    /// Number of attempts consumed so far (0 ..= `MAX_ATTEMPTS`)
    #[inline]
    #[must_use]
    pub const fn attempt_index(&self) -> usize {
        self.attempt_index
    }

    /// All attempt rows; slots at or beyond `attempt_index` are blank
    #[inline]
    #[must_use]
    pub const fn history(&self) -> &[AttemptRow; MAX_ATTEMPTS] {
        &self.history
    }

    /// The progression tag
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Whether the target was guessed
    #[inline]
    #[must_use]
    pub const fn won(&self) -> bool {
        matches!(self.status, Status::Won)
    }

    /// Whether every attempt was spent without a win
    #[inline]
    #[must_use]
    pub const fn exhausted(&self) -> bool {
        matches!(self.status, Status::Exhausted)
    }

    /// Message describing the most recently rejected submission, if any
    #[inline]
    #[must_use]
    pub fn transient_error(&self) -> Option<&str> {
        self.transient_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_pristine() {
        let state = GameState::new();

        assert_eq!(state.attempt_index(), 0);
        assert_eq!(state.status(), Status::Active);
        assert!(!state.won());
        assert!(!state.exhausted());
        assert_eq!(state.transient_error(), None);
        assert!(state.history().iter().all(AttemptRow::is_blank));
    }

    #[test]
    fn terminal_statuses() {
        assert!(!Status::Active.is_terminal());
        assert!(Status::Won.is_terminal());
        assert!(Status::Exhausted.is_terminal());
    }

    #[test]
    fn projections_follow_the_tag() {
        let mut state = GameState::new();

        state.status = Status::Won;
        assert!(state.won());
        assert!(!state.exhausted());

        state.status = Status::Exhausted;
        assert!(!state.won());
        assert!(state.exhausted());
    }
}
