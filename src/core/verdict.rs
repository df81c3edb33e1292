//! Guess evaluation
//!
//! Comparing a submitted word to the target produces one `LetterVerdict` per
//! position, bundled into an immutable `AttemptRow`. Matching is deliberately
//! membership-based: `present` asks "does the target contain this letter at
//! all", with no per-letter count accounting. A guess with a repeated letter
//! that occurs once in the target therefore marks every occurrence present.
//! This mirrors the classic behavior this game reproduces.

use super::{WORD_LENGTH, Word};

/// Verdict for a single letter position of an attempt
///
/// A `None` letter marks a placeholder slot in a not-yet-played row; real
/// submissions always carry a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterVerdict {
    /// Zero-based position within the word
    pub index: usize,
    /// The submitted letter, or `None` for a placeholder slot
    pub letter: Option<char>,
    /// Letter equals the target's letter at this position
    pub exact: bool,
    /// Letter occurs anywhere in the target
    pub present: bool,
}

impl LetterVerdict {
    /// A placeholder verdict for an unplayed slot
    #[must_use]
    pub const fn blank(index: usize) -> Self {
        Self {
            index,
            letter: None,
            exact: false,
            present: false,
        }
    }

    /// Whether this slot is an unfilled placeholder
    #[inline]
    #[must_use]
    pub const fn is_blank(&self) -> bool {
        self.letter.is_none()
    }
}

/// One evaluated attempt: an ordered row of letter verdicts
///
/// Produced atomically by [`AttemptRow::evaluate`] and never mutated after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptRow([LetterVerdict; WORD_LENGTH]);

impl AttemptRow {
    /// A row of all-blank verdicts, used for unplayed history slots
    #[must_use]
    pub const fn blank() -> Self {
        let mut slots = [LetterVerdict::blank(0); WORD_LENGTH];
        let mut i = 0;
        while i < WORD_LENGTH {
            slots[i] = LetterVerdict::blank(i);
            i += 1;
        }
        Self(slots)
    }

    /// Evaluate `submission` against `target`
    ///
    /// For each index i: `exact` iff the letters coincide at i, `present` iff
    /// the target contains the letter anywhere. Deterministic, no side effects.
    /// Length agreement is guaranteed by the [`Word`] type.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{AttemptRow, Word};
    ///
    /// let target = Word::new("alert").unwrap();
    /// let row = AttemptRow::evaluate(&Word::new("alter").unwrap(), &target);
    ///
    /// assert!(row.verdicts()[0].exact); // a
    /// assert!(row.verdicts()[1].exact); // l
    /// assert!(!row.verdicts()[2].exact && row.verdicts()[2].present); // t
    /// ```
    #[must_use]
    pub fn evaluate(submission: &Word, target: &Word) -> Self {
        let mut slots = [LetterVerdict::blank(0); WORD_LENGTH];

        for (i, slot) in slots.iter_mut().enumerate() {
            let letter = submission.char_at(i);
            *slot = LetterVerdict {
                index: i,
                letter: Some(letter as char),
                exact: target.char_at(i) == letter,
                present: target.has_letter(letter),
            };
        }

        Self(slots)
    }

    /// The verdicts in position order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[LetterVerdict; WORD_LENGTH] {
        &self.0
    }

    /// Whether every position is an exact match (a winning attempt)
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.0.iter().all(|v| v.exact)
    }

    /// Whether this row is an unplayed placeholder
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(LetterVerdict::is_blank)
    }

    /// Iterate over the verdicts
    pub fn iter(&self) -> std::slice::Iter<'_, LetterVerdict> {
        self.0.iter()
    }
}

impl Default for AttemptRow {
    fn default() -> Self {
        Self::blank()
    }
}

impl<'a> IntoIterator for &'a AttemptRow {
    type Item = &'a LetterVerdict;
    type IntoIter = std::slice::Iter<'a, LetterVerdict>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn blank_row_is_blank() {
        let row = AttemptRow::blank();
        assert!(row.is_blank());
        assert!(!row.is_winning());

        for (i, verdict) in row.iter().enumerate() {
            assert_eq!(verdict.index, i);
            assert_eq!(verdict.letter, None);
            assert!(!verdict.exact);
            assert!(!verdict.present);
        }
    }

    #[test]
    fn evaluate_word_against_itself_all_exact() {
        for text in ["alert", "slate", "speed", "aaaaa"] {
            let w = word(text);
            let row = AttemptRow::evaluate(&w, &w);

            assert!(row.is_winning(), "{text} vs itself should win");
            assert!(row.iter().all(|v| v.present));
            assert!(!row.is_blank());
        }
    }

    #[test]
    fn evaluate_is_deterministic() {
        let guess = word("crane");
        let target = word("slate");

        let first = AttemptRow::evaluate(&guess, &target);
        let second = AttemptRow::evaluate(&guess, &target);
        assert_eq!(first, second);
    }

    #[test]
    fn evaluate_no_letters_shared() {
        let row = AttemptRow::evaluate(&word("pound"), &word("crime"));

        for verdict in &row {
            assert!(!verdict.exact);
            assert!(!verdict.present);
        }
    }

    #[test]
    fn evaluate_tiger_against_alert() {
        // T, E, R are in the word but misplaced; I and G miss entirely
        let row = AttemptRow::evaluate(&word("tiger"), &word("alert"));
        let v = row.verdicts();

        assert_eq!(v[0].letter, Some('t'));
        assert!(!v[0].exact && v[0].present); // t
        assert!(!v[1].exact && !v[1].present); // i
        assert!(!v[2].exact && !v[2].present); // g
        assert!(!v[3].exact && v[3].present); // e
        assert!(!v[4].exact && v[4].present); // r
        assert!(!row.is_winning());
    }

    #[test]
    fn evaluate_alter_against_alert() {
        // A and L land exactly; T, E, R are present but swapped around
        let row = AttemptRow::evaluate(&word("alter"), &word("alert"));
        let v = row.verdicts();

        assert!(v[0].exact); // a
        assert!(v[1].exact); // l
        assert!(!v[2].exact && v[2].present); // t
        assert!(!v[3].exact && v[3].present); // e
        assert!(!v[4].exact && v[4].present); // r
        assert!(!row.is_winning());
    }

    #[test]
    fn evaluate_exact_implies_present() {
        let row = AttemptRow::evaluate(&word("alter"), &word("alert"));
        for verdict in &row {
            if verdict.exact {
                assert!(verdict.present);
            }
        }
    }

    #[test]
    fn evaluate_repeated_guess_letter_marks_all_present() {
        // GEESE has three E's; ALERT has one. Membership matching flags
        // every E as present.
        let row = AttemptRow::evaluate(&word("geese"), &word("alert"));
        let v = row.verdicts();

        assert!(!v[1].exact && v[1].present); // e
        assert!(!v[2].exact && v[2].present); // e
        assert!(!v[4].exact && v[4].present); // e
        assert!(!v[0].present); // g
        assert!(!v[3].present); // s
    }

    #[test]
    fn evaluate_indices_are_positional() {
        let row = AttemptRow::evaluate(&word("slate"), &word("alert"));
        for (i, verdict) in row.iter().enumerate() {
            assert_eq!(verdict.index, i);
        }
    }
}
