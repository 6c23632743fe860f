//! Round outcome evaluation

use super::GuessedLetters;
use crate::core::Word;
use std::fmt;

/// Status of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// Won or Lost
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    #[inline]
    #[must_use]
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }

    #[inline]
    #[must_use]
    pub const fn is_lost(self) -> bool {
        matches!(self, Self::Lost)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "in progress"),
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}

/// Derive the round status from the guesses made so far
///
/// Won is checked before Lost, so a guess that both completes the word and
/// reaches the limit counts as a win.
///
/// # Examples
/// ```
/// use petal_guess::core::{Letter, Word};
/// use petal_guess::game::{GuessedLetters, Status, evaluate};
///
/// let word = Word::new("cat").unwrap();
/// let mut guessed = GuessedLetters::new();
/// assert_eq!(evaluate(&word, &guessed, 0, 8), Status::InProgress);
///
/// for c in ['c', 'a', 't'] {
///     guessed.insert(Letter::new(c).unwrap());
/// }
/// assert_eq!(evaluate(&word, &guessed, 0, 8), Status::Won);
/// ```
#[must_use]
pub fn evaluate(word: &Word, guessed: &GuessedLetters, wrong_guesses: u8, max: u8) -> Status {
    if word.distinct_letters().all(|letter| guessed.contains(letter)) {
        Status::Won
    } else if wrong_guesses >= max {
        Status::Lost
    } else {
        Status::InProgress
    }
}
