//! Letter-guess bookkeeping for one round

use crate::core::{Letter, Word};

/// Result of recording a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word
    Hit,
    /// The letter is not in the word; one petal falls
    Miss,
    /// The letter was guessed before; nothing changed
    AlreadyGuessed,
}

/// Set of guessed letters that also remembers guess order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    order: Vec<Letter>,
    // Bit i set when Letter::ALPHABET[i] has been guessed
    mask: u32,
}

impl GuessedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a letter, returning false if it was already present
    pub fn insert(&mut self, letter: Letter) -> bool {
        let bit = 1u32 << letter.index();
        if self.mask & bit != 0 {
            return false;
        }
        self.mask |= bit;
        self.order.push(letter);
        true
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, letter: Letter) -> bool {
        self.mask & (1u32 << letter.index()) != 0
    }

    /// Guessed letters in the order they were guessed
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        self.order.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Letter] {
        &self.order
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.mask = 0;
    }
}

/// Records guesses against a target word
///
/// The wrong-guess count always equals the number of distinct guessed letters
/// missing from the word the guesses were checked against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessTracker {
    guessed: GuessedLetters,
    wrong: u8,
}

impl GuessTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a guess of `letter` against `word`
    ///
    /// A repeated letter is a no-op, whatever the state of the round.
    ///
    /// # Examples
    /// ```
    /// use petal_guess::core::{Letter, Word};
    /// use petal_guess::game::{GuessOutcome, GuessTracker};
    ///
    /// let word = Word::new("cat").unwrap();
    /// let mut tracker = GuessTracker::new();
    ///
    /// let x = Letter::new('x').unwrap();
    /// assert_eq!(tracker.guess(x, &word), GuessOutcome::Miss);
    /// assert_eq!(tracker.guess(x, &word), GuessOutcome::AlreadyGuessed);
    /// assert_eq!(tracker.wrong_guesses(), 1);
    /// ```
    pub fn guess(&mut self, letter: Letter, word: &Word) -> GuessOutcome {
        if !self.guessed.insert(letter) {
            return GuessOutcome::AlreadyGuessed;
        }

        if word.contains(letter) {
            GuessOutcome::Hit
        } else {
            self.wrong = self.wrong.saturating_add(1);
            GuessOutcome::Miss
        }
    }

    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u8 {
        self.wrong
    }

    pub fn reset(&mut self) {
        self.guessed.clear();
        self.wrong = 0;
    }
}
