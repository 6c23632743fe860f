//! Target word representation
//!
//! A Word stores an uppercase target word along with its set of distinct letters.

use super::Letter;
use rustc_hash::FxHashSet;
use std::fmt;

/// A target word: one or more letters, stored uppercase
///
/// Keeps the letters in order for display and a set of distinct letters for
/// fast membership checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<Letter>,
    distinct: FxHashSet<Letter>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacter(c) => write!(f, "Word contains invalid character '{c}'"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and letters are normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use petal_guess::core::Word;
    ///
    /// let word = Word::new("garden").unwrap();
    /// assert_eq!(word.text(), "GARDEN");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("tr33").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            return Err(WordError::Empty);
        }

        let letters = trimmed
            .chars()
            .map(|c| Letter::new(c).map_err(|_| WordError::InvalidCharacter(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let distinct = letters.iter().copied().collect();
        let text = letters.iter().map(|l| l.as_char()).collect();

        Ok(Self {
            text,
            letters,
            distinct,
        })
    }

    /// Get the word as an uppercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters of the word in order, duplicates included
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.distinct.contains(&letter)
    }

    /// Iterate over the distinct letters of the word, in no particular order
    pub fn distinct_letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.distinct.iter().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed Word
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
