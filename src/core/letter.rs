//! Guessable letter representation
//!
//! A Letter is a single uppercase ASCII character in `A..=Z`.

use std::fmt;
use std::str::FromStr;

/// A single guessable letter, always stored uppercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for input that is not exactly one letter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterError {
    NotALetter(char),
    NotSingleLetter(String),
}

impl fmt::Display for LetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotALetter(c) => write!(f, "'{c}' is not a letter from A to Z"),
            Self::NotSingleLetter(input) if input.is_empty() => {
                write!(f, "Expected a single letter, got nothing")
            }
            Self::NotSingleLetter(input) => {
                write!(f, "Expected a single letter, got \"{input}\"")
            }
        }
    }
}

impl std::error::Error for LetterError {}

impl Letter {
    /// The full 26-letter alphabet in order
    pub const ALPHABET: [Self; 26] = {
        let mut letters = [Self(b'A'); 26];
        let mut i = 0;
        while i < 26 {
            letters[i] = Self(b'A' + i as u8);
            i += 1;
        }
        letters
    };

    /// Create a letter from a character, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `LetterError::NotALetter` if `c` is not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use petal_guess::core::Letter;
    ///
    /// let letter = Letter::new('c').unwrap();
    /// assert_eq!(letter.as_char(), 'C');
    ///
    /// assert!(Letter::new('3').is_err());
    /// ```
    pub fn new(c: char) -> Result<Self, LetterError> {
        if c.is_ascii_alphabetic() {
            Ok(Self(c.to_ascii_uppercase() as u8))
        } else {
            Err(LetterError::NotALetter(c))
        }
    }

    /// Parse user input that must contain exactly one letter
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `LetterError::NotSingleLetter` for empty or multi-character input,
    /// and `LetterError::NotALetter` for a single non-letter character.
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(LetterError::NotSingleLetter(trimmed.to_string())),
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Position in the alphabet (A = 0, Z = 25)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<char> for Letter {
    type Error = LetterError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Self::new(c)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
