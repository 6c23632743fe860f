//! Fixed in-memory vocabulary of target words

use super::loader::{load_from_file, words_from_slice};
use super::{CLASSIC, EXTENDED};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// A non-empty, duplicate-free list of target words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
}

/// Error type for vocabularies that cannot be used
#[derive(Debug)]
pub enum VocabularyError {
    /// No valid words were found
    Empty,
    /// The word list file could not be read
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Vocabulary contains no valid words"),
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for VocabularyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl Vocabulary {
    /// Build a vocabulary, dropping repeated words while keeping first-seen order
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, VocabularyError> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut unique: Vec<Word> = Vec::with_capacity(words.len());
        for word in words {
            if seen.insert(word.text().to_string()) {
                unique.push(word);
            }
        }

        if unique.is_empty() {
            return Err(VocabularyError::Empty);
        }

        Ok(Self { words: unique })
    }

    /// Build a vocabulary from string slices, skipping invalid entries
    ///
    /// # Errors
    /// Returns `VocabularyError::Empty` if no entry is a valid word.
    pub fn from_slice(slice: &[&str]) -> Result<Self, VocabularyError> {
        Self::new(words_from_slice(slice))
    }

    /// Resolve a vocabulary by name
    ///
    /// - `"classic"`: the embedded 9-word list
    /// - `"extended"`: the embedded 11-word list
    /// - anything else: path to a newline-separated word file
    ///
    /// # Errors
    /// Returns `VocabularyError::Io` if the file cannot be read and
    /// `VocabularyError::Empty` if it contains no valid words.
    pub fn resolve(name: &str) -> Result<Self, VocabularyError> {
        match name {
            "classic" => Self::from_slice(CLASSIC),
            "extended" => Self::from_slice(EXTENDED),
            path => {
                let words = load_from_file(path).map_err(|source| VocabularyError::Io {
                    path: PathBuf::from(path),
                    source,
                })?;
                Self::new(words)
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed Vocabulary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}
