//! Game configuration shared by every front end

use crate::game::{Session, SessionError, WordSource};
use crate::wordlists::{Vocabulary, VocabularyError};

/// Settings resolved from the command line
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub vocabulary: Vocabulary,
    pub max_wrong_guesses: u8,
    /// Fixed seed for reproducible word picks
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub const fn new(vocabulary: Vocabulary, max_wrong_guesses: u8, seed: Option<u64>) -> Self {
        Self {
            vocabulary,
            max_wrong_guesses,
            seed,
        }
    }

    /// Resolve the vocabulary by name (see [`Vocabulary::resolve`])
    ///
    /// # Errors
    /// Returns a `VocabularyError` if the vocabulary cannot be loaded or is empty.
    pub fn from_wordlist(
        wordlist: &str,
        max_wrong_guesses: u8,
        seed: Option<u64>,
    ) -> Result<Self, VocabularyError> {
        Ok(Self::new(
            Vocabulary::resolve(wordlist)?,
            max_wrong_guesses,
            seed,
        ))
    }

    /// Word source for the `index`-th independent session
    ///
    /// With a seed, each index gets its own reproducible stream.
    #[must_use]
    pub fn word_source(&self, index: u64) -> WordSource<'_> {
        WordSource::with_seed(&self.vocabulary, self.seed.map(|s| s.wrapping_add(index)))
    }

    /// Start a session using this configuration
    ///
    /// # Errors
    /// Returns `SessionError::ZeroMaxWrongGuesses` if configured with 0.
    pub fn session(&self) -> Result<Session<'_>, SessionError> {
        Session::new(self.word_source(0), self.max_wrong_guesses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{DEFAULT_MAX_WRONG_GUESSES, Status};

    #[test]
    fn classic_with_default_limit() {
        let config = GameConfig::from_wordlist("classic", DEFAULT_MAX_WRONG_GUESSES, None).unwrap();
        assert_eq!(config.vocabulary.len(), 9);
        assert_eq!(config.max_wrong_guesses, 8);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn session_starts_in_progress() {
        let config = GameConfig::from_wordlist("extended", 5, Some(9)).unwrap();
        let session = config.session().unwrap();
        assert_eq!(session.status(), Status::InProgress);
        assert_eq!(session.max_wrong_guesses(), 5);
        assert!(config.vocabulary.contains(session.word()));
    }

    #[test]
    fn seeded_sources_reproducible_per_index() {
        let config = GameConfig::from_wordlist("extended", 8, Some(100)).unwrap();
        let a = config.word_source(4).pick_word();
        let b = config.word_source(4).pick_word();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_max_fails_fast() {
        let config = GameConfig::from_wordlist("classic", 0, None).unwrap();
        assert!(config.session().is_err());
    }
}
