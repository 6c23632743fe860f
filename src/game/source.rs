//! Random target word selection

use crate::core::Word;
use crate::wordlists::Vocabulary;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws target words uniformly at random from a fixed vocabulary
///
/// Owns its random generator so seeded sources replay the same words.
#[derive(Debug, Clone)]
pub struct WordSource<'a> {
    vocabulary: &'a Vocabulary,
    rng: StdRng,
}

impl<'a> WordSource<'a> {
    /// Create a source seeded from the operating system
    #[must_use]
    pub fn new(vocabulary: &'a Vocabulary) -> Self {
        Self {
            vocabulary,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a reproducible source
    #[must_use]
    pub fn seeded(vocabulary: &'a Vocabulary, seed: u64) -> Self {
        Self {
            vocabulary,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, OS-seeded otherwise
    #[must_use]
    pub fn with_seed(vocabulary: &'a Vocabulary, seed: Option<u64>) -> Self {
        seed.map_or_else(|| Self::new(vocabulary), |s| Self::seeded(vocabulary, s))
    }

    /// Pick the next target word
    ///
    /// # Examples
    /// ```
    /// use petal_guess::game::WordSource;
    /// use petal_guess::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_slice(&["cat"]).unwrap();
    /// let mut source = WordSource::new(&vocab);
    /// assert_eq!(source.pick_word().text(), "CAT");
    /// ```
    pub fn pick_word(&mut self) -> Word {
        // Vocabulary is non-empty by construction
        let index = self.rng.random_range(0..self.vocabulary.len());
        self.vocabulary.words()[index].clone()
    }
}
