//! Letter selection strategies
//!
//! Defines the Guesser trait and concrete implementations.

use crate::core::Letter;
use crate::game::GuessedLetters;
use clap::ValueEnum;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use std::fmt;

/// English letters from most to least common
pub const FREQUENCY_ORDER: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// A strategy for picking the next letter to guess
pub trait Guesser {
    /// Pick a letter that has not been guessed yet
    ///
    /// Returns `None` once every letter of the alphabet has been guessed.
    fn next_letter(&mut self, guessed: &GuessedLetters) -> Option<Letter>;
}

/// Guesser selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum GuesserKind {
    /// Most common English letters first
    #[default]
    Frequency,
    /// Uniformly random unguessed letter
    Random,
}

impl fmt::Display for GuesserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency => write!(f, "frequency"),
            Self::Random => write!(f, "random"),
        }
    }
}

/// Enum wrapper for all guesser types
///
/// Allows runtime selection of guesser while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum GuesserType {
    /// Most common English letters first (default)
    Frequency(FrequencyGuesser),
    /// Uniformly random unguessed letter
    Random(RandomGuesser),
}

impl Guesser for GuesserType {
    fn next_letter(&mut self, guessed: &GuessedLetters) -> Option<Letter> {
        match self {
            Self::Frequency(g) => g.next_letter(guessed),
            Self::Random(g) => g.next_letter(guessed),
        }
    }
}

impl GuesserType {
    /// Create a guesser of the given kind
    ///
    /// `seed` only affects the random guesser.
    #[must_use]
    pub fn new(kind: GuesserKind, seed: Option<u64>) -> Self {
        match kind {
            GuesserKind::Frequency => Self::Frequency(FrequencyGuesser),
            GuesserKind::Random => Self::Random(RandomGuesser::with_seed(seed)),
        }
    }
}

/// Guesses letters in English frequency order
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_letter(&mut self, guessed: &GuessedLetters) -> Option<Letter> {
        FREQUENCY_ORDER
            .chars()
            .filter_map(|c| Letter::new(c).ok())
            .find(|&letter| !guessed.contains(letter))
    }
}

/// Guesses a uniformly random letter not yet guessed
#[derive(Debug, Clone)]
pub struct RandomGuesser {
    rng: StdRng,
}

impl RandomGuesser {
    #[must_use]
    pub fn with_seed(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { rng }
    }
}

impl Guesser for RandomGuesser {
    fn next_letter(&mut self, guessed: &GuessedLetters) -> Option<Letter> {
        let unguessed: Vec<Letter> = Letter::ALPHABET
            .iter()
            .copied()
            .filter(|&letter| !guessed.contains(letter))
            .collect();

        unguessed.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_starts_with_e() {
        let mut guesser = FrequencyGuesser;
        let letter = guesser.next_letter(&GuessedLetters::new()).unwrap();
        assert_eq!(letter.as_char(), 'E');
    }

    #[test]
    fn frequency_skips_guessed() {
        let mut guessed = GuessedLetters::new();
        guessed.insert(Letter::new('e').unwrap());
        guessed.insert(Letter::new('t').unwrap());

        let mut guesser = FrequencyGuesser;
        assert_eq!(guesser.next_letter(&guessed).unwrap().as_char(), 'A');
    }

    #[test]
    fn frequency_order_covers_alphabet() {
        let mut letters: Vec<char> = FREQUENCY_ORDER.chars().collect();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 26);
    }

    #[test]
    fn random_never_repeats_and_exhausts() {
        let mut guesser = RandomGuesser::with_seed(Some(5));
        let mut guessed = GuessedLetters::new();

        for _ in 0..26 {
            let letter = guesser.next_letter(&guessed).unwrap();
            assert!(guessed.insert(letter), "{letter} picked twice");
        }
        assert!(guesser.next_letter(&guessed).is_none());
    }

    #[test]
    fn kind_selects_guesser() {
        assert!(matches!(
            GuesserType::new(GuesserKind::Frequency, None),
            GuesserType::Frequency(_)
        ));
        assert!(matches!(
            GuesserType::new(GuesserKind::Random, Some(1)),
            GuesserType::Random(_)
        ));
    }

    #[test]
    fn kind_parses_known_names_only() {
        assert_eq!(
            GuesserKind::from_str("random", true),
            Ok(GuesserKind::Random)
        );
        assert_eq!(
            GuesserKind::from_str("FREQUENCY", true),
            Ok(GuesserKind::Frequency)
        );
        assert!(GuesserKind::from_str("frequncy", true).is_err());
        assert_eq!(GuesserKind::Random.to_string(), "random");
    }
}
