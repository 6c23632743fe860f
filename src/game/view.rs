//! Display state derived from a session
//!
//! Nothing here holds rendering handles: petals, the masked word and the
//! keyboard are plain values computed from the tracker state.

use super::{GuessedLetters, Status};
use crate::core::{Letter, Word};

/// Placeholder shown for letters not yet revealed
pub const HIDDEN: char = '_';

/// One petal of the flower
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Petal {
    Visible,
    Fallen,
}

/// How a keyboard letter should be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    Unused,
    Hit,
    Miss,
}

/// Petal states for a flower with `max` petals
///
/// Petal `i` stays visible while `i >= wrong_guesses`, so the number of
/// visible petals equals the remaining wrong guesses.
///
/// # Examples
/// ```
/// use petal_guess::game::{Petal, view::petals};
///
/// let flower = petals(3, 8);
/// assert_eq!(flower.len(), 8);
/// assert_eq!(flower[2], Petal::Fallen);
/// assert_eq!(flower[3], Petal::Visible);
/// ```
#[must_use]
pub fn petals(wrong_guesses: u8, max: u8) -> Vec<Petal> {
    (0..max)
        .map(|i| {
            if i >= wrong_guesses {
                Petal::Visible
            } else {
                Petal::Fallen
            }
        })
        .collect()
}

/// Reveal guessed letters, hide the rest, separated by single spaces
///
/// # Examples
/// ```
/// use petal_guess::core::{Letter, Word};
/// use petal_guess::game::{GuessedLetters, view::mask};
///
/// let word = Word::new("cat").unwrap();
/// let mut guessed = GuessedLetters::new();
/// guessed.insert(Letter::new('t').unwrap());
/// assert_eq!(mask(&word, &guessed), "_ _ T");
/// ```
#[must_use]
pub fn mask(word: &Word, guessed: &GuessedLetters) -> String {
    let mut masked = String::with_capacity(word.len() * 2);
    for (i, &letter) in word.letters().iter().enumerate() {
        if i > 0 {
            masked.push(' ');
        }
        masked.push(if guessed.contains(letter) {
            letter.as_char()
        } else {
            HIDDEN
        });
    }
    masked
}

/// State of every alphabet letter, in alphabet order
#[must_use]
pub fn keyboard(word: &Word, guessed: &GuessedLetters) -> [LetterState; 26] {
    Letter::ALPHABET.map(|letter| {
        if !guessed.contains(letter) {
            LetterState::Unused
        } else if word.contains(letter) {
            LetterState::Hit
        } else {
            LetterState::Miss
        }
    })
}

/// Owned view of a session for front ends to redraw from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub masked_word: String,
    pub petals: Vec<Petal>,
    pub keyboard: [LetterState; 26],
    pub guessed: Vec<Letter>,
    pub wrong_guesses: u8,
    pub max_wrong_guesses: u8,
    pub status: Status,
    /// Only revealed once the round is over
    pub answer: Option<String>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn visible_petals(&self) -> usize {
        self.petals.iter().filter(|&&p| p == Petal::Visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guessed(letters: &str) -> GuessedLetters {
        let mut set = GuessedLetters::new();
        for c in letters.chars() {
            set.insert(Letter::new(c).unwrap());
        }
        set
    }

    #[test]
    fn full_flower_before_any_miss() {
        assert!(petals(0, 8).iter().all(|&p| p == Petal::Visible));
    }

    #[test]
    fn petals_fall_in_index_order() {
        let flower = petals(5, 8);
        assert_eq!(&flower[..5], &[Petal::Fallen; 5]);
        assert_eq!(&flower[5..], &[Petal::Visible; 3]);
    }

    #[test]
    fn bare_stem_at_max() {
        assert!(petals(8, 8).iter().all(|&p| p == Petal::Fallen));
    }

    #[test]
    fn mask_hides_unguessed() {
        let word = Word::new("blossom").unwrap();
        assert_eq!(mask(&word, &GuessedLetters::new()), "_ _ _ _ _ _ _");
        assert_eq!(mask(&word, &guessed("sx")), "_ _ _ S S _ _");
        assert_eq!(mask(&word, &guessed("blosm")), "B L O S S O M");
    }

    #[test]
    fn keyboard_marks_hits_and_misses() {
        let word = Word::new("cat").unwrap();
        let keys = keyboard(&word, &guessed("cz"));

        assert_eq!(keys[Letter::new('c').unwrap().index()], LetterState::Hit);
        assert_eq!(keys[Letter::new('z').unwrap().index()], LetterState::Miss);
        assert_eq!(keys[Letter::new('a').unwrap().index()], LetterState::Unused);
        assert_eq!(
            keys.iter().filter(|&&k| k == LetterState::Unused).count(),
            24
        );
    }
}
