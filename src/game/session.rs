//! Round lifecycle: word selection, guessing, and reset

use super::view::{self, SessionSnapshot};
use super::{GuessOutcome, GuessTracker, GuessedLetters, Status, WordSource, evaluate};
use crate::core::{Letter, LetterError, Word};
use std::fmt;
use tracing::{debug, info};

/// Wrong guesses allowed before the flower is bare
pub const DEFAULT_MAX_WRONG_GUESSES: u8 = 8;

/// Error type for guesses the session refuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Input was not a single letter
    Invalid(LetterError),
    /// The round already ended; start a new game first
    RoundOver(Status),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "{err}"),
            Self::RoundOver(status) => {
                write!(f, "Round is over ({status}), start a new game to keep playing")
            }
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::RoundOver(_) => None,
        }
    }
}

impl From<LetterError> for GuessError {
    fn from(err: LetterError) -> Self {
        Self::Invalid(err)
    }
}

/// Error type for sessions that cannot be started
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    ZeroMaxWrongGuesses,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxWrongGuesses => {
                write!(f, "Maximum wrong guesses must be at least 1")
            }
        }
    }
}

impl std::error::Error for SessionError {}

/// A playing session: the current round plus the word source for the next
///
/// The status is recomputed by [`evaluate`] after every accepted guess and is
/// never set directly.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    source: WordSource<'a>,
    word: Word,
    tracker: GuessTracker,
    max_wrong_guesses: u8,
    status: Status,
}

impl<'a> Session<'a> {
    /// Start the first round
    ///
    /// # Errors
    /// Returns `SessionError::ZeroMaxWrongGuesses` if `max_wrong_guesses` is 0.
    ///
    /// # Examples
    /// ```
    /// use petal_guess::game::{Session, Status, WordSource};
    /// use petal_guess::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_slice(&["cat"]).unwrap();
    /// let mut session = Session::new(WordSource::new(&vocab), 8).unwrap();
    ///
    /// for c in ['c', 'a', 't'] {
    ///     session.guess_char(c).unwrap();
    /// }
    /// assert_eq!(session.status(), Status::Won);
    /// ```
    pub fn new(mut source: WordSource<'a>, max_wrong_guesses: u8) -> Result<Self, SessionError> {
        if max_wrong_guesses == 0 {
            return Err(SessionError::ZeroMaxWrongGuesses);
        }

        let word = source.pick_word();
        info!(length = word.len(), max_wrong_guesses, "round started");

        Ok(Self {
            source,
            word,
            tracker: GuessTracker::new(),
            max_wrong_guesses,
            status: Status::InProgress,
        })
    }

    /// Discard the current round and start another with a fresh word
    pub fn new_game(&mut self) {
        self.word = self.source.pick_word();
        self.tracker.reset();
        self.status = Status::InProgress;
        info!(length = self.word.len(), "round started");
    }

    /// Guess a letter
    ///
    /// # Errors
    /// Returns `GuessError::RoundOver` once the round is won or lost; the
    /// state is left untouched.
    pub fn guess(&mut self, letter: Letter) -> Result<GuessOutcome, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::RoundOver(self.status));
        }

        let outcome = self.tracker.guess(letter, &self.word);
        self.status = evaluate(
            &self.word,
            self.tracker.guessed(),
            self.tracker.wrong_guesses(),
            self.max_wrong_guesses,
        );

        debug!(
            %letter,
            ?outcome,
            wrong = self.tracker.wrong_guesses(),
            status = %self.status,
            "guess recorded"
        );
        if self.status.is_terminal() {
            info!(status = %self.status, word = %self.word, "round finished");
        }

        Ok(outcome)
    }

    /// Guess from a single character
    ///
    /// # Errors
    /// Returns `GuessError::Invalid` for non-letters, otherwise as [`Session::guess`].
    pub fn guess_char(&mut self, c: char) -> Result<GuessOutcome, GuessError> {
        self.guess(Letter::new(c)?)
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn guessed_letters(&self) -> &GuessedLetters {
        self.tracker.guessed()
    }

    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u8 {
        self.tracker.wrong_guesses()
    }

    #[inline]
    #[must_use]
    pub const fn max_wrong_guesses(&self) -> u8 {
        self.max_wrong_guesses
    }

    /// Wrong guesses left before the round is lost
    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> u8 {
        self.max_wrong_guesses
            .saturating_sub(self.tracker.wrong_guesses())
    }

    /// Capture everything a front end needs to draw the round
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let guessed = self.tracker.guessed();
        SessionSnapshot {
            masked_word: view::mask(&self.word, guessed),
            petals: view::petals(self.tracker.wrong_guesses(), self.max_wrong_guesses),
            keyboard: view::keyboard(&self.word, guessed),
            guessed: guessed.as_slice().to_vec(),
            wrong_guesses: self.tracker.wrong_guesses(),
            max_wrong_guesses: self.max_wrong_guesses,
            status: self.status,
            answer: self
                .status
                .is_terminal()
                .then(|| self.word.text().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Petal;
    use crate::wordlists::Vocabulary;

    fn cat_vocab() -> Vocabulary {
        Vocabulary::from_slice(&["cat"]).unwrap()
    }

    #[test]
    fn zero_max_rejected() {
        let vocab = cat_vocab();
        assert_eq!(
            Session::new(WordSource::new(&vocab), 0).unwrap_err(),
            SessionError::ZeroMaxWrongGuesses
        );
    }

    #[test]
    fn guessing_every_letter_wins() {
        let vocab = cat_vocab();
        let mut session = Session::new(WordSource::new(&vocab), 8).unwrap();

        assert_eq!(session.guess_char('C'), Ok(GuessOutcome::Hit));
        assert_eq!(session.status(), Status::InProgress);
        assert_eq!(session.guess_char('A'), Ok(GuessOutcome::Hit));
        assert_eq!(session.status(), Status::InProgress);
        assert_eq!(session.guess_char('T'), Ok(GuessOutcome::Hit));

        assert_eq!(session.status(), Status::Won);
        assert_eq!(session.wrong_guesses(), 0);
    }

    #[test]
    fn reaching_max_loses() {
        let vocab = cat_vocab();
        let mut session = Session::new(WordSource::new(&vocab), 2).unwrap();

        assert_eq!(session.guess_char('X'), Ok(GuessOutcome::Miss));
        assert_eq!(session.status(), Status::InProgress);
        assert_eq!(session.guess_char('Y'), Ok(GuessOutcome::Miss));

        assert_eq!(session.status(), Status::Lost);
        assert_eq!(session.wrong_guesses(), 2);
        assert_eq!(session.remaining_guesses(), 0);
    }

    #[test]
    fn repeated_guess_changes_nothing() {
        let vocab = cat_vocab();
        let mut session = Session::new(WordSource::new(&vocab), 8).unwrap();

        session.guess_char('C').unwrap();
        assert_eq!(session.guess_char('C'), Ok(GuessOutcome::AlreadyGuessed));
        assert_eq!(session.guess_char('c'), Ok(GuessOutcome::AlreadyGuessed));

        let guessed: Vec<char> = session.guessed_letters().iter().map(Letter::as_char).collect();
        assert_eq!(guessed, vec!['C']);
        assert_eq!(session.wrong_guesses(), 0);
    }

    #[test]
    fn guesses_rejected_after_round_ends() {
        let vocab = cat_vocab();
        let mut session = Session::new(WordSource::new(&vocab), 1).unwrap();

        session.guess_char('Z').unwrap();
        assert_eq!(session.status(), Status::Lost);

        let before = session.snapshot();
        assert_eq!(
            session.guess_char('C'),
            Err(GuessError::RoundOver(Status::Lost))
        );
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn invalid_input_rejected_without_state_change() {
        let vocab = cat_vocab();
        let mut session = Session::new(WordSource::new(&vocab), 8).unwrap();

        assert_eq!(
            session.guess_char('4'),
            Err(GuessError::Invalid(LetterError::NotALetter('4')))
        );
        assert_eq!(
            session.guess_char(' '),
            Err(GuessError::Invalid(LetterError::NotALetter(' ')))
        );
        assert!(session.guessed_letters().is_empty());
        assert_eq!(session.wrong_guesses(), 0);
        assert_eq!(session.status(), Status::InProgress);
    }

    #[test]
    fn new_game_resets_round() {
        let vocab = Vocabulary::resolve("classic").unwrap();
        let mut session = Session::new(WordSource::seeded(&vocab, 3), 2).unwrap();

        session.guess_char('Q').unwrap();
        session.guess_char('J').unwrap();
        assert_eq!(session.status(), Status::Lost);

        session.new_game();
        assert_eq!(session.status(), Status::InProgress);
        assert_eq!(session.wrong_guesses(), 0);
        assert!(session.guessed_letters().is_empty());
        assert!(vocab.contains(session.word()));
        assert_eq!(session.max_wrong_guesses(), 2);
    }

    #[test]
    fn won_and_lost_never_both_reachable() {
        let vocab = Vocabulary::resolve("extended").unwrap();
        let mut session = Session::new(WordSource::seeded(&vocab, 11), 8).unwrap();

        for round in 0..20 {
            for letter in Letter::ALPHABET.iter().cycle().skip(round).take(26) {
                if session.guess(*letter).is_err() {
                    break;
                }
                let status = session.status();
                assert!(!(status.is_won() && status.is_lost()));
                if status == Status::Lost {
                    assert!(session.wrong_guesses() >= session.max_wrong_guesses());
                }
            }
            assert!(session.status().is_terminal());
            session.new_game();
        }
    }

    #[test]
    fn snapshot_reflects_round() {
        let vocab = cat_vocab();
        let mut session = Session::new(WordSource::new(&vocab), 4).unwrap();
        session.guess_char('a').unwrap();
        session.guess_char('q').unwrap();

        let snap = session.snapshot();
        assert_eq!(snap.masked_word, "_ A _");
        assert_eq!(snap.wrong_guesses, 1);
        assert_eq!(snap.max_wrong_guesses, 4);
        assert_eq!(snap.visible_petals(), 3);
        assert_eq!(snap.petals[0], Petal::Fallen);
        assert_eq!(snap.status, Status::InProgress);
        assert_eq!(snap.answer, None);

        session.guess_char('c').unwrap();
        session.guess_char('t').unwrap();
        let snap = session.snapshot();
        assert_eq!(snap.status, Status::Won);
        assert_eq!(snap.answer.as_deref(), Some("CAT"));
    }
}
