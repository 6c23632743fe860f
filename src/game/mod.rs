//! Game state for a single round and across rounds
//!
//! - [`WordSource`] draws target words from a vocabulary
//! - [`GuessTracker`] records guessed letters and wrong guesses
//! - [`evaluate`] derives the round [`Status`]
//! - [`Session`] ties them together and resets between rounds

mod outcome;
mod session;
mod source;
mod stats;
mod tracker;
pub mod view;

pub use outcome::{Status, evaluate};
pub use session::{DEFAULT_MAX_WRONG_GUESSES, GuessError, Session, SessionError};
pub use source::WordSource;
pub use stats::Statistics;
pub use tracker::{GuessOutcome, GuessTracker, GuessedLetters};
pub use view::{LetterState, Petal, SessionSnapshot};
