//! Vocabularies for the flower game
//!
//! Provides embedded word lists compiled into the binary, a file loader, and the
//! validated `Vocabulary` type the game draws target words from.

mod embedded;
pub mod loader;
mod vocabulary;

pub use embedded::{CLASSIC, CLASSIC_COUNT, EXTENDED, EXTENDED_COUNT};
pub use vocabulary::{Vocabulary, VocabularyError};
