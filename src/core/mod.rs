//! Core domain types for the flower game
//!
//! This module contains the fundamental domain types with no game state attached.
//! Everything here is pure and validated at construction.

mod letter;
mod word;

pub use letter::{Letter, LetterError};
pub use word::{Word, WordError};
