//! Flower Game
//!
//! A letter-guessing game: every wrong letter costs the flower a petal, and the
//! round is lost when the last petal falls.
//!
//! # Quick Start
//!
//! ```rust
//! use petal_guess::game::{Session, Status, WordSource};
//! use petal_guess::wordlists::Vocabulary;
//!
//! let vocab = Vocabulary::from_slice(&["cat"]).unwrap();
//! let mut session = Session::new(WordSource::new(&vocab), 8).unwrap();
//!
//! session.guess_char('c').unwrap();
//! assert_eq!(session.snapshot().masked_word, "C _ _");
//! assert_eq!(session.status(), Status::InProgress);
//! ```

// Core domain types
pub mod core;

// Round state, outcome evaluation, and view derivation
pub mod game;

// Vocabularies
pub mod wordlists;

// Settings shared by the front ends
pub mod config;

// Automatic letter pickers
pub mod guesser;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
