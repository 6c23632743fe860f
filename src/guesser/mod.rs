//! Automatic letter pickers used by the simulate command

pub mod strategy;

pub use strategy::{FrequencyGuesser, Guesser, GuesserKind, GuesserType, RandomGuesser};
