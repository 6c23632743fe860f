//! Formatting utilities for terminal output

use crate::game::{LetterState, Petal};

/// Glyph for a petal still on the flower
pub const PETAL_GLYPH: char = '✿';
/// Glyph for a fallen petal
pub const FALLEN_GLYPH: char = '·';

/// Format petals as a row of glyphs, one per petal
#[must_use]
pub fn petal_row(petals: &[Petal]) -> String {
    petals
        .iter()
        .map(|petal| match petal {
            Petal::Visible => PETAL_GLYPH,
            Petal::Fallen => FALLEN_GLYPH,
        })
        .collect()
}

/// Format guessed letters as a space-separated list
#[must_use]
pub fn letter_list<I>(letters: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    letters
        .into_iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the alphabet with guessed letters marked
///
/// Hits are shown in upper case, misses as `-`, unused letters in lower case.
#[must_use]
pub fn keyboard_line(keyboard: &[LetterState; 26]) -> String {
    keyboard
        .iter()
        .zip('a'..='z')
        .map(|(state, c)| match state {
            LetterState::Unused => c,
            LetterState::Hit => c.to_ascii_uppercase(),
            LetterState::Miss => '-',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
