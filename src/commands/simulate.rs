//! Simulate command
//!
//! Auto-plays many rounds with a letter guesser and collects statistics.

use crate::config::GameConfig;
use crate::game::{Session, SessionError};
use crate::guesser::{Guesser, GuesserKind, GuesserType};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of one auto-played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub word: String,
    pub won: bool,
    pub wrong_guesses: u8,
    pub total_guesses: usize,
}

/// Per-word tallies
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WordTally {
    pub played: usize,
    pub won: usize,
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub guesser: GuesserKind,
    pub total_rounds: usize,
    pub won: usize,
    pub lost: usize,
    pub average_wrong_guesses: f64,
    pub average_total_guesses: f64,
    pub per_word: BTreeMap<String, WordTally>,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_rounds > 0 {
            self.won as f64 / self.total_rounds as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Play the current round of `session` to the end with `guesser`
pub fn play_round<G: Guesser>(session: &mut Session<'_>, guesser: &mut G) -> RoundResult {
    let mut total_guesses = 0;

    while !session.status().is_terminal() {
        let Some(letter) = guesser.next_letter(session.guessed_letters()) else {
            break;
        };
        if session.guess(letter).is_err() {
            break;
        }
        total_guesses += 1;
    }

    RoundResult {
        word: session.word().text().to_string(),
        won: session.status().is_won(),
        wrong_guesses: session.wrong_guesses(),
        total_guesses,
    }
}

/// Auto-play `count` independent rounds in parallel
///
/// Each round gets its own word source and guesser; with a configured seed
/// the run is reproducible.
///
/// # Errors
///
/// Returns `SessionError` if the configuration cannot start a session.
pub fn run_simulation(
    config: &GameConfig,
    guesser: GuesserKind,
    count: usize,
    show_progress: bool,
) -> Result<SimulationResult, SessionError> {
    info!(count, %guesser, "starting simulation");

    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let results = (0..count)
        .into_par_iter()
        .map(|i| -> Result<RoundResult, SessionError> {
            let index = i as u64;
            let mut session = Session::new(config.word_source(index), config.max_wrong_guesses)?;
            let seed = config.seed.map(|s| s.wrapping_add(index));
            let result = play_round(&mut session, &mut GuesserType::new(guesser, seed));
            pb.inc(1);
            Ok(result)
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_rounds = results.len();
    let won = results.iter().filter(|r| r.won).count();

    let mut per_word: BTreeMap<String, WordTally> = BTreeMap::new();
    for result in &results {
        let tally = per_word.entry(result.word.clone()).or_default();
        tally.played += 1;
        if result.won {
            tally.won += 1;
        }
    }

    let average = |total: usize| {
        if total_rounds > 0 {
            total as f64 / total_rounds as f64
        } else {
            0.0
        }
    };

    let summary = SimulationResult {
        guesser,
        total_rounds,
        won,
        lost: total_rounds - won,
        average_wrong_guesses: average(
            results.iter().map(|r| usize::from(r.wrong_guesses)).sum(),
        ),
        average_total_guesses: average(results.iter().map(|r| r.total_guesses).sum()),
        per_word,
        duration,
    };

    info!(
        won = summary.won,
        lost = summary.lost,
        elapsed_ms = duration.as_millis() as u64,
        "simulation finished"
    );

    Ok(summary)
}
