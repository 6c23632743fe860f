//! Display functions for command results

use super::formatters::{create_progress_bar, petal_row};
use crate::commands::SimulationResult;
use crate::game::{SessionSnapshot, Statistics, Status};
use colored::Colorize;
use std::io::{self, Write};

/// Print the end-of-round banner
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn print_round_result<W: Write>(
    out: &mut W,
    snapshot: &SessionSnapshot,
    stats: &Statistics,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(48).bright_cyan())?;
    match snapshot.status {
        Status::Won => {
            writeln!(out, "{}", "    🌸  You won!  🌸".bright_green().bold())?;
            writeln!(
                out,
                "    Flower kept {} of {} petals: {}",
                snapshot.visible_petals(),
                snapshot.max_wrong_guesses,
                petal_row(&snapshot.petals).magenta()
            )?;
        }
        Status::Lost => {
            writeln!(out, "{}", "    🥀  You lost!".bright_red().bold())?;
        }
        Status::InProgress => {}
    }
    if let Some(answer) = &snapshot.answer {
        writeln!(out, "    The word was {}", answer.bright_yellow().bold())?;
    }
    writeln!(
        out,
        "    Games: {} | Won: {} | Lost: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.games_lost(),
        stats.win_rate()
    )?;
    writeln!(out, "{}", "═".repeat(48).bright_cyan())
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Guesser:          {}", result.guesser);
    println!("   Rounds played:    {}", result.total_rounds);
    println!(
        "   Win rate:         [{}] {}",
        create_progress_bar(result.win_rate(), 100.0, 30).green(),
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!(
        "   Won / lost:       {} / {}",
        result.won.to_string().green(),
        result.lost.to_string().red()
    );
    println!("   Avg wrong:        {:.2}", result.average_wrong_guesses);
    println!("   Avg guesses:      {:.2}", result.average_total_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n🌼 {}", "Per word:".bright_cyan().bold());
    for (word, tally) in &result.per_word {
        let pct = if tally.played > 0 {
            tally.won as f64 / tally.played as f64 * 100.0
        } else {
            0.0
        };
        println!(
            "   {word:<10} {} {:4}/{:<4} ({pct:5.1}%)",
            create_progress_bar(pct, 100.0, 20).green(),
            tally.won,
            tally.played
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Session, WordSource};
    use crate::wordlists::Vocabulary;

    #[test]
    fn round_banner_counts_losses() {
        let vocab = Vocabulary::from_slice(&["cat"]).unwrap();
        let mut session = Session::new(WordSource::new(&vocab), 1).unwrap();
        session.guess_char('z').unwrap();

        let mut stats = Statistics::default();
        stats.record(Status::Won);
        stats.record(session.status());

        let mut out = Vec::new();
        print_round_result(&mut out, &session.snapshot(), &stats).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("You lost!"));
        assert!(text.contains("CAT"));
        assert!(text.contains("Games: 2 | Won: 1 | Lost: 1 | Win rate: 50%"));
    }
}
