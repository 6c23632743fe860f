//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::config::GameConfig;
use crate::core::Letter;
use crate::game::{GuessOutcome, Session, Statistics};
use crate::output::formatters::{keyboard_line, letter_list, petal_row};
use crate::output::print_round_result;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the session cannot be started or if there's an I/O
/// error reading user input.
pub fn run_simple(config: &GameConfig) -> Result<Statistics> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(config, stdin.lock(), stdout.lock())
}

/// Run the game loop against any input and output
///
/// Ends on `quit`, on end of input, or when the player declines another round.
///
/// # Errors
///
/// Returns an error if the session cannot be started or on I/O failure.
pub fn run_simple_with<R: BufRead, W: Write>(
    config: &GameConfig,
    mut input: R,
    mut out: W,
) -> Result<Statistics> {
    let mut session = config.session()?;
    let mut stats = Statistics::default();

    writeln!(out, "\n╔══════════════════════════════════════════════╗")?;
    writeln!(out, "║            Flower Game - Simple Mode          ║")?;
    writeln!(out, "╚══════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Guess the word one letter at a time. Each wrong letter costs a petal."
    )?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new word\n")?;

    loop {
        print_board(&mut out, &session)?;

        let Some(line) = get_user_input(&mut input, &mut out, "Guess a letter")? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "new" => {
                session.new_game();
                writeln!(out, "\n🔄 New game started!\n")?;
                continue;
            }
            _ => {}
        }

        match Letter::parse(&line) {
            Ok(letter) => report_guess(&mut out, &mut session, letter)?,
            Err(err) => writeln!(out, "{} {err}", "❌".red())?,
        }

        if session.status().is_terminal() {
            stats.record(session.status());
            print_round_result(&mut out, &session.snapshot(), &stats)?;

            let again = get_user_input(&mut input, &mut out, "Play again? (yes/no)")?;
            match again.as_deref().map(str::to_lowercase).as_deref() {
                Some("yes" | "y") => {
                    session.new_game();
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                _ => break,
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

fn report_guess<W: Write>(out: &mut W, session: &mut Session<'_>, letter: Letter) -> Result<()> {
    match session.guess(letter) {
        Ok(GuessOutcome::Hit) => {
            writeln!(out, "{}", format!("✓ {letter} is in the word").green())?;
        }
        Ok(GuessOutcome::Miss) => {
            let text = format!("✗ {letter} is not in the word, a petal falls");
            writeln!(out, "{}", text.red())?;
        }
        Ok(GuessOutcome::AlreadyGuessed) => writeln!(out, "You already guessed {letter}")?,
        Err(err) => writeln!(out, "{} {err}", "❌".red())?,
    }
    Ok(())
}

fn print_board<W: Write>(out: &mut W, session: &Session<'_>) -> io::Result<()> {
    let snapshot = session.snapshot();

    writeln!(out, "────────────────────────────────────────────────")?;
    writeln!(
        out,
        "Flower: {}  ({} of {} petals left)",
        petal_row(&snapshot.petals).magenta(),
        snapshot.visible_petals(),
        snapshot.max_wrong_guesses
    )?;
    writeln!(out, "Word:   {}", snapshot.masked_word.bright_white().bold())?;
    if !snapshot.guessed.is_empty() {
        writeln!(out, "Tried:  {}", letter_list(&snapshot.guessed))?;
    }
    writeln!(out, "Keys:   {}", keyboard_line(&snapshot.keyboard))?;
    writeln!(out, "────────────────────────────────────────────────")
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Vocabulary;

    fn play(words: &[&str], max: u8, script: &str) -> (Statistics, String) {
        let config = GameConfig::new(Vocabulary::from_slice(words).unwrap(), max, Some(0));
        let mut out = Vec::new();
        let stats = run_simple_with(&config, script.as_bytes(), &mut out).unwrap();
        (stats, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_round_then_quit() {
        let (stats, output) = play(&["cat"], 8, "c\na\nt\nno\n");

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 1);
        assert!(output.contains("You won!"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn losing_round_reveals_word() {
        let (stats, output) = play(&["cat"], 2, "x\ny\nno\n");

        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.games_won, 0);
        assert!(output.contains("You lost!"));
        assert!(output.contains("CAT"));
    }

    #[test]
    fn invalid_and_repeated_input_reported() {
        let (stats, output) = play(&["cat"], 8, "c\nc\n7\nab\nquit\n");

        assert_eq!(stats.total_games, 0);
        assert!(output.contains("You already guessed C"));
        assert!(output.contains("'7' is not a letter"));
        assert!(output.contains("Expected a single letter"));
    }

    #[test]
    fn play_again_starts_new_round() {
        let (stats, output) = play(&["cat"], 1, "z\nyes\nc\na\nt\nno\n");

        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.games_won, 1);
        assert!(output.contains("New game started"));
    }

    #[test]
    fn board_shows_keyboard_and_guessed_letter() {
        let (_, output) = play(&["cat"], 8, " c \nz\nquit\n");

        assert!(output.contains("Keys:   abcdefghijklmnopqrstuvwxyz"));
        assert!(output.contains("✓ C is in the word"));
        assert!(output.contains("✗ Z is not in the word"));
        assert!(output.contains("Keys:   abCdefghijklmnopqrstuvwxy-"));
    }

    #[test]
    fn end_of_input_ends_game() {
        let (stats, output) = play(&["cat"], 8, "c\n");
        assert_eq!(stats.total_games, 0);
        assert!(output.contains("Thanks for playing"));
    }
}
