//! Flower Game - CLI
//!
//! Letter-guessing game with TUI, simple CLI, and simulation modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use petal_guess::{
    commands::{run_simple, run_simulation},
    config::GameConfig,
    game::DEFAULT_MAX_WRONG_GUESSES,
    guesser::GuesserKind,
    output::print_simulation_result,
};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "petal_guess",
    about = "Guess the word before the flower loses all its petals",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'classic' (default, 9 words), 'extended' (11 words), or path to file
    #[arg(short = 'w', long, global = true, default_value = "classic")]
    wordlist: String,

    /// Wrong guesses allowed per round (one petal each)
    #[arg(
        short = 'm',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_WRONG_GUESSES,
        value_parser = clap::value_parser!(u8).range(1..=26)
    )]
    max_wrong: u8,

    /// Seed for reproducible word picks
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (TUI mode logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Auto-play many rounds and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Letter guesser to play with
        #[arg(short, long, value_enum, default_value_t = GuesserKind::Frequency)]
        guesser: GuesserKind,
    },
}

/// Set up tracing
///
/// Logs go to `log_file` when given, else to stderr unless the TUI owns the
/// terminal. `RUST_LOG` overrides the default `warn` level.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if tui => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let config = GameConfig::from_wordlist(&cli.wordlist, cli.max_wrong, cli.seed)
        .with_context(|| format!("Failed to load wordlist '{}'", cli.wordlist))?;
    info!(
        words = config.vocabulary.len(),
        max_wrong = config.max_wrong_guesses,
        "configuration loaded"
    );

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => {
            run_simple(&config)?;
            Ok(())
        }
        Commands::Simulate { count, guesser } => run_simulate_command(&config, count, guesser),
    }
}

fn run_simulate_command(config: &GameConfig, count: usize, guesser: GuesserKind) -> Result<()> {
    println!("Simulating {count} rounds with the {guesser} guesser...");
    let result = run_simulation(config, guesser, count, true)?;
    print_simulation_result(&result);
    Ok(())
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    use petal_guess::interactive::{App, run_tui};

    let app = App::new(config.session()?);
    let stats = run_tui(app)?;
    println!(
        "Played {} games, won {} ({:.0}%)",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );
    Ok(())
}
