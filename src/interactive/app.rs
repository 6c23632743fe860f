//! TUI application state and logic

use crate::game::{GuessOutcome, Session, SessionSnapshot, Statistics, Status};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub snapshot: SessionSnapshot,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: Session<'a>) -> Self {
        let snapshot = session.snapshot();

        Self {
            session,
            snapshot,
            messages: vec![
                Message {
                    text: "Welcome! Guess the word before the flower loses all its petals."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a letter to guess. Esc quits.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) if self.session.status().is_terminal() => match c {
                'n' | 'N' => self.new_game(),
                'q' | 'Q' => self.should_quit = true,
                _ => {}
            },
            KeyCode::Char(c) => self.guess(c),
            _ => {}
        }
    }

    pub fn guess(&mut self, c: char) {
        let letter = c.to_ascii_uppercase();
        let was_terminal = self.session.status().is_terminal();
        match self.session.guess_char(c) {
            Ok(GuessOutcome::Hit) => {
                self.add_message(&format!("{letter} is in the word!"), MessageStyle::Success);
            }
            Ok(GuessOutcome::Miss) => {
                self.add_message(
                    &format!("No {letter}, a petal falls..."),
                    MessageStyle::Error,
                );
            }
            Ok(GuessOutcome::AlreadyGuessed) => {
                self.add_message(
                    &format!("You already guessed {letter}"),
                    MessageStyle::Info,
                );
            }
            Err(err) => {
                debug!(%err, "guess rejected");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }

        self.snapshot = self.session.snapshot();

        if was_terminal {
            return;
        }

        match self.session.status() {
            Status::Won => {
                self.stats.record(Status::Won);
                self.add_message("🌸 You won! 🌸", MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Status::Lost => {
                self.stats.record(Status::Lost);
                self.add_message(
                    &format!("You lost! The word was {}", self.session.word()),
                    MessageStyle::Error,
                );
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Status::InProgress => {}
        }
    }

    pub fn new_game(&mut self) {
        self.session.new_game();
        self.snapshot = self.session.snapshot();
        self.messages.clear();
        self.add_message("New game started! Guess a letter.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::WordSource;
    use crate::wordlists::Vocabulary;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app(vocab: &Vocabulary, max: u8) -> App<'_> {
        App::new(Session::new(WordSource::new(vocab), max).unwrap())
    }

    #[test]
    fn letters_update_snapshot() {
        let vocab = Vocabulary::from_slice(&["cat"]).unwrap();
        let mut app = app(&vocab, 8);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.snapshot.masked_word, "_ A _");

        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.snapshot.wrong_guesses, 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn win_records_stats_and_n_restarts() {
        let vocab = Vocabulary::from_slice(&["cat"]).unwrap();
        let mut app = app(&vocab, 8);

        for c in ['c', 'a', 't'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.snapshot.status, Status::Won);
        assert_eq!(app.stats.games_won, 1);

        // Letters are ignored while the round is over
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.snapshot.wrong_guesses, 0);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.snapshot.status, Status::InProgress);
        assert!(app.snapshot.guessed.is_empty());
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn loss_reveals_word() {
        let vocab = Vocabulary::from_slice(&["cat"]).unwrap();
        let mut app = app(&vocab, 1);

        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.snapshot.status, Status::Lost);
        assert!(!app.should_quit, "'q' is a guess while the round is running");
        assert!(app.messages.iter().any(|m| m.text.contains("CAT")));

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn finished_round_counted_once() {
        let vocab = Vocabulary::from_slice(&["cat"]).unwrap();
        let mut app = app(&vocab, 8);

        for c in ['c', 'a', 't', 'x', 'y'] {
            app.guess(c);
        }

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.snapshot.wrong_guesses, 0);
        assert!(app.messages.last().unwrap().text.contains("Round is over"));
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let vocab = Vocabulary::from_slice(&["cat"]).unwrap();

        let mut a = app(&vocab, 8);
        press(&mut a, KeyCode::Esc);
        assert!(a.should_quit);

        let mut b = app(&vocab, 8);
        b.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(b.should_quit);
        assert!(b.snapshot.guessed.is_empty());
    }

    #[test]
    fn non_letters_reported() {
        let vocab = Vocabulary::from_slice(&["cat"]).unwrap();
        let mut app = app(&vocab, 8);

        press(&mut app, KeyCode::Char('5'));
        assert!(app.snapshot.guessed.is_empty());
        assert!(app.messages.last().unwrap().text.contains("not a letter"));
    }

    #[test]
    fn message_log_bounded() {
        let vocab = Vocabulary::from_slice(&["cat"]).unwrap();
        let mut app = app(&vocab, 8);
        for i in 0..12 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m7");
    }
}
