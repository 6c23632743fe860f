//! TUI rendering with ratatui
//!
//! Draws the flower, the masked word, and the letter keyboard from the
//! current session snapshot.

use super::app::{App, MessageStyle};
use crate::game::{LetterState, Petal, SessionSnapshot, Status};
use crate::output::formatters::{FALLEN_GLYPH, PETAL_GLYPH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

const FLOWER_WIDTH: usize = 21;
const FLOWER_HEIGHT: usize = 13;
const CENTER_X: f64 = 10.0;
const CENTER_Y: f64 = 4.0;
// Terminal cells are about twice as tall as wide
const RADIUS_X: f64 = 7.0;
const RADIUS_Y: f64 = 3.0;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(15),    // Main content
            Constraint::Length(3),  // Banner / prompt
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Flower
            Constraint::Percentage(60), // Word, keyboard, messages
        ])
        .split(chunks[1]);

    render_flower_panel(f, &app.snapshot, main_chunks[0]);
    render_game_panel(f, app, main_chunks[1]);

    render_prompt(f, &app.snapshot, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌸 FLOWER GAME 🌸")
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Magenta)),
        );
    f.render_widget(header, area);
}

/// Lay the petals out on a ring around the flower head, with a stem below
///
/// Petal `i` sits at angle `i * 360 / n`, starting from the right and going
/// clockwise.
#[must_use]
pub fn flower_grid(petals: &[Petal]) -> Vec<Vec<char>> {
    let mut grid = vec![vec![' '; FLOWER_WIDTH]; FLOWER_HEIGHT];
    let cx = CENTER_X as usize;
    let cy = CENTER_Y as usize;

    // Stem and leaves
    for row in grid.iter_mut().skip(cy + 1) {
        row[cx] = '|';
    }
    grid[cy + 5][cx - 2] = '\\';
    grid[cy + 5][cx - 1] = '_';
    grid[cy + 6][cx + 1] = '_';
    grid[cy + 6][cx + 2] = '/';
    grid[cy][cx] = '@';

    let count = petals.len().max(1) as f64;
    for (i, petal) in petals.iter().enumerate() {
        let radians = (i as f64 * 360.0 / count).to_radians();
        let x = (CENTER_X + RADIUS_X * radians.cos()).round() as usize;
        let y = (CENTER_Y + RADIUS_Y * radians.sin()).round() as usize;
        let glyph = match petal {
            Petal::Visible => PETAL_GLYPH,
            Petal::Fallen => FALLEN_GLYPH,
        };
        if let Some(cell) = grid.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = glyph;
        }
    }

    grid
}

fn render_flower_panel(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(FLOWER_HEIGHT as u16 + 2), Constraint::Length(3)])
        .split(area);

    let lines: Vec<Line> = flower_grid(&snapshot.petals)
        .into_iter()
        .map(|row| {
            Line::from(
                row.into_iter()
                    .map(|c| {
                        let style = match c {
                            PETAL_GLYPH => Style::default().fg(Color::LightMagenta),
                            '@' => Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                            '|' | '\\' | '/' | '_' => Style::default().fg(Color::Green),
                            _ => Style::default().fg(Color::DarkGray),
                        };
                        Span::styled(c.to_string(), style)
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let flower = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Flower ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(flower, chunks[0]);

    let remaining = snapshot.visible_petals();
    let max = usize::from(snapshot.max_wrong_guesses).max(1);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::LightMagenta))
        .percent((remaining * 100 / max) as u16)
        .label(format!("{remaining}/{} petals left", snapshot.max_wrong_guesses));
    f.render_widget(gauge, chunks[1]);
}

fn render_game_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Word
            Constraint::Length(6), // Keyboard
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_word(f, &app.snapshot, chunks[0]);
    render_keyboard(f, &app.snapshot, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let color = match snapshot.status {
        Status::InProgress => Color::White,
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            snapshot.masked_word.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    if let (Status::Lost, Some(answer)) = (snapshot.status, &snapshot.answer) {
        content.push(Line::from(format!("The word was {answer}")));
    }

    let word = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(word, area);
}

fn render_keyboard(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let rows: Vec<Line> = snapshot
        .keyboard
        .chunks(9)
        .enumerate()
        .map(|(row, states)| {
            let spans: Vec<Span> = states
                .iter()
                .enumerate()
                .map(|(col, state)| {
                    let letter = char::from(b'A' + (row * 9 + col) as u8);
                    let style = match state {
                        LetterState::Unused => Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                        LetterState::Hit => Style::default().fg(Color::Green),
                        LetterState::Miss => Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(rows).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_prompt(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let (title, color) = match snapshot.status {
        Status::Won => (
            " 🌸 You won! 🌸 | Press 'n' for new game or 'q' to quit ",
            Color::Green,
        ),
        Status::Lost => (
            " 🥀 You lost! | Press 'n' for new game or 'q' to quit ",
            Color::Red,
        ),
        Status::InProgress => (" Guess a letter! (A-Z) ", Color::Yellow),
    };

    let tried: String = snapshot
        .guessed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    let prompt = Paragraph::new(format!("Tried: {tried}"))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(prompt, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let remaining_text = format!("Wrong guesses left: {}", app.session.remaining_guesses());
    f.render_widget(
        Paragraph::new(remaining_text).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = if app.snapshot.status.is_terminal() {
        "n: New Game | q/Esc: Quit"
    } else {
        "A-Z: Guess | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::view::petals;
    use crate::game::{Session, WordSource};
    use crate::wordlists::Vocabulary;
    use ratatui::backend::TestBackend;

    fn count(grid: &[Vec<char>], glyph: char) -> usize {
        grid.iter().flatten().filter(|&&c| c == glyph).count()
    }

    #[test]
    fn eight_petals_all_placed() {
        let grid = flower_grid(&petals(0, 8));
        assert_eq!(count(&grid, PETAL_GLYPH), 8);
        assert_eq!(count(&grid, FALLEN_GLYPH), 0);
        assert_eq!(grid[CENTER_Y as usize][CENTER_X as usize], '@');
    }

    #[test]
    fn fallen_petals_drawn_differently() {
        let grid = flower_grid(&petals(3, 8));
        assert_eq!(count(&grid, PETAL_GLYPH), 5);
        assert_eq!(count(&grid, FALLEN_GLYPH), 3);
    }

    #[test]
    fn first_petal_to_the_right_of_center() {
        let grid = flower_grid(&petals(0, 8));
        let x = (CENTER_X + RADIUS_X) as usize;
        assert_eq!(grid[CENTER_Y as usize][x], PETAL_GLYPH);
    }

    #[test]
    fn draws_into_test_backend() {
        let vocab = Vocabulary::from_slice(&["cat"]).unwrap();
        let mut app = App::new(Session::new(WordSource::new(&vocab), 8).unwrap());
        app.guess('a');

        let mut terminal = ratatui::Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(text.contains("_ A _"));
        assert!(text.contains("FLOWER GAME"));
    }
}
