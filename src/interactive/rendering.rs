//! TUI rendering with ratatui
//!
//! Board, keyboard and reward screens for the puzzle interface.

use super::app::{App, MessageStyle, Screen};
use crate::core::keyboard::LAYOUT;
use crate::core::{KeyboardState, LetterResult};
use crate::game::{GameStatus, TilePosition};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use std::rc::Rc;

const CORRECT_BG: Color = Color::Rgb(46, 204, 113);
const PRESENT_BG: Color = Color::Rgb(243, 156, 18);
const ABSENT_BG: Color = Color::Rgb(149, 165, 166);
const EMPTY_BG: Color = Color::DarkGray;

const KEY_GAP: &str = " ";

/// Header, main content, messages and status bar
fn main_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(area)
}

/// Board above the on-screen keyboard
fn board_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Board
            Constraint::Length(5), // Keyboard
        ])
        .split(area)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = main_layout(f.area());

    render_header(f, app, chunks[0]);

    match app.screen {
        Screen::Board => {
            let main_chunks = board_layout(chunks[1]);
            render_board(f, app, main_chunks[0]);
            render_keyboard(f, app, main_chunks[1]);
        }
        Screen::Reward { checked } => render_reward(f, app, checked, chunks[1]),
    }

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!("🎄 {} 🎄", app.puzzle.title.to_uppercase()))
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );
    f.render_widget(header, area);
}

fn result_style(result: Option<LetterResult>) -> Style {
    let bg = match result {
        Some(LetterResult::Correct) => CORRECT_BG,
        Some(LetterResult::Present) => PRESENT_BG,
        Some(LetterResult::Absent) => ABSENT_BG,
        None => EMPTY_BG,
    };
    Style::default()
        .bg(bg)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn tile_span(letter: Option<char>, result: Option<LetterResult>) -> Span<'static> {
    Span::styled(
        format!(" {} ", letter.unwrap_or(' ')),
        result_style(result),
    )
}

/// One board line per row: submitted rows, the row being typed, empty rows
fn board_lines(app: &App) -> Vec<Line<'static>> {
    let session = &app.session;
    let word_len = session.word_len();
    let mut lines = Vec::with_capacity(session.max_guesses() * 2);

    for row in 0..session.max_guesses() {
        let mut spans = Vec::with_capacity(word_len * 2);

        for col in 0..word_len {
            if col > 0 {
                spans.push(Span::raw(" "));
            }

            let span = if let Some(submitted) = session.rows().get(row) {
                let letter = submitted.guess.letter_at(col) as char;
                let result = app
                    .reveals
                    .is_revealed(TilePosition::new(row, col))
                    .then(|| submitted.evaluation.results()[col]);
                tile_span(Some(letter), result)
            } else if session.active_row() == Some(row) {
                tile_span(session.current().chars().nth(col), None)
            } else {
                tile_span(None, None)
            };
            spans.push(span);
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    lines
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let board = Paragraph::new(board_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn key_span(key: &str, keyboard: &KeyboardState) -> Span<'static> {
    let state = match key.as_bytes() {
        &[letter] => keyboard.state_of(letter),
        _ => None,
    };
    Span::styled(format!(" {key} "), result_style(state))
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.session.keyboard();
    let lines: Vec<Line> = LAYOUT
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&key| [key_span(key, keyboard), Span::raw(KEY_GAP)])
                .collect();
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(widget, area);
}

/// On-screen keyboard label under a terminal cell, if any
///
/// `frame` is the full terminal area. Only meaningful while the board screen
/// is showing.
#[must_use]
pub fn key_at(frame: Rect, column: u16, row: u16) -> Option<&'static str> {
    let area = board_layout(main_layout(frame)[1])[1];
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if !inner.contains(Position::new(column, row)) {
        return None;
    }

    let keys = LAYOUT.get(usize::from(row - inner.y))?;
    let width = |key: &str| Span::raw(format!(" {key} ")).width() as u16;
    let gap = Span::raw(KEY_GAP).width() as u16;
    let line_width: u16 = keys.iter().map(|&key| width(key) + gap).sum();

    // Same offset the centered paragraph uses
    let mut x = inner.x + (inner.width / 2).saturating_sub(line_width / 2);
    for &key in keys.iter() {
        let key_width = width(key);
        if (x..x + key_width).contains(&column) {
            return Some(key);
        }
        x += key_width + gap;
    }
    None
}

fn render_reward(f: &mut Frame, app: &App, checked: bool, area: Rect) {
    let reward = &app.puzzle.reward;

    let mut content: Vec<Line> = reward
        .piece_assets()
        .into_iter()
        .enumerate()
        .map(|(i, asset)| {
            Line::from(vec![
                Span::raw(format!("🧩 Piece {}: ", i + 1)),
                Span::styled(asset, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    content.push(Line::from(""));

    if checked {
        content.extend(reward.final_message.iter().map(|&line| {
            Line::from(Span::styled(
                line,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
        }));
    } else {
        content.push(Line::from(Span::styled(
            "Press Enter to check the puzzle",
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {} ", reward.title))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let progress = match session.status() {
        GameStatus::InProgress => format!(
            "Guess {}/{}",
            session.rows().len() + 1,
            session.max_guesses()
        ),
        GameStatus::Won { guesses } => format!("Solved in {guesses}/{}", session.max_guesses()),
        GameStatus::Lost => "Out of guesses".to_string(),
    };

    let help = match (app.screen, session.status()) {
        (Screen::Reward { checked: false }, _) => "Enter: Check Puzzle | Esc: Quit",
        (_, GameStatus::Lost) => "Enter: Try Again | Esc: Quit",
        _ => "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit",
    };

    let text = format!("Puzzle: {} | {progress} | {help}", app.puzzle.id);
    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}
