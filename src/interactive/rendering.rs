//! TUI rendering with ratatui
//!
//! Guess grid, keyboard hints and the player's statistics.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterStatus, QWERTY_ROWS, WORD_LENGTH};
use crate::output::formatters::distribution_bar;
use crate::stats::MAX_GUESSES;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(16),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Empty => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.hard_mode {
        "🟩 WORDLE MATES - Hard Mode"
    } else {
        "🟩 WORDLE MATES"
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(MAX_GUESSES as u16 + 2),
            Constraint::Min(5),
        ])
        .split(area);

    render_grid(f, app, chunks[0]);
    render_keyboard(f, app, chunks[1]);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let turns = app.game.turns();
    let mut lines = Vec::with_capacity(MAX_GUESSES);

    for row in 0..MAX_GUESSES {
        let spans: Vec<Span> = if let Some(turn) = turns.get(row) {
            turn.guess
                .chars()
                .iter()
                .zip(turn.evaluation.statuses())
                .map(|(&letter, &status)| {
                    Span::styled(format!(" {} ", char::from(letter)), status_style(status))
                })
                .collect()
        } else if row == turns.len() && app.input_mode == InputMode::Guessing {
            let typed = app.input_buffer.chars().map(Some);
            typed
                .chain(std::iter::repeat(None))
                .take(WORD_LENGTH)
                .map(|letter| {
                    Span::styled(
                        format!(" {} ", letter.unwrap_or('_')),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                })
                .collect()
        } else {
            vec![Span::styled(
                " · ".repeat(WORD_LENGTH),
                Style::default().fg(Color::DarkGray),
            )]
        };
        lines.push(Line::from(spans));
    }

    let grid = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Guesses ({} left) ", app.game.guesses_remaining()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.keyboard();
    let lines: Vec<Line> = QWERTY_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .map(|key| {
                    Span::styled(
                        format!(" {} ", char::from(key)),
                        status_style(keyboard.status(key)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(MAX_GUESSES as u16 + 4),
            Constraint::Min(3),
        ])
        .split(area);

    render_win_rate(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_win_rate(f: &mut Frame, app: &App, area: Rect) {
    let percent = app.stats.win_percentage().min(100) as u16;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ", app.user))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(format!(
            "{percent}% won | {} played",
            app.stats.games_played
        ));
    f.render_widget(gauge, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let max = stats.max_distribution();
    let last_win = match (app.input_mode, app.game.outcome()) {
        (InputMode::GameOver, Some(outcome)) if outcome.won => Some(outcome.guesses_used),
        _ => None,
    };

    let mut lines = vec![
        Line::from(format!(
            "Streak: {}   Best: {}",
            stats.current_streak, stats.max_streak
        )),
        Line::from(format!("Average: {:.1} guesses", stats.average_guesses)),
    ];
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let style = if last_win == Some(i as u8 + 1) {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{}: ", i + 1)),
            Span::styled(distribution_bar(count, max, 16), style),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Type a guess and press Enter ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Submit | Backspace: Delete",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
