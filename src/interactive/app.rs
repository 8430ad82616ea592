//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{Game, GameState};
use crate::profile::{ProfileError, Profiles};
use crate::stats::PlayerStatistics;
use crate::store::UserId;
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MESSAGE_LIMIT: usize = 5;

/// Application state
pub struct App<'a> {
    pub words: Dictionary,
    pub profiles: &'a Profiles,
    pub user: UserId,
    pub hard_mode: bool,
    pub game: Game,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: PlayerStatistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
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
    /// Start the first game; stored statistics are shown if they can be loaded
    #[must_use]
    pub fn new(words: Dictionary, profiles: &'a Profiles, user: UserId, hard_mode: bool) -> Self {
        let game = Game::from_source(&words, hard_mode);
        let mut app = Self {
            words,
            profiles,
            user,
            hard_mode,
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: PlayerStatistics::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
        };

        match profiles.initialize(&app.user) {
            Ok(stats) => app.stats = stats,
            Err(e) => {
                log::warn!("could not load profile: {e}");
                app.add_message(&e.to_string(), MessageStyle::Error);
            }
        }

        app.add_message("Welcome! Guess the five-letter word.", MessageStyle::Info);
        if hard_mode {
            app.add_message("Hard mode: revealed hints must be reused.", MessageStyle::Info);
        }
        app
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < WORD_LENGTH {
                        self.input_buffer.push(c.to_ascii_uppercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }

    pub fn submit_guess(&mut self) {
        if self.input_buffer.len() < WORD_LENGTH {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        let submitted = self
            .game
            .submit(&self.input_buffer, &self.words)
            .map(|_| ());
        if let Err(e) = submitted {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }
        self.input_buffer.clear();

        if self.game.is_over() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;

        match self.game.state() {
            GameState::Won => {
                let celebration = match self.game.turns().len() {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);
            }
            GameState::Lost | GameState::InProgress => {
                let reveal = format!("The word was {}", self.game.target());
                self.add_message(&reveal, MessageStyle::Error);
            }
        }

        if let Some(finished) = self.game.record() {
            match self.profiles.record_game(&self.user, &finished) {
                Ok(recorded) => {
                    self.stats = recorded.stats;
                    for achievement in recorded.unlocked {
                        let text = format!("🏆 Achievement unlocked: {}", achievement.title());
                        self.add_message(&text, MessageStyle::Success);
                    }
                }
                Err(ProfileError::Persistence { pending, source }) => {
                    self.stats = *pending;
                    self.add_message(
                        &format!("Statistics not saved: {source}"),
                        MessageStyle::Error,
                    );
                }
                Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
            }
        }

        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        if let Err(e) = self.words.next_target() {
            self.add_message(&e.to_string(), MessageStyle::Error);
            return;
        }
        self.game = Game::from_source(&self.words, self.hard_mode);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MESSAGE_LIMIT {
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
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }
    }
    Ok(())
}
