//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::Game;
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long a rejection message stays on screen before it is dismissed
const ERROR_DISPLAY: Duration = Duration::from_millis(2500);

/// Event poll interval; also drives timed error dismissal
const TICK: Duration = Duration::from_millis(100);

/// Application state
pub struct App {
    pub game: Game<WordList>,
    pub input: String,
    pub show_help: bool,
    pub should_quit: bool,
    error_shown_at: Option<Instant>,
}

impl App {
    #[must_use]
    pub fn new(words: WordList) -> Self {
        Self {
            game: Game::new(words),
            input: String::new(),
            show_help: false,
            should_quit: false,
            error_shown_at: None,
        }
    }

    /// Submit the typed word to the game
    ///
    /// The input buffer is cleared either way, like the original form reset.
    pub fn submit(&mut self) {
        let guess = self.input.clone();
        self.input.clear();

        self.game.submit_guess(&guess);
        self.error_shown_at = if self.game.state().transient_error().is_some() {
            Some(Instant::now())
        } else {
            None
        };
    }

    /// Dismiss an expired rejection message
    pub fn on_tick(&mut self) {
        if let Some(shown_at) = self.error_shown_at
            && shown_at.elapsed() >= ERROR_DISPLAY
        {
            self.game.clear_error();
            self.error_shown_at = None;
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.input.clear();
        self.error_shown_at = None;
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            // Any of the usual dismissal keys closes the overlay
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?')
            ) {
                self.show_help = false;
            }
            return;
        }

        if self.game.state().status().is_terminal() {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('?') => self.show_help = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input.len() < WORD_LENGTH {
                    self.input.push(c.to_ascii_lowercase());
                }
            }
            _ => {}
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

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        app.on_tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
