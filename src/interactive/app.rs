//! TUI application state and logic

use crate::engine::{DictionaryOracle, Rejection, RoundState, Session};
use crate::wordlists::RootWordSource;
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

/// Longest guess the input box accepts
const MAX_INPUT_LEN: usize = 32;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 6;

/// Application state
///
/// All game state lives in the session; the app only holds what the screen
/// needs on top of it.
pub struct App<D, R> {
    pub session: Session<D, R>,
    pub input_buffer: String,
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

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub best_score: u32,
    pub best_root: Option<String>,
}

impl<D, R> App<D, R> {
    #[must_use]
    pub fn state(&self) -> &RoundState {
        self.session.current_state()
    }
}

impl<D: DictionaryOracle, R: RootWordSource> App<D, R> {
    #[must_use]
    pub fn new(session: Session<D, R>) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        };
        app.add_message(
            "Welcome! Make words from the letters of the root word.",
            MessageStyle::Info,
        );
        app.add_message("Enter: submit | Ctrl-R: new word | Esc: quit", MessageStyle::Info);
        app
    }

    pub fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit_guess(&input) {
            Ok(accepted) => {
                self.add_message(
                    &format!("{} +{}", accepted.word, accepted.points),
                    MessageStyle::Success,
                );
                self.record_score();
            }
            // An empty submit just does nothing, as in the original game
            Err(Rejection::EmptyInput) => {}
            Err(rejection) => {
                let root = self.session.current_state().root_word().to_string();
                self.add_message(
                    &format!("{} {}", rejection.title(), rejection.message(&root)),
                    MessageStyle::Error,
                );
                // Keep the guess so it can be corrected
                self.input_buffer = input;
            }
        }
    }

    pub fn new_round(&mut self) {
        self.record_score();
        self.input_buffer.clear();
        self.messages.clear();

        let root = self.session.restart().root_word().to_uppercase();
        self.stats.rounds_played += 1;
        self.add_message(&format!("New round! Root word: {root}"), MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_round();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::F(5) => {
                self.new_round();
            }
            // Other Ctrl/Alt chords are shortcuts, not text
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit();
            }
            _ => {}
        }
    }

    fn record_score(&mut self) {
        let state = self.session.current_state();
        if state.score() > self.stats.best_score {
            self.stats.best_score = state.score();
            self.stats.best_root = Some(state.root_word().to_string());
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D, R>(app: App<D, R>) -> Result<()>
where
    D: DictionaryOracle,
    R: RootWordSource,
{
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, D, R>(terminal: &mut Terminal<B>, mut app: App<D, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: DictionaryOracle,
    R: RootWordSource,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
