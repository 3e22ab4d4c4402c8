//! # dev-quiz
//!
//! A terminal quiz application: browse categories, pick a quiz, answer
//! multiple-choice questions and review a scored summary.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dev_quiz::{AppOptions, QuizApp, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     // Use the catalog bundled with the binary
//!     let quiz = QuizApp::bundled(AppOptions::default())?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run().await
//! }
//! ```
//!
//! The logic core ([`Navigator`], [`QuizSession`], [`scoring`]) has no
//! terminal dependency and can drive any other front end through
//! [`view::screen`].

mod app;
mod data;
mod error;
mod models;
pub mod navigation;
pub mod scoring;
pub mod session;
pub mod terminal;
pub mod ticker;
mod ui;
pub mod view;

use std::path::Path;

use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc;

pub use app::{App, AppOptions, DEFAULT_TICK_INTERVAL};
pub use data::{load_bundled_catalog, load_catalog_from_path, parse_catalog, validate_catalog};
pub use error::{AnswerError, CatalogError, NotFound, QuizError};
pub use models::{Catalog, Category, CategoryId, Difficulty, Question, QuestionId, Quiz};
pub use navigation::{NavEvent, NavigationState, Navigator};
pub use session::{Advance, AnswerPolicy, QuizSession};

use navigation::NavigationState as State;
use terminal::TerminalSession;
use ticker::TickerSlot;

/// A quiz application ready to take over the terminal.
pub struct QuizApp {
    app: App,
}

impl QuizApp {
    pub fn new(catalog: Catalog, options: AppOptions) -> Self {
        Self {
            app: App::new(catalog, options),
        }
    }

    /// Build the app around the catalog shipped with the crate.
    pub fn bundled(options: AppOptions) -> Result<Self, QuizError> {
        Ok(Self::new(load_bundled_catalog()?, options))
    }

    /// Load a catalog document from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use dev_quiz::{AppOptions, QuizApp};
    ///
    /// let quiz = QuizApp::from_json("quizzes.json", AppOptions::default())
    ///     .expect("Failed to load catalog");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, options: AppOptions) -> Result<Self, QuizError> {
        Ok(Self::new(load_catalog_from_path(path)?, options))
    }

    /// Run until the user quits.
    ///
    /// Takes over the terminal for the duration and restores it on return.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = TerminalSession::enter()?;
        run_event_loop(&mut term, &mut self.app).await
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(terminal: &mut TerminalSession, app: &mut App) -> Result<(), QuizError> {
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let mut ticker = TickerSlot::new(app.options().tick_interval, tick_tx);
    let mut events = EventStream::new();

    loop {
        ticker.sync(app.active_session_id());
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if handle_input(app, key.code) {
                        break;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            Some(tick) = tick_rx.recv() => {
                app.on_tick(tick);
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }

    match app.state() {
        State::Home => handle_home_input(app, key),
        State::CategoryView { .. } => handle_category_input(app, key),
        State::QuizInProgress { .. } => handle_quiz_input(app, key),
        State::QuizResults { .. } => handle_results_input(app, key),
    }
    false
}

fn handle_home_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Enter => app.confirm(),
        _ => {}
    }
}

fn handle_category_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Enter => app.confirm(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => app.back(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Enter | KeyCode::Char(' ') => app.confirm(),
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit as usize - '1' as usize;
            app.choose_option(index);
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => app.next(),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => app.previous(),
        KeyCode::Esc | KeyCode::Char('b') => app.back(),
        _ => {}
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.retry(),
        KeyCode::Esc | KeyCode::Char('b') => app.back(),
        KeyCode::Char('H') => app.go_home(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(load_bundled_catalog().unwrap(), AppOptions::default())
    }

    #[test]
    fn test_q_quits_from_any_screen() {
        let mut app = app();
        assert!(handle_input(&mut app, KeyCode::Char('q')));

        handle_input(&mut app, KeyCode::Enter);
        handle_input(&mut app, KeyCode::Enter);
        assert!(matches!(app.state(), State::QuizInProgress { .. }));
        assert!(handle_input(&mut app, KeyCode::Char('Q')));
    }

    #[test]
    fn test_keyboard_walk_through_quiz() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Char('j'));
        handle_input(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.state(),
            State::CategoryView {
                category: CategoryId::Backend
            }
        ));

        handle_input(&mut app, KeyCode::Enter);
        // "HTTP & REST APIs": 404, POST (with explanation), Content-Type.
        for key in ['3', 'n', '4', 'n', 'n', '2', 'n'] {
            assert!(!handle_input(&mut app, KeyCode::Char(key)));
        }

        let State::QuizResults { score, total, .. } = app.state() else {
            panic!("expected results, got {}", app.state().name());
        };
        assert_eq!((*score, *total), (3, 3));

        handle_input(&mut app, KeyCode::Char('H'));
        assert!(matches!(app.state(), State::Home));
    }

    #[test]
    fn test_escape_leaves_quiz_for_category() {
        let mut app = app();
        handle_input(&mut app, KeyCode::Enter);
        handle_input(&mut app, KeyCode::Enter);
        handle_input(&mut app, KeyCode::Char('1'));

        handle_input(&mut app, KeyCode::Esc);
        assert!(matches!(
            app.state(),
            State::CategoryView {
                category: CategoryId::Frontend
            }
        ));
        assert!(app.active_session_id().is_none());

        handle_input(&mut app, KeyCode::Esc);
        assert!(matches!(app.state(), State::Home));
    }
}
