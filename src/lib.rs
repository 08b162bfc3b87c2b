//! # ox-quiz
//!
//! A terminal O/X (true/false) quiz. Questions are read from a CSV file,
//! missed questions are saved to a review file, and a review run prunes
//! that file down to the questions that are still answered wrong.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ox_quiz::{Exit, Quiz, QuizError, QuizFiles};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::new(QuizFiles::new("ox_quiz_python.csv", "wrong.csv"));
//!
//!     // Run the quiz in the terminal until the user exits
//!     if quiz.run()? == Exit::Interrupted {
//!         println!("Interrupted.");
//!     }
//!
//!     Ok(())
//! }
//! ```

mod app;
mod data;
mod models;
mod quiz;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use thiserror::Error;

pub use app::{App, AppState, Exit, Explanation, QuizFiles};
pub use data::store::{load, save, try_load, update};
pub use data::{LoadError, StoreError};
pub use models::{check_answer, Answer, Mode, ParseAnswerError, Question};
pub use quiz::{
    persist, PersistAction, QuizResult, QuizSession, SessionError, SessionStatus, TurnError,
    TurnOutcome,
};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Terminal I/O failed while the quiz was running.
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    pub fn new(files: QuizFiles) -> Self {
        Self {
            app: App::new(files),
        }
    }

    /// Run the quiz in the terminal.
    ///
    /// This takes over the terminal, shows the menu, and returns once the
    /// user exits from the menu or presses Ctrl-C.
    pub fn run(mut self) -> Result<Exit, QuizError> {
        let mut term = terminal::init()?;
        run_event_loop(&mut term, &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<Exit, QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if let Some(exit) = app.handle_key(key) {
                return Ok(exit);
            }
        }
    }
}
