use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::data::{store, LoadError};
use crate::models::{Mode, Question};
use crate::quiz::{self, PersistAction, QuizResult, QuizSession, TurnError, TurnOutcome};

/// A normal run over fewer questions than this asks for confirmation first.
const SMALL_SET_THRESHOLD: usize = 3;

/// Locations of the question source and the review file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizFiles {
    pub questions: PathBuf,
    pub wrong: PathBuf,
}

impl QuizFiles {
    pub fn new(questions: impl Into<PathBuf>, wrong: impl Into<PathBuf>) -> Self {
        Self {
            questions: questions.into(),
            wrong: wrong.into(),
        }
    }
}

/// Why the app stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// The user picked "exit" from the menu.
    Quit,
    /// Ctrl-C was pressed.
    Interrupted,
}

/// Whether the explanation of a missed question is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Explanation {
    /// Asking the user whether to show it.
    Offered,
    Shown,
    Hidden,
}

/// The screen currently displayed.
#[derive(Debug, Clone)]
pub enum AppState {
    Menu {
        error: Option<String>,
    },

    /// An informational message; Enter returns to the menu.
    Notice {
        message: String,
    },

    /// A normal run with very few questions, waiting for Y/N.
    ConfirmSmallSet {
        questions: Vec<Question>,
    },

    /// Run is set up; Enter shows the first question.
    Intro,

    /// Typing an answer token for the current question.
    Question {
        input: String,
        error: Option<String>,
    },

    /// The quit token was entered, waiting for Y/N.
    ConfirmQuit,

    /// Showing whether the last answer was right.
    Feedback {
        question: Question,
        correct: bool,
        explanation: Explanation,
    },

    /// Run summary and what happened to the review file.
    Result {
        result: QuizResult,
        persistence: Option<Result<PersistAction, String>>,
    },
}

impl AppState {
    fn menu() -> Self {
        Self::Menu { error: None }
    }

    fn question() -> Self {
        Self::Question {
            input: String::new(),
            error: None,
        }
    }
}

pub struct App {
    pub state: AppState,
    files: QuizFiles,
    session: Option<QuizSession>,
}

impl App {
    pub fn new(files: QuizFiles) -> Self {
        Self {
            state: AppState::menu(),
            files,
            session: None,
        }
    }

    pub fn files(&self) -> &QuizFiles {
        &self.files
    }

    /// The active run, if one is in progress or awaiting its result screen.
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    /// Handle one key press. Returns `Some` when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Exit> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("interrupted by user");
            return Some(Exit::Interrupted);
        }

        match self.state {
            AppState::Menu { .. } => return self.handle_menu(key.code),
            AppState::Notice { .. } => {
                if key.code == KeyCode::Enter {
                    self.state = AppState::menu();
                }
            }
            AppState::ConfirmSmallSet { .. } => self.handle_small_set(key.code),
            AppState::Intro => {
                if key.code == KeyCode::Enter {
                    self.state = AppState::question();
                }
            }
            AppState::Question { .. } => self.handle_question(key.code),
            AppState::ConfirmQuit => self.handle_confirm_quit(key.code),
            AppState::Feedback { .. } => self.handle_feedback(key.code),
            AppState::Result { .. } => {
                if key.code == KeyCode::Enter {
                    self.state = AppState::menu();
                }
            }
        }

        None
    }

    fn handle_menu(&mut self, key: KeyCode) -> Option<Exit> {
        match key {
            KeyCode::Char('1') => self.start_normal(),
            KeyCode::Char('2') => self.start_review(),
            KeyCode::Char('3') => return Some(Exit::Quit),
            KeyCode::Char(_) | KeyCode::Enter => {
                self.state = AppState::Menu {
                    error: Some("Invalid choice. Please press 1, 2 or 3.".to_string()),
                };
            }
            _ => {}
        }
        None
    }

    fn handle_small_set(&mut self, key: KeyCode) {
        let AppState::ConfirmSmallSet { questions } =
            std::mem::replace(&mut self.state, AppState::menu())
        else {
            return;
        };

        if is_yes(key) {
            self.begin(questions, Mode::Normal);
        }
    }

    fn handle_question(&mut self, key: KeyCode) {
        let AppState::Question { input, error } = &mut self.state else {
            return;
        };

        match key {
            KeyCode::Char(c) => {
                *error = None;
                input.push(c);
            }
            KeyCode::Backspace => {
                *error = None;
                input.pop();
            }
            KeyCode::Enter => {
                let token = std::mem::take(input);
                self.submit(&token);
            }
            _ => {}
        }
    }

    fn submit(&mut self, token: &str) {
        let Some(session) = self.session.as_mut() else {
            self.state = AppState::menu();
            return;
        };

        match session.submit(token) {
            Ok(TurnOutcome::QuitRequested) => self.state = AppState::ConfirmQuit,
            Ok(TurnOutcome::Answered { question, correct }) => {
                let explanation = if correct {
                    Explanation::Hidden
                } else {
                    Explanation::Offered
                };
                self.state = AppState::Feedback {
                    question,
                    correct,
                    explanation,
                };
            }
            Err(TurnError::InvalidToken(_)) => {
                self.state = AppState::Question {
                    input: String::new(),
                    error: Some("Only O or X is accepted!".to_string()),
                };
            }
            Err(TurnError::QuitPending) => self.state = AppState::ConfirmQuit,
            Err(TurnError::Finished) => self.finish_run(),
        }
    }

    fn handle_confirm_quit(&mut self, key: KeyCode) {
        let confirmed = is_yes(key);
        if let Some(session) = self.session.as_mut() {
            session.confirm_quit(confirmed);
        }

        if confirmed {
            self.finish_run();
        } else {
            self.state = AppState::question();
        }
    }

    fn handle_feedback(&mut self, key: KeyCode) {
        let AppState::Feedback { explanation, .. } = &mut self.state else {
            return;
        };

        match *explanation {
            Explanation::Offered => {
                *explanation = if is_yes(key) {
                    Explanation::Shown
                } else {
                    Explanation::Hidden
                };
            }
            Explanation::Shown | Explanation::Hidden => {
                if key == KeyCode::Enter {
                    self.advance();
                }
            }
        }
    }

    fn advance(&mut self) {
        match &self.session {
            Some(session) if !session.is_finished() => self.state = AppState::question(),
            _ => self.finish_run(),
        }
    }

    fn start_normal(&mut self) {
        let path = &self.files.questions;
        let questions = match store::try_load(path) {
            Ok(questions) if !questions.is_empty() => questions,
            Ok(_) | Err(LoadError::NotFound { .. }) => {
                self.state = AppState::Notice {
                    message: format!("{} could not be found or is empty!", path.display()),
                };
                return;
            }
            Err(err) => {
                warn!(error = %err, "question file rejected");
                self.state = AppState::Notice {
                    message: format!("Could not load questions: {err}"),
                };
                return;
            }
        };

        if questions.len() < SMALL_SET_THRESHOLD {
            self.state = AppState::ConfirmSmallSet { questions };
        } else {
            self.begin(questions, Mode::Normal);
        }
    }

    fn start_review(&mut self) {
        let questions = store::load(&self.files.wrong);
        if questions.is_empty() {
            self.state = AppState::Notice {
                message: "There are no wrong answers to review!".to_string(),
            };
            return;
        }

        self.begin(questions, Mode::Review);
    }

    fn begin(&mut self, questions: Vec<Question>, mode: Mode) {
        match QuizSession::start(questions, mode) {
            Ok(session) => {
                self.session = Some(session);
                self.state = AppState::Intro;
            }
            Err(err) => {
                self.state = AppState::Notice {
                    message: err.to_string(),
                };
            }
        }
    }

    fn finish_run(&mut self) {
        let Some(session) = self.session.take() else {
            self.state = AppState::menu();
            return;
        };

        let result = session.finish();
        let persistence = result.should_persist().then(|| {
            quiz::persist(&result, &self.files.wrong).map_err(|err| {
                warn!(error = %err, "failed to update review file");
                err.to_string()
            })
        });

        self.state = AppState::Result {
            result,
            persistence,
        };
    }
}

/// Yes/no answers accept only `y`; anything else means no.
fn is_yes(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('y') | KeyCode::Char('Y'))
}
