mod question;

pub use question::{check_answer, Answer, ParseAnswerError, Question};

/// Which question source a run draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The full question file.
    Normal,
    /// Only questions missed in earlier runs.
    Review,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Normal => "Normal mode",
            Mode::Review => "Review mode",
        }
    }
}
