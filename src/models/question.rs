use std::fmt;
use std::str::FromStr;

/// One of the two answer tokens a question accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    O,
    X,
}

impl Answer {
    pub fn as_str(self) -> &'static str {
        match self {
            Answer::O => "O",
            Answer::X => "X",
        }
    }

    /// Parse a token after trimming and upper-casing it.
    ///
    /// Returns `None` for anything other than `O` or `X`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_uppercase().as_str() {
            "O" => Some(Answer::O),
            "X" => Some(Answer::X),
            _ => None,
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `O` nor `X`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected O or X, got {0:?}")]
pub struct ParseAnswerError(pub String);

impl FromStr for Answer {
    type Err = ParseAnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Answer::parse(s).ok_or_else(|| ParseAnswerError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub correct_answer: Answer,
    pub explanation: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, correct_answer: Answer, explanation: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            correct_answer,
            explanation: explanation.into(),
        }
    }

    pub fn is_correct(&self, answer: Answer) -> bool {
        self.correct_answer == answer
    }
}

/// Compare a raw user token against the correct answer.
///
/// `None` means the token is not a valid answer at all; callers re-prompt
/// instead of scoring it.
pub fn check_answer(token: &str, correct: Answer) -> Option<bool> {
    Answer::parse(token).map(|answer| answer == correct)
}
