//! A single quiz run.
//!
//! The session owns the shuffled question order, the running score and the
//! list of missed questions. It performs no terminal I/O: the caller feeds it
//! raw answer tokens and renders whatever it reports back.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Answer, Mode, Question};

/// Tokens that ask to stop the run, compared after trim and upper-case.
const QUIT_TOKENS: [&str; 2] = ["Q", "QUIT"];

/// Errors raised when starting a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("there are no questions to ask")]
    NoQuestions,
}

/// Errors raised by a single answer submission. None of them change state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("only O or X is accepted, got {0:?}")]
    InvalidToken(String),
    #[error("a quit confirmation is pending")]
    QuitPending,
    #[error("the quiz is already over")]
    Finished,
}

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Waiting for an answer to the current question.
    InProgress,
    /// The quit token was entered; waiting for yes/no.
    ConfirmingQuit,
    /// Every question was answered, or the user confirmed quitting.
    Finished { aborted: bool },
}

/// What a successful submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The answer was scored and the session moved past the question.
    Answered { question: Question, correct: bool },
    /// The user asked to stop; call [`QuizSession::confirm_quit`] next.
    QuitRequested,
}

/// Summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResult {
    pub mode: Mode,
    /// Fully completed turns, not counting an aborted in-flight question.
    pub attempted: usize,
    pub score: usize,
    /// Percentage of attempted questions answered correctly.
    pub accuracy: f64,
    pub wrong_list: Vec<Question>,
    pub aborted: bool,
}

impl QuizResult {
    /// Whether anything was answered, and so whether the run should be persisted.
    pub fn should_persist(&self) -> bool {
        self.attempted > 0
    }
}

pub struct QuizSession {
    mode: Mode,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    wrong_list: Vec<Question>,
    status: SessionStatus,
}

impl QuizSession {
    /// Start a run over `questions` in a freshly shuffled order.
    pub fn start(questions: Vec<Question>, mode: Mode) -> Result<Self, SessionError> {
        Self::start_with_rng(questions, mode, &mut rand::rng())
    }

    /// Start a run, shuffling with the given random number generator.
    pub fn start_with_rng<R: Rng + ?Sized>(
        mut questions: Vec<Question>,
        mode: Mode,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }

        questions.shuffle(rng);
        info!(?mode, total = questions.len(), "quiz started");

        Ok(Self {
            mode,
            questions,
            current_index: 0,
            score: 0,
            wrong_list: Vec::new(),
            status: SessionStatus::InProgress,
        })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, SessionStatus::Finished { .. })
    }

    /// The question being asked, or `None` once the run is over.
    pub fn current_question(&self) -> Option<&Question> {
        if self.is_finished() {
            return None;
        }
        self.questions.get(self.current_index)
    }

    /// 1-based number of the current question and the total.
    pub fn position(&self) -> (usize, usize) {
        (self.current_index + 1, self.questions.len())
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn wrong_list(&self) -> &[Question] {
        &self.wrong_list
    }

    /// Submit a raw answer token for the current question.
    pub fn submit(&mut self, token: &str) -> Result<TurnOutcome, TurnError> {
        match self.status {
            SessionStatus::Finished { .. } => return Err(TurnError::Finished),
            SessionStatus::ConfirmingQuit => return Err(TurnError::QuitPending),
            SessionStatus::InProgress => {}
        }

        let normalized = token.trim().to_uppercase();
        if QUIT_TOKENS.contains(&normalized.as_str()) {
            self.status = SessionStatus::ConfirmingQuit;
            return Ok(TurnOutcome::QuitRequested);
        }

        let Some(answer) = Answer::parse(&normalized) else {
            debug!(token, "rejected answer token");
            return Err(TurnError::InvalidToken(token.to_string()));
        };

        let question = self.questions[self.current_index].clone();
        let correct = question.is_correct(answer);
        if correct {
            self.score += 1;
        } else {
            self.wrong_list.push(question.clone());
        }

        self.current_index += 1;
        if self.current_index == self.questions.len() {
            self.status = SessionStatus::Finished { aborted: false };
        }

        Ok(TurnOutcome::Answered { question, correct })
    }

    /// Resolve a pending quit request.
    ///
    /// Declining resumes the current question. Confirming ends the run
    /// without counting the question that was on screen.
    pub fn confirm_quit(&mut self, confirmed: bool) {
        if self.status != SessionStatus::ConfirmingQuit {
            return;
        }

        if confirmed {
            info!(attempted = self.current_index, "quiz aborted");
            self.status = SessionStatus::Finished { aborted: true };
        } else {
            self.status = SessionStatus::InProgress;
        }
    }

    /// Consume the session and summarize the run.
    pub fn finish(self) -> QuizResult {
        let attempted = self.current_index;
        let accuracy = if attempted > 0 {
            self.score as f64 / attempted as f64 * 100.0
        } else {
            0.0
        };
        let aborted = matches!(self.status, SessionStatus::Finished { aborted: true })
            || self.current_index < self.questions.len();

        info!(attempted, score = self.score, wrong = self.wrong_list.len(), "quiz finished");

        QuizResult {
            mode: self.mode,
            attempted,
            score: self.score,
            accuracy,
            wrong_list: self.wrong_list,
            aborted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn questions(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                let answer = if i % 2 == 0 { Answer::O } else { Answer::X };
                Question::new(format!("question {i}"), answer, format!("because {i}"))
            })
            .collect()
    }

    fn start(n: usize, mode: Mode) -> QuizSession {
        QuizSession::start_with_rng(questions(n), mode, &mut StdRng::seed_from_u64(7)).unwrap()
    }

    fn right(session: &QuizSession) -> &'static str {
        session.current_question().unwrap().correct_answer.as_str()
    }

    fn wrong(session: &QuizSession) -> &'static str {
        match session.current_question().unwrap().correct_answer {
            Answer::O => "x",
            Answer::X => "o",
        }
    }

    #[test]
    fn start_rejects_empty_list() {
        let result = QuizSession::start(Vec::new(), Mode::Normal);
        assert_eq!(result.err(), Some(SessionError::NoQuestions));
    }

    #[test]
    fn start_shuffles_deterministically_with_seed() {
        let a = start(10, Mode::Normal);
        let b = start(10, Mode::Normal);
        assert_eq!(a.questions, b.questions);

        let mut prompts: Vec<_> = a.questions.iter().map(|q| q.prompt.clone()).collect();
        prompts.sort();
        let mut expected: Vec<_> = questions(10).into_iter().map(|q| q.prompt).collect();
        expected.sort();
        assert_eq!(prompts, expected);
    }

    #[test]
    fn position_is_one_based() {
        let mut session = start(3, Mode::Normal);
        assert_eq!(session.position(), (1, 3));

        let token = right(&session);
        session.submit(token).unwrap();
        assert_eq!(session.position(), (2, 3));
    }

    #[test]
    fn correct_answer_increments_score() {
        let mut session = start(2, Mode::Normal);
        let expected = session.current_question().unwrap().clone();

        let token = right(&session).to_lowercase();
        let outcome = session.submit(&format!("  {token} ")).unwrap();

        assert_eq!(outcome, TurnOutcome::Answered { question: expected, correct: true });
        assert_eq!(session.score(), 1);
        assert_eq!(session.current_index(), 1);
        assert!(session.wrong_list().is_empty());
    }

    #[test]
    fn incorrect_answer_is_collected() {
        let mut session = start(2, Mode::Normal);
        let missed = session.current_question().unwrap().clone();

        let token = wrong(&session);
        let outcome = session.submit(token).unwrap();

        assert_eq!(outcome, TurnOutcome::Answered { question: missed.clone(), correct: false });
        assert_eq!(session.score(), 0);
        assert_eq!(session.wrong_list(), &[missed]);
    }

    #[test]
    fn invalid_token_does_not_consume_turn() {
        let mut session = start(2, Mode::Normal);
        let before = session.current_question().unwrap().clone();

        for token in ["", "maybe", "0", "y", "OX"] {
            assert_eq!(session.submit(token), Err(TurnError::InvalidToken(token.to_string())));
        }

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_question(), Some(&before));
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[test]
    fn quit_declined_resumes_same_turn() {
        let mut session = start(3, Mode::Normal);
        let before = session.current_question().unwrap().clone();

        assert_eq!(session.submit("q"), Ok(TurnOutcome::QuitRequested));
        assert_eq!(session.status(), SessionStatus::ConfirmingQuit);
        assert_eq!(session.submit("o"), Err(TurnError::QuitPending));

        session.confirm_quit(false);
        assert_eq!(session.status(), SessionStatus::InProgress);
        assert_eq!(session.current_question(), Some(&before));

        let token = right(&session);
        session.submit(token).unwrap();
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn quit_confirmed_ends_without_counting_current_turn() {
        let mut session = start(4, Mode::Normal);
        let token = right(&session);
        session.submit(token).unwrap();

        assert_eq!(session.submit(" Quit "), Ok(TurnOutcome::QuitRequested));
        session.confirm_quit(true);

        assert_eq!(session.status(), SessionStatus::Finished { aborted: true });
        assert_eq!(session.current_question(), None);
        assert_eq!(session.submit("o"), Err(TurnError::Finished));

        let result = session.finish();
        assert_eq!(result.attempted, 1);
        assert_eq!(result.score, 1);
        assert!(result.aborted);
    }

    #[test]
    fn immediate_abort_has_nothing_to_persist() {
        let mut session = start(3, Mode::Review);
        session.submit("Q").unwrap();
        session.confirm_quit(true);

        let result = session.finish();
        assert_eq!(result.attempted, 0);
        assert_eq!(result.accuracy, 0.0);
        assert!(!result.should_persist());
    }

    #[test]
    fn confirm_quit_without_request_is_ignored() {
        let mut session = start(2, Mode::Normal);
        session.confirm_quit(true);
        assert_eq!(session.status(), SessionStatus::InProgress);
    }

    #[test]
    fn five_questions_three_right_two_wrong() {
        let mut session = start(5, Mode::Normal);
        let mut missed = Vec::new();

        for turn in 0..5 {
            if turn < 3 {
                let token = right(&session);
                session.submit(token).unwrap();
            } else {
                missed.push(session.current_question().unwrap().clone());
                let token = wrong(&session);
                session.submit(token).unwrap();
            }
        }

        assert_eq!(session.status(), SessionStatus::Finished { aborted: false });

        let result = session.finish();
        assert_eq!(result.attempted, 5);
        assert_eq!(result.score, 3);
        assert!((result.accuracy - 60.0).abs() < 1e-9);
        assert_eq!(result.wrong_list, missed);
        assert!(!result.aborted);
        assert!(result.should_persist());
    }
}
