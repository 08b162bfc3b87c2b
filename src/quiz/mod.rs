//! Quiz progression and the review-file policy applied when a run ends.

mod policy;
mod session;

pub use policy::{persist, PersistAction};
pub use session::{
    QuizResult, QuizSession, SessionError, SessionStatus, TurnError, TurnOutcome,
};
