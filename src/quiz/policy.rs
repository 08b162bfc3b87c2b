//! What happens to the review file after a run.

use std::path::Path;

use crate::data::store::{self, StoreError};
use crate::models::Mode;

use super::session::QuizResult;

/// The persistence step taken for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistAction {
    /// Nothing was answered, so nothing was written.
    Skipped,
    /// A normal run with no misses; the review file was left alone.
    Untouched,
    /// A normal run's misses replaced the review file.
    Saved(usize),
    /// A review run left this many questions in the review file.
    Remaining(usize),
    /// A review run cleared every question and the review file was deleted.
    Cleared,
}

/// Apply the review-file policy for `result`.
pub fn persist(result: &QuizResult, wrong_file: &Path) -> Result<PersistAction, StoreError> {
    if !result.should_persist() {
        return Ok(PersistAction::Skipped);
    }

    let wrong = &result.wrong_list;
    match result.mode {
        Mode::Normal if wrong.is_empty() => Ok(PersistAction::Untouched),
        Mode::Normal => {
            store::save(wrong_file, wrong)?;
            Ok(PersistAction::Saved(wrong.len()))
        }
        Mode::Review if wrong.is_empty() => {
            store::update(wrong_file, &[])?;
            Ok(PersistAction::Cleared)
        }
        Mode::Review => {
            store::update(wrong_file, wrong)?;
            Ok(PersistAction::Remaining(wrong.len()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Answer, Question};
    use tempfile::TempDir;

    fn result(mode: Mode, attempted: usize, wrong_list: Vec<Question>) -> QuizResult {
        let score = attempted - wrong_list.len();
        QuizResult {
            mode,
            attempted,
            score,
            accuracy: 0.0,
            wrong_list,
            aborted: false,
        }
    }

    fn missed() -> Vec<Question> {
        vec![
            Question::new("is keyword", Answer::X, "compares identity"),
            Question::new("dicts keep insertion order", Answer::O, "since 3.7"),
        ]
    }

    fn seeded_file(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("wrong.csv");
        store::save(&path, &[Question::new("old", Answer::O, "")]).unwrap();
        path
    }

    #[test]
    fn nothing_attempted_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let path = seeded_file(&dir);

        for mode in [Mode::Normal, Mode::Review] {
            let action = persist(&result(mode, 0, Vec::new()), &path).unwrap();
            assert_eq!(action, PersistAction::Skipped);
            assert!(path.exists());
        }
    }

    #[test]
    fn normal_run_with_misses_overwrites_review_file() {
        let dir = TempDir::new().unwrap();
        let path = seeded_file(&dir);

        let action = persist(&result(Mode::Normal, 5, missed()), &path).unwrap();

        assert_eq!(action, PersistAction::Saved(2));
        assert_eq!(store::load(&path), missed());
    }

    #[test]
    fn normal_run_without_misses_leaves_review_file() {
        let dir = TempDir::new().unwrap();
        let path = seeded_file(&dir);

        let action = persist(&result(Mode::Normal, 3, Vec::new()), &path).unwrap();

        assert_eq!(action, PersistAction::Untouched);
        assert_eq!(store::load(&path).len(), 1);
    }

    #[test]
    fn review_run_keeps_only_still_wrong() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wrong.csv");
        store::save(&path, &missed()).unwrap();

        let still_wrong = missed()[..1].to_vec();
        let action = persist(&result(Mode::Review, 2, still_wrong.clone()), &path).unwrap();

        assert_eq!(action, PersistAction::Remaining(1));
        assert_eq!(store::load(&path), still_wrong);
    }

    #[test]
    fn review_run_all_correct_deletes_review_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wrong.csv");
        store::save(&path, &missed()).unwrap();

        let action = persist(&result(Mode::Review, 2, Vec::new()), &path).unwrap();

        assert_eq!(action, PersistAction::Cleared);
        assert!(!path.exists());
    }

    #[test]
    fn write_failure_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("wrong.csv");

        let err = persist(&result(Mode::Normal, 2, missed()), &path).unwrap_err();

        assert!(matches!(err, StoreError::Io { .. }));
    }
}
