//! Question file storage.
//!
//! Questions live in a comma-separated file with a Korean header row
//! (`질문`, `정답`, `해설`). The same format backs both the main question
//! source and the review file of missed questions. An absent file is a
//! normal state meaning "no questions", and saving an empty list deletes
//! the file instead of leaving a header-only stub behind.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::{Answer, Question};

const UTF8_BOM: &str = "\u{feff}";

/// Errors that can occur while reading a question file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("{} does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The file is not valid CSV or lacks a required column.
    #[error("failed to parse {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },

    /// A record's answer column is neither `O` nor `X`.
    #[error("row {row}: answer must be O or X, got {value:?}")]
    InvalidAnswer { row: usize, value: String },
}

/// Errors that can occur while writing or deleting a question file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to encode {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },
}

/// One row of the question file, as it appears on disk.
#[derive(Debug, Serialize, Deserialize)]
struct QuestionRecord {
    #[serde(rename = "질문")]
    prompt: String,
    #[serde(rename = "정답")]
    answer: String,
    #[serde(rename = "해설", default)]
    explanation: String,
}

impl QuestionRecord {
    fn into_question(self, row: usize) -> Result<Question, LoadError> {
        let answer = Answer::parse(&self.answer).ok_or_else(|| LoadError::InvalidAnswer {
            row,
            value: self.answer.clone(),
        })?;
        Ok(Question::new(self.prompt, answer, self.explanation))
    }
}

impl From<&Question> for QuestionRecord {
    fn from(question: &Question) -> Self {
        Self {
            prompt: question.prompt.clone(),
            answer: question.correct_answer.to_string(),
            explanation: question.explanation.clone(),
        }
    }
}

/// Load every question from `path`, reporting why nothing could be loaded.
///
/// A leading byte-order mark is ignored. A header-only or empty file yields
/// an empty list. A single record with an invalid answer rejects the file.
pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            LoadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(&content);

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut questions = Vec::new();
    for (index, record) in reader.deserialize::<QuestionRecord>().enumerate() {
        let record = record.map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        questions.push(record.into_question(index + 1)?);
    }

    info!(path = %path.display(), count = questions.len(), "loaded questions");
    Ok(questions)
}

/// Load every question from `path`, degrading any failure to an empty list.
pub fn load<P: AsRef<Path>>(path: P) -> Vec<Question> {
    match try_load(path) {
        Ok(questions) => questions,
        Err(LoadError::NotFound { path }) => {
            debug!(path = %path.display(), "question file absent");
            Vec::new()
        }
        Err(err) => {
            warn!(error = %err, "could not load questions");
            Vec::new()
        }
    }
}

/// Replace the contents of `path` with exactly `questions`.
///
/// An empty list deletes the file; deleting a file that is already gone
/// succeeds.
pub fn save<P: AsRef<Path>>(path: P, questions: &[Question]) -> Result<(), StoreError> {
    let path = path.as_ref();

    if questions.is_empty() {
        return remove_if_present(path);
    }

    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let csv_err = |source| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(UTF8_BOM.as_bytes()).map_err(io_err)?;

    let mut writer = csv::Writer::from_writer(file);
    for question in questions {
        writer
            .serialize(QuestionRecord::from(question))
            .map_err(csv_err)?;
    }
    writer.flush().map_err(io_err)?;

    info!(path = %path.display(), count = questions.len(), "saved questions");
    Ok(())
}

/// Store the questions still left to review. Same behavior as [`save`].
pub fn update<P: AsRef<Path>>(path: P, remaining: &[Question]) -> Result<(), StoreError> {
    save(path, remaining)
}

fn remove_if_present(path: &Path) -> Result<(), StoreError> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!(path = %path.display(), "removed question file");
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
