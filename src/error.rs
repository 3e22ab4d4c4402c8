//! Error types shared across the crate.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::{CategoryId, QuestionId};

/// Top-level error returned by [`crate::QuizApp`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A category or quiz identifier that does not resolve.
///
/// This is an ordinary outcome: callers render a "not found" view or stay
/// where they are.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFound {
    #[error("category `{0}` not found")]
    Category(String),
    #[error("quiz `{quiz}` not found in category `{category}`")]
    Quiz { category: CategoryId, quiz: String },
}

/// Reasons a [`crate::session::QuizSession`] refuses an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    #[error("session already completed")]
    Completed,
    #[error("question {given} is not the current question ({current})")]
    WrongQuestion {
        given: QuestionId,
        current: QuestionId,
    },
    #[error("`{0}` is not an option of the current question")]
    NotAnOption(String),
}

/// Catalog document errors. All of them are fatal at startup.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid catalog document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no categories")]
    Empty,
    #[error("category `{0}` is listed more than once")]
    DuplicateCategory(CategoryId),
    #[error("quiz id `{0}` is used more than once")]
    DuplicateQuiz(String),
    #[error("quiz `{quiz}` is tagged `{tagged}` but listed under `{listed}`")]
    CategoryMismatch {
        quiz: String,
        tagged: CategoryId,
        listed: CategoryId,
    },
    #[error("quiz `{0}` has no questions")]
    NoQuestions(String),
    #[error("quiz `{quiz}` repeats question id {question}")]
    DuplicateQuestion { quiz: String, question: QuestionId },
    #[error("question {question} of quiz `{quiz}` has no options")]
    NoOptions { quiz: String, question: QuestionId },
    #[error("question {question} of quiz `{quiz}` repeats option `{option}`")]
    DuplicateOption {
        quiz: String,
        question: QuestionId,
        option: String,
    },
    #[error("question {question} of quiz `{quiz}` has correct answer `{answer}` that is not an option")]
    UnknownCorrectAnswer {
        quiz: String,
        question: QuestionId,
        answer: String,
    },
}
