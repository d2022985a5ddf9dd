use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Cannot read quiz file {path}: {source}")]
    ReadQuiz {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid frontmatter: {0}")]
    Frontmatter(#[from] serde_yaml::Error),

    #[error("Invalid quiz: {0}")]
    InvalidQuiz(String),

    /// `number` counts from 1, as on the command line.
    #[error("Question {number} out of range ({len} questions)")]
    QuestionOutOfRange { number: usize, len: usize },

    #[error("Answer option {index} out of range ({len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("Cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Terminal error: {0}")]
    Terminal(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, QuizError>;
