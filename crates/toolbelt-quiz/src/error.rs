//! Error types for loading and running a quiz.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for quiz operations.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Everything that can stop a quiz before or during a run.
#[derive(Error, Debug)]
pub enum QuizError {
    /// The problem file could not be opened
    #[error("Failed to open the CSV file: {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The problem file is not valid CSV
    #[error("Failed to read the CSV file: {0}")]
    FileRead(#[from] csv::Error),

    /// A record with fewer than the two required fields
    #[error("Malformed record on line {line}: expected 'question,answer' but found {fields} field(s)")]
    MalformedRecord { line: u64, fields: usize },

    /// Reading an answer from the user failed
    #[error("Cannot read from input: {0}")]
    InputRead(String),

    /// Writing a prompt failed
    #[error("Failed to write to output: {0}")]
    Output(#[from] std::io::Error),
}

impl QuizError {
    /// Create a new input read error.
    pub fn input_read(msg: impl Into<String>) -> Self {
        Self::InputRead(msg.into())
    }
}
