//! Timed quiz runner over `question,answer` CSV files.
//!
//! Problems are loaded up front, then asked one at a time under a single
//! deadline that covers the whole run. Each answer is compared against the
//! expected one after trimming whitespace, and the outcome is tallied on a
//! [`ScoreSheet`].

pub mod error;
pub mod problem;
pub mod runner;
pub mod score;

pub use error::{QuizError, Result};
pub use problem::{load_problems, parse_records, read_problems, Problem};
pub use runner::{AnswerSource, LineSource, Quiz, QuizConfig};
pub use score::ScoreSheet;
