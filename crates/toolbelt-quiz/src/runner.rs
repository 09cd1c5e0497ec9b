//! The timed question loop.
//!
//! A single deadline covers the whole run. Every question spawns a detached
//! reader thread that blocks on the next line of input and reports whether it
//! matched; the loop takes whichever of deadline and answer is ready first.
//!
//! Known limitation: when the deadline wins, the reader for the current
//! question is not cancelled. It stays blocked on input until a line arrives
//! or the process exits, and its result is dropped.

use crate::error::{QuizError, Result};
use crate::problem::{load_problems, Problem};
use crate::score::ScoreSheet;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;
use tokio::sync::oneshot;

/// A blocking source of answer lines.
pub trait AnswerSource: Send {
    /// Block until the next line is available. End of input is an error.
    fn read_line(&mut self) -> std::io::Result<String>;
}

fn end_of_input() -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "end of input")
}

impl AnswerSource for std::io::Stdin {
    fn read_line(&mut self) -> std::io::Result<String> {
        let mut line = String::new();
        match std::io::Stdin::read_line(self, &mut line)? {
            0 => Err(end_of_input()),
            _ => Ok(line),
        }
    }
}

/// Adapts any buffered reader into an [`AnswerSource`].
pub struct LineSource<R>(pub R);

impl<R: BufRead + Send> AnswerSource for LineSource<R> {
    fn read_line(&mut self) -> std::io::Result<String> {
        let mut line = String::new();
        match self.0.read_line(&mut line)? {
            0 => Err(end_of_input()),
            _ => Ok(line),
        }
    }
}

/// Settings for one quiz run.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// CSV file with `question,answer` records
    pub csv_path: PathBuf,
    /// Deadline for the whole quiz
    pub time_limit: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("problems.csv"),
            time_limit: Duration::from_secs(30),
        }
    }
}

impl QuizConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_csv_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_path = path.into();
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn with_time_limit_secs(self, secs: u64) -> Self {
        self.with_time_limit(Duration::from_secs(secs))
    }
}

/// Runs problems against a deadline.
#[derive(Debug, Clone)]
pub struct Quiz {
    config: QuizConfig,
}

impl Quiz {
    pub fn new(config: QuizConfig) -> Self {
        Self { config }
    }

    /// Load the problems named by the configuration.
    pub fn load(&self) -> Result<Vec<Problem>> {
        load_problems(&self.config.csv_path)
    }

    /// Ask every problem in order until they run out or the deadline passes.
    ///
    /// Prompts go to `out`. The returned sheet has `total` set to the number
    /// of problems, whether or not all of them were reached. An input error
    /// ends the run with [`QuizError::InputRead`].
    pub async fn run<A, W>(&self, problems: &[Problem], answers: A, out: &mut W) -> Result<ScoreSheet>
    where
        A: AnswerSource + 'static,
        W: Write,
    {
        let answers = Arc::new(Mutex::new(answers));
        let mut sheet = ScoreSheet::new(problems.len());

        let deadline = tokio::time::sleep(self.config.time_limit);
        tokio::pin!(deadline);

        log::debug!(
            "Starting quiz with {} problems and a limit of {:?}",
            problems.len(),
            self.config.time_limit
        );

        for (index, problem) in problems.iter().enumerate() {
            write!(out, "Problem #{}: {} = ", index + 1, problem.question)?;
            out.flush()?;

            let pending = spawn_reader(problem.clone(), Arc::clone(&answers));

            tokio::select! {
                _ = &mut deadline => {
                    log::info!(
                        "Time limit reached with {} of {} problems answered",
                        sheet.answered(),
                        sheet.total
                    );
                    break;
                }
                outcome = pending => {
                    let correct = outcome.map_err(|_| {
                        QuizError::input_read("answer reader stopped without a result")
                    })??;
                    log::debug!("Problem #{} answered, correct: {}", index + 1, correct);
                    sheet.record(correct);
                }
            }
        }

        Ok(sheet)
    }
}

/// Read one line on a fresh thread and send back whether it matched.
fn spawn_reader<A>(problem: Problem, answers: Arc<Mutex<A>>) -> oneshot::Receiver<Result<bool>>
where
    A: AnswerSource + 'static,
{
    let (tx, rx) = oneshot::channel();
    thread::spawn(move || {
        let outcome = match answers.lock() {
            Ok(mut source) => source
                .read_line()
                .map(|line| problem.is_correct(&line))
                .map_err(|e| QuizError::input_read(e.to_string())),
            Err(_) => Err(QuizError::input_read("answer source poisoned")),
        };
        // The receiver is gone if the deadline already fired.
        let _ = tx.send(outcome);
    });
    rx
}
