//! Problem loading from `question,answer` CSV files.

use crate::error::{QuizError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One question and the answer expected for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub question: String,
    pub answer: String,
}

impl Problem {
    /// Build a problem, trimming surrounding whitespace from the answer.
    pub fn new(question: impl Into<String>, answer: impl AsRef<str>) -> Self {
        Self {
            question: question.into(),
            answer: answer.as_ref().trim().to_string(),
        }
    }

    /// Compare a line of user input against the expected answer.
    pub fn is_correct(&self, input: &str) -> bool {
        self.answer == input.trim()
    }
}

/// Open `path` and parse every record into a [`Problem`].
pub fn load_problems<P: AsRef<Path>>(path: P) -> Result<Vec<Problem>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| QuizError::FileOpen {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Reading problems from {}", path.display());
    read_problems(file)
}

/// Parse CSV records from any reader. There is no header row.
pub fn read_problems<R: Read>(reader: R) -> Result<Vec<Problem>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let records = csv_reader
        .records()
        .collect::<std::result::Result<Vec<csv::StringRecord>, csv::Error>>()?;

    let problems = parse_records(&records)?;
    log::info!("Loaded {} problems", problems.len());
    Ok(problems)
}

/// Turn raw records into problems. Fields past the second are ignored.
pub fn parse_records(records: &[csv::StringRecord]) -> Result<Vec<Problem>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| match (record.get(0), record.get(1)) {
            (Some(question), Some(answer)) => Ok(Problem::new(question, answer)),
            _ => Err(QuizError::MalformedRecord {
                line: record
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(index as u64 + 1),
                fields: record.len(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_is_trimmed() {
        let problem = Problem::new("5+5", "  10 ");
        assert_eq!(problem.question, "5+5");
        assert_eq!(problem.answer, "10");
    }

    #[test]
    fn test_is_correct_ignores_surrounding_whitespace() {
        let problem = Problem::new("1+1", "2");
        assert!(problem.is_correct("2\n"));
        assert!(problem.is_correct(" 2 "));
        assert!(!problem.is_correct("3"));
        assert!(!problem.is_correct(""));
    }

    #[test]
    fn test_read_problems_in_order() {
        let input = "5+5,10\n7+3, 10\nwhat 2+2?,4\n";
        let problems = read_problems(input.as_bytes()).unwrap();

        assert_eq!(
            problems,
            vec![
                Problem::new("5+5", "10"),
                Problem::new("7+3", "10"),
                Problem::new("what 2+2?", "4"),
            ]
        );
    }

    #[test]
    fn test_quoted_question_with_comma() {
        let input = "\"what is 2+2, sir?\",4\n";
        let problems = read_problems(input.as_bytes()).unwrap();
        assert_eq!(problems[0].question, "what is 2+2, sir?");
        assert_eq!(problems[0].answer, "4");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let input = "1+1,2,extra,columns\n";
        let problems = read_problems(input.as_bytes()).unwrap();
        assert_eq!(problems, vec![Problem::new("1+1", "2")]);
    }

    #[test]
    fn test_single_field_record_is_malformed() {
        let input = "1+1,2\nno answer here\n";
        let err = read_problems(input.as_bytes()).unwrap_err();
        match err {
            QuizError::MalformedRecord { line, fields } => {
                assert_eq!(line, 2);
                assert_eq!(fields, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_yields_no_problems() {
        let problems = read_problems("".as_bytes()).unwrap();
        assert!(problems.is_empty());
    }

    #[test]
    fn test_missing_file_is_open_error() {
        let err = load_problems("/definitely/not/here/problems.csv").unwrap_err();
        assert!(matches!(err, QuizError::FileOpen { .. }));
        assert!(err.to_string().contains("Failed to open the CSV file"));
    }
}
