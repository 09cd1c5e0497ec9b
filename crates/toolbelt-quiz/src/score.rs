use std::fmt;

/// Running tally of a quiz. `total` is fixed when the problems are loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreSheet {
    pub total: usize,
    pub correct: usize,
    pub wrong: usize,
}

impl ScoreSheet {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
        }
    }

    /// Number of problems that got an answer before the deadline.
    pub fn answered(&self) -> usize {
        self.correct + self.wrong
    }

    /// Share of correct answers out of `total`, in percent.
    ///
    /// An empty quiz divides by zero and yields NaN; callers print it as is.
    pub fn percentage(&self) -> f32 {
        (self.correct as f32 / self.total as f32) * 100.0
    }
}

impl fmt::Display for ScoreSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Quiz is over: {} correct and {} wrong answers.",
            self.correct, self.wrong
        )?;
        write!(
            f,
            "You scored {}/{}, a percentage of {:.2}%.",
            self.correct,
            self.total,
            self.percentage()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts() {
        let mut sheet = ScoreSheet::new(3);
        sheet.record(true);
        sheet.record(false);
        sheet.record(true);

        assert_eq!(sheet.correct, 2);
        assert_eq!(sheet.wrong, 1);
        assert_eq!(sheet.answered(), 3);
        assert_eq!(sheet.total, 3);
    }

    #[test]
    fn test_percentage() {
        let sheet = ScoreSheet {
            total: 4,
            correct: 3,
            wrong: 1,
        };
        assert!((sheet.percentage() - 75.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_percentage_of_empty_quiz_is_nan() {
        let sheet = ScoreSheet::new(0);
        assert!(sheet.percentage().is_nan());
        assert!(sheet.to_string().contains("NaN"));
    }

    #[test]
    fn test_summary_text() {
        let sheet = ScoreSheet {
            total: 2,
            correct: 1,
            wrong: 1,
        };
        let summary = sheet.to_string();
        assert!(summary.contains("1 correct and 1 wrong"));
        assert!(summary.contains("1/2"));
        assert!(summary.contains("50.00%"));
    }
}
