use std::io::{Cursor, Write};
use std::time::Duration;
use tempfile::NamedTempFile;
use toolbelt_quiz::{LineSource, Quiz, QuizConfig, QuizError};

fn problem_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[tokio::test]
async fn test_file_to_score_sheet() {
    let file = problem_file("5+5,10\n1+1,2\n8+3,11\n1+2,3\n");
    let quiz = Quiz::new(
        QuizConfig::new()
            .with_csv_path(file.path())
            .with_time_limit(Duration::from_secs(3600)),
    );

    let problems = quiz.load().unwrap();
    assert_eq!(problems.len(), 4);

    let answers = LineSource(Cursor::new("10\n2\n12\n3\n"));
    let mut out = Vec::new();
    let sheet = quiz.run(&problems, answers, &mut out).await.unwrap();

    assert_eq!(sheet.total, 4);
    assert_eq!(sheet.correct, 3);
    assert_eq!(sheet.wrong, 1);
    assert!((sheet.percentage() - 75.0).abs() < f32::EPSILON);
}

#[tokio::test]
async fn test_total_matches_problem_count_with_unlimited_time() {
    let file = problem_file("a,1\nb,2\nc,3\nd,4\ne,5\n");
    let quiz = Quiz::new(
        QuizConfig::new()
            .with_csv_path(file.path())
            .with_time_limit(Duration::from_secs(3600)),
    );
    let problems = quiz.load().unwrap();

    let answers = LineSource(Cursor::new("1\n2\n3\n4\n5\n"));
    let mut out = Vec::new();
    let sheet = quiz.run(&problems, answers, &mut out).await.unwrap();

    assert_eq!(sheet.total, problems.len());
    assert_eq!(sheet.correct, sheet.total);
    assert_eq!(sheet.wrong, 0);
}

#[test]
fn test_invalid_utf8_is_read_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"\xff\xfe,1\n").unwrap();
    file.flush().unwrap();

    let quiz = Quiz::new(QuizConfig::new().with_csv_path(file.path()));
    let err = quiz.load().unwrap_err();

    assert!(matches!(err, QuizError::FileRead(_)));
}

#[test]
fn test_short_record_is_reported() {
    let file = problem_file("1+1,2\n2+2\n");
    let quiz = Quiz::new(QuizConfig::new().with_csv_path(file.path()));

    let err = quiz.load().unwrap_err();
    assert!(matches!(err, QuizError::MalformedRecord { line: 2, fields: 1 }));
}

#[test]
fn test_default_config() {
    let config = QuizConfig::default();
    assert_eq!(config.csv_path.to_str(), Some("problems.csv"));
    assert_eq!(config.time_limit, Duration::from_secs(30));
}
