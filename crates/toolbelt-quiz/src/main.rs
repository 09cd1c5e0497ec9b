use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::io::Write;
use std::path::PathBuf;
use std::process::exit;
use toolbelt_quiz::{Quiz, QuizConfig};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Quiz - answer as many problems as you can before time runs out")]
struct Cli {
    #[clap(long, default_value_t = 30, help = "The time limit for the quiz in seconds")]
    limit: u64,

    #[clap(
        long,
        default_value = "problems.csv",
        help = "A CSV file in the format of 'question,answer'"
    )]
    csv: PathBuf,

    #[clap(long, short, default_value = "warn")]
    log_level: String,
}

impl From<&Cli> for QuizConfig {
    fn from(cli: &Cli) -> Self {
        QuizConfig::new()
            .with_csv_path(&cli.csv)
            .with_time_limit_secs(cli.limit)
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so they stay out of the prompts
    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    if let Err(e) = run(QuizConfig::from(&cli)).await {
        println!("{}", e);
        exit(1);
    }
}

async fn run(config: QuizConfig) -> Result<()> {
    let quiz = Quiz::new(config);
    let problems = quiz.load()?;

    let mut stdout = std::io::stdout();
    let sheet = quiz.run(&problems, std::io::stdin(), &mut stdout).await?;

    writeln!(stdout)?;
    writeln!(stdout, "{}", sheet)?;
    Ok(())
}
