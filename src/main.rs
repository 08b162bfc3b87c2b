use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use ox_quiz::{Exit, Quiz, QuizFiles};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal O/X quiz with a review file for missed questions", long_about = None)]
struct Args {
    /// CSV file to load the questions from
    #[arg(short, long, default_value = "ox_quiz_python.csv")]
    questions: PathBuf,

    /// CSV file where missed questions are kept for review
    #[arg(short, long, default_value = "wrong.csv")]
    wrong_file: PathBuf,

    /// Append log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Could not open log file {}: {}", path.display(), e);
        }
    }

    let quiz = Quiz::new(QuizFiles::new(args.questions, args.wrong_file));

    match quiz.run() {
        Ok(Exit::Quit) => println!("Exiting the quiz. Goodbye!"),
        Ok(Exit::Interrupted) => println!("\nThe quiz was interrupted. Goodbye!"),
        Err(e) => {
            tracing::error!(error = %e, "quiz terminated");
            println!("\nAn error occurred: {}", e);
        }
    }
}

/// Logs go to a file because the terminal belongs to the quiz screen.
fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ox_quiz=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
