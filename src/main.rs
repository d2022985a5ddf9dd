use std::fs::File;
use std::path::Path;
use std::time::Duration;

use clap::Parser;

use codequiz::app::App;
use codequiz::cli::Cli;
use codequiz::error::{QuizError, Result};
use codequiz::model::{self, Quiz, StaleTimerPolicy};
use codequiz::{parser, timer, tui};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref(), cli.check)?;

    let mut quiz = match cli.quiz_file {
        Some(ref path) => load_quiz(path)?,
        None => model::builtin_quiz(),
    };
    if cli.strict_timers {
        quiz.frontmatter.stale_timers = StaleTimerPolicy::ActiveSubmissionOnly;
    }

    // --question counts from 1
    let index = cli.question.saturating_sub(1);
    if index >= quiz.questions.len() || cli.question == 0 {
        return Err(QuizError::QuestionOutOfRange {
            number: cli.question,
            len: quiz.questions.len(),
        });
    }

    if cli.check {
        for line in quiz.summary_lines() {
            println!("{}", line);
        }
        return Ok(());
    }

    let app = App::new(quiz, index)?;
    let tick = Duration::from_millis(cli.tick_ms.max(1));
    let timer_rx = timer::spawn_ticker(tick);

    tui::run_tui(app, timer_rx, tick)
}

fn load_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path).map_err(|e| QuizError::ReadQuiz {
        path: path.to_path_buf(),
        source: e,
    })?;
    let quiz = parser::parse_quiz(&content)?;
    log::info!(
        "loaded {} question(s) from {}",
        quiz.questions.len(),
        path.display()
    );
    Ok(quiz)
}

fn init_logging(log_file: Option<&Path>, check: bool) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or("debug");

    if let Some(path) = log_file {
        let file = File::create(path).map_err(|e| QuizError::LogFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        env_logger::Builder::from_env(env)
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    } else if check {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .init();
    }
    // Without a log file the TUI owns stderr, so no logger is installed.
    Ok(())
}
