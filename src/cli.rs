use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "codequiz", version, about = "Terminal code-snippet quiz")]
pub struct Cli {
    /// Markdown quiz file [default: built-in question]
    pub quiz_file: Option<PathBuf>,

    /// Question to show, counting from 1
    #[arg(long, default_value_t = 1, value_name = "n")]
    pub question: usize,

    /// Drop popups scheduled by a submission that is no longer current
    #[arg(long)]
    pub strict_timers: bool,

    /// Redraw interval in milliseconds
    #[arg(long, default_value_t = 33, value_name = "ms")]
    pub tick_ms: u64,

    /// Write logs to this file (level from RUST_LOG, default debug)
    #[arg(long, value_name = "path")]
    pub log_file: Option<PathBuf>,

    /// Validate the quiz and print a summary without entering the TUI
    #[arg(long)]
    pub check: bool,
}
