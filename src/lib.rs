pub mod app;
pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod schedule;
pub mod shake;
pub mod state;
pub mod timer;
pub mod tui;
pub mod ui;
