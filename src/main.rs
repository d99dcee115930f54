//! Summer break countdown TUI
//!
//! A terminal countdown to summer break: school days remaining, a daily
//! motivational message, and an animated ASCII mascot.
//! Run with: summertui [-d|--break-date <YYYY-MM-DD>]

mod app;
mod constants;
mod content;
mod dates;
mod event;
mod mascot;
mod paths;
mod store;
mod ui;

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, Utc};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::constants::{DEFAULT_BREAK_DAY, DEFAULT_BREAK_MONTH, MASCOTS, MESSAGES};
use crate::content::ContentState;
use crate::dates::{default_break_date, Dates};
use crate::event::EventHandler;
use crate::store::{FileStore, MemoryStore, TimestampStore};

/// Parsed command line options.
struct Args {
    /// First day of summer break (defaults to the next upcoming June 12)
    break_date: Option<NaiveDate>,
    /// Alternative state file location
    state_file: Option<PathBuf>,
    /// Run without persisting any state
    ephemeral: bool,
}

/// Parses command line arguments.
///
/// Supports:
/// - `-d <DATE>` or `--break-date <DATE>` to set the break date
/// - `-f <FILE>` or `--state-file <FILE>` to set the state file
/// - `--ephemeral` to skip persistence entirely
/// - `-h` or `--help` to show usage
fn parse_args() -> Args {
    let args: Vec<String> = env::args().collect();

    let mut parsed = Args {
        break_date: None,
        state_file: None,
        ephemeral: false,
    };

    // Simple argument parsing using iterator
    let mut args_iter = args.iter().skip(1); // Skip program name

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-d" | "--break-date" => {
                let Some(value) = args_iter.next() else {
                    eprintln!("Error: --break-date requires a YYYY-MM-DD argument");
                    std::process::exit(1);
                };
                match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                    Ok(date) => parsed.break_date = Some(date),
                    Err(_) => {
                        eprintln!("Error: '{}' is not a valid YYYY-MM-DD date", value);
                        std::process::exit(1);
                    }
                }
            }
            "-f" | "--state-file" => {
                let Some(value) = args_iter.next() else {
                    eprintln!("Error: --state-file requires a FILE argument");
                    std::process::exit(1);
                };
                parsed.state_file = Some(PathBuf::from(value));
            }
            "--ephemeral" => {
                parsed.ephemeral = true;
            }
            "-h" | "--help" => {
                println!("summertui - a terminal countdown to summer break");
                println!();
                println!("Usage: summertui [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --break-date <YYYY-MM-DD>  First day of summer break");
                println!("  -f, --state-file <FILE>        Where to keep refresh timestamps");
                println!("      --ephemeral                Don't persist any state");
                println!("  -h, --help                     Show this help message");
                println!();
                println!("Without --break-date the countdown targets the next June 12.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Error: Unknown argument '{}'", other);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }

    parsed
}

/// Initializes tracing to a log file in the data directory.
///
/// The terminal belongs to the UI, so nothing may log to stdout/stderr
/// while the app runs. Defaults to `info`; override with RUST_LOG.
fn init_logging() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::never(&logs_dir, "summertui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    Ok(guard)
}

/// Entry point for the application.
fn main() -> Result<()> {
    // Parse command line arguments
    let args = parse_args();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _guard = init_logging()?;

    let today = Local::now().date_naive();
    let now = Utc::now();

    let break_date = args
        .break_date
        .unwrap_or_else(|| default_break_date(today, DEFAULT_BREAK_MONTH, DEFAULT_BREAK_DAY));
    let dates = Dates::new(break_date, today);

    let content = ContentState::new(
        MESSAGES.iter().map(|s| s.to_string()).collect(),
        MASCOTS.iter().map(|s| s.to_string()).collect(),
    )?;

    let store: Box<dyn TimestampStore> = if args.ephemeral {
        Box::new(MemoryStore::new())
    } else {
        let path = args.state_file.unwrap_or_else(paths::state_file);
        Box::new(FileStore::open(path))
    };

    info!(
        "summertui starting, break date {}, {} school days left",
        break_date, dates.found_value
    );

    // Create the application
    let app = App::new(content, dates, store, now, today);

    // Initialize the terminal
    let terminal = ratatui::init();

    // Run the application
    let result = run_app(terminal, app);

    // Restore the terminal to its original state
    ratatui::restore();

    // Return the result
    result
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Draw the current UI state
/// 2. Handle user input events (a poll timeout is the animation tick)
/// 3. Update application state
/// 4. Repeat until the user quits
fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    // Create the event handler
    let event_handler = EventHandler::new();

    // Main loop
    loop {
        // Draw the UI
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        // Handle events (keyboard input, etc.)
        match event_handler.next()? {
            Some(action) => {
                let now = Utc::now();
                let today = Local::now().date_naive();
                // Process the event and check if we should quit
                if app.handle_event(action, now, today)? {
                    break;
                }
            }
            None => app.tick(),
        }
    }

    Ok(())
}
