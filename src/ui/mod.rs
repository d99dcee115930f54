//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each view is rendered by a separate submodule for clarity.

mod colors;
mod countdown;
mod dialogs;
mod digits;
mod header;
mod help;
mod status;
mod summer;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, View};
use crate::constants::layout;

// Re-export submodule draw functions for internal use
use countdown::draw_countdown;
use dialogs::draw_alert_dialog;
use header::draw_header;
use help::draw_help_overlay;
use status::{draw_commands_bar, draw_status_bar};
use summer::draw_summer;

/// Main draw function - dispatches to specific view renderers.
pub fn draw(frame: &mut Frame, app: &App) {
    // Create the main layout: header, content, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Min(0), // Main content
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    // Draw the header
    draw_header(frame, chunks[0], app);

    // Draw the main content based on current view
    match app.current_view {
        View::Countdown => draw_countdown(frame, chunks[1], app),
        View::Summer => draw_summer(frame, chunks[1], app),
    }

    // Draw the commands bar (shows available actions)
    draw_commands_bar(frame, chunks[2], app);

    // Draw the status bar (shows messages)
    draw_status_bar(frame, chunks[3], app);

    // Draw the monthly reminder dialog on top of the view
    if app.alert_visible {
        draw_alert_dialog(frame);
    }

    // Draw help overlay if enabled
    if app.show_help {
        draw_help_overlay(frame);
    }
}
