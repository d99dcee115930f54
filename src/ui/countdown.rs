//! Countdown view rendering (shown during the school year).

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::colors;
use super::digits;

/// Draws the countdown view: headline, big day count, mascot, and the
/// motivational message of the day.
pub fn draw_countdown(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // "You have"
            Constraint::Length(digits::GLYPH_ROWS as u16 + 1),
            Constraint::Length(3), // "school days left..."
            Constraint::Min(7),    // Mascot
            Constraint::Length(2), // Message of the day
        ])
        .split(area);

    let headline = Paragraph::new(Line::from("You have").style(Style::default().fg(Color::White)))
        .alignment(Alignment::Center);
    frame.render_widget(headline, chunks[0]);

    // The big number
    let number_lines: Vec<Line> = digits::rows(&app.dates.found_value)
        .into_iter()
        .map(|row| Line::from(row).style(Style::default().fg(colors::SECONDARY).bold()))
        .collect();
    let number = Paragraph::new(number_lines).alignment(Alignment::Center);
    frame.render_widget(number, chunks[1]);

    let caption = Paragraph::new(vec![
        Line::from("school days left"),
        Line::from("until summer break."),
    ])
    .style(Style::default().fg(Color::White))
    .alignment(Alignment::Center);
    frame.render_widget(caption, chunks[2]);

    draw_mascot(frame, chunks[3], app);

    let message = Paragraph::new(
        Line::from(app.content.current_message.as_str())
            .style(Style::default().fg(colors::PRIMARY).bold()),
    )
    .alignment(Alignment::Center);
    frame.render_widget(message, chunks[4]);
}

/// Draws the current mascot animation frame, centered. Unknown mascot
/// identifiers simply render nothing.
pub(super) fn draw_mascot(frame: &mut Frame, area: Rect, app: &App) {
    let Some(frame_art) = app.mascot_frame() else {
        return;
    };

    let lines: Vec<Line> = frame_art
        .lines()
        .map(|line| Line::from(line).style(Style::default().fg(colors::SUN)))
        .collect();
    let mascot = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(mascot, area);
}
