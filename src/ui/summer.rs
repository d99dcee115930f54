//! Summer view rendering (shown once the break date is reached).

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

use super::colors;
use super::countdown::draw_mascot;

/// Draws the summer view: a celebration headline over the mascot.
pub fn draw_summer(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Headline
            Constraint::Min(7),    // Mascot
        ])
        .split(area);

    // Sparkles alternate with the animation tick, a nod to the original's
    // firework effect.
    let sparkle = if app.animation_tick % 2 == 0 {
        "*  .  *  .  *"
    } else {
        ".  *  .  *  ."
    };

    let headline = Paragraph::new(vec![
        Line::from(Span::styled(
            sparkle,
            Style::default().fg(colors::ACCENT),
        )),
        Line::from(Span::styled(
            "Have a",
            Style::default().fg(colors::PRIMARY).bold(),
        )),
        Line::from(Span::styled(
            "w o n d e r f u l",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(Span::styled(
            "summer!",
            Style::default().fg(colors::PRIMARY).bold(),
        )),
        Line::from(Span::styled(
            sparkle,
            Style::default().fg(colors::ACCENT),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(headline, chunks[0]);

    draw_mascot(frame, chunks[1], app);
}
