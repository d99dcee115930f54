//! Dialog rendering (monthly calendar reminder).

use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Draws the monthly reminder dialog.
pub fn draw_alert_dialog(frame: &mut Frame) {
    let area = centered_rect(dialog::ALERT_WIDTH, dialog::ALERT_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::WARNING))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(
                "Monthly Reminder",
                Style::default().fg(Color::White).bold(),
            ),
            Span::styled(" ", Style::default()),
        ]))
        .padding(Padding::uniform(1));

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "A new month is here!",
            Style::default()
                .fg(colors::WARNING)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "This countdown only skips weekends. Check the official school \
             calendar for holidays, early dismissals, and makeup days.",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled("Enter", Style::default().fg(colors::KEY).bold()),
            Span::styled(" dismiss", Style::default().fg(colors::MUTED)),
        ]),
    ];

    let alert_widget = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(alert_widget, area);
}
