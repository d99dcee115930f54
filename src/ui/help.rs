//! Help overlay rendering.

use ratatui::{
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::dialog;

use super::colors;
use super::utils::centered_rect;

/// Draws a help overlay popup.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let help = Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::PRIMARY))
                .border_set(symbols::border::DOUBLE)
                .title(Line::from(vec![
                    Span::styled(" Help ", Style::default().fg(Color::White).bold()),
                    Span::styled(
                        "- Press any key to close ",
                        Style::default().fg(colors::MUTED),
                    ),
                ])),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, area);
}

/// Returns the help text content.
fn get_help_text() -> Text<'static> {
    let key_style = Style::default().fg(colors::KEY).bold();
    let desc_style = Style::default().fg(Color::White);
    let section_style = Style::default().fg(colors::PRIMARY).bold();
    let muted = Style::default().fg(colors::MUTED);

    Text::from(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled("COUNTDOWN", section_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("r  ", key_style),
            Span::styled("or ", muted),
            Span::styled("F5    ", key_style),
            Span::styled("Refresh the countdown", desc_style),
        ]),
        Line::from(vec![
            Span::styled("           ", Style::default()),
            Span::styled(
                "(message and mascot re-roll at most once a day)",
                muted,
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled("DIALOGS", section_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("Enter     ", key_style),
            Span::styled("Dismiss the monthly reminder", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("Esc       ", key_style),
            Span::styled("Dismiss a dialog or overlay", desc_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled("GENERAL", section_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("?  ", key_style),
            Span::styled("or ", muted),
            Span::styled("F1    ", key_style),
            Span::styled("Show this help", desc_style),
        ]),
        Line::from(vec![
            Span::styled("    ", Style::default()),
            Span::styled("q  ", key_style),
            Span::styled("or ", muted),
            Span::styled("Ctrl+C", key_style),
            Span::styled(" Quit application", desc_style),
        ]),
        Line::from(""),
    ])
}
