//! Header rendering with ASCII art logo.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};

use super::colors;

/// Draws the header with ASCII art logo and countdown summary.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = Style::default().fg(colors::BORDER);
    let muted_style = Style::default().fg(colors::MUTED);
    let logo_style = Style::default().fg(colors::SUN).bold();

    // Status indicator: days left during the school year, sunshine after
    let status = match app.current_view {
        View::Countdown => vec![
            Span::styled("┃ ", border_style),
            Span::styled("◈ ", Style::default().fg(colors::ACCENT)),
            Span::styled(
                format!("{} days to go", app.dates.found_value),
                Style::default().fg(colors::ACCENT).bold(),
            ),
            Span::styled(" ┃", border_style),
        ],
        View::Summer => vec![
            Span::styled("┃ ", border_style),
            Span::styled("◈ ", Style::default().fg(colors::SUN)),
            Span::styled("It's summer!", Style::default().fg(colors::SUN).bold()),
            Span::styled(" ┃", border_style),
        ],
    };

    // Top border with status indicator
    let mut line0 = vec![
        Span::styled("┏", Style::default().fg(colors::PRIMARY)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┓", Style::default().fg(colors::PRIMARY)),
        Span::styled("░▒▓", muted_style),
    ];
    line0.extend(status);
    let line0 = Line::from(line0);

    let line1 = Line::from(vec![
        Span::styled("┃ ", Style::default().fg(colors::PRIMARY)),
        Span::styled(r"   \ | /                   ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╭──────────────────────────╮", border_style),
    ]);

    let line2 = Line::from(vec![
        Span::styled("┃ ", Style::default().fg(colors::PRIMARY)),
        Span::styled(r"  -- O --   ", logo_style),
        Span::styled("SUMMER", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled("::", muted_style),
        Span::styled("TUI    ", Style::default().fg(colors::KEY).bold()),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  │ ", border_style),
        Span::styled("◆", Style::default().fg(colors::ACCENT)),
        Span::styled(" school days countdown ", muted_style),
        Span::styled("◆ │", border_style),
    ]);

    let line3 = Line::from(vec![
        Span::styled("┃ ", Style::default().fg(colors::PRIMARY)),
        Span::styled(r"   / | \                   ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  │ ", border_style),
        Span::styled("▪", Style::default().fg(colors::SUN)),
        Span::styled(
            format!(" break day {} ", app.dates.break_date.format("%b %-d")),
            muted_style,
        ),
        Span::styled("▪", Style::default().fg(colors::ACCENT)),
        Span::styled(format!(" v{} │", env!("CARGO_PKG_VERSION")), border_style),
    ]);

    let line4 = Line::from(vec![
        Span::styled("┗", Style::default().fg(colors::PRIMARY)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┛", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╰──────────────────────────╯", border_style),
    ]);

    let header = Paragraph::new(vec![line0, line1, line2, line3, line4]);
    frame.render_widget(header, area);
}
