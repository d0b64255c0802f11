//! Main layout rendering: trigger control, result label, status bar

use crate::app::{App, Mode};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::colors;
use super::modals::centered_rect_absolute;

/// Render the screen body: the trigger control above the result label
pub fn render_main(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let body = centered_rect_absolute(50, 7, area);

    let trigger_style = if app.mode() == Mode::Normal {
        Style::default()
            .fg(colors::SELECTED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_DIM)
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("[ Select time ]", trigger_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Current time: ", Style::default().fg(colors::ACCENT_POSITIVE)),
            Span::styled(
                app.screen.label(),
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title(" Timepick ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER)),
    );

    frame.render_widget(paragraph, body);
}

/// Render the one-line status bar with key hints for the current mode
pub fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = match app.mode() {
        Mode::Normal => app.config.keys.status_hints(),
        Mode::Picking => "[Enter]confirm [Esc]close [Tab]hour/minute [i]dial/input".to_string(),
        Mode::Help => "Press any key to close help".to_string(),
    };

    let line = Line::from(Span::styled(
        format!(" {hints} "),
        Style::default().fg(colors::TEXT_DIM),
    ));
    frame.render_widget(Paragraph::new(line), area);
}
