//! Help overlay rendering

use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect_absolute;
use crate::app::App;
use crate::config::{Action, PICKER_KEYS};
use crate::tui::render::colors;

fn section_title(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(colors::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Lines shown in the help overlay
#[must_use]
pub fn help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![section_title("Keybindings"), Line::from("")];

    for &action in Action::ALL_FOR_HELP {
        lines.push(Line::from(Span::styled(
            app.config.keys.help_line(action),
            Style::default().fg(colors::TEXT_PRIMARY),
        )));
    }

    lines.push(Line::from(""));
    lines.push(section_title("Picker"));
    for (keys, description) in PICKER_KEYS {
        lines.push(Line::from(Span::styled(
            format!("  {keys:<16} {description}"),
            Style::default().fg(colors::TEXT_PRIMARY),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::default().fg(colors::TEXT_MUTED),
    )));
    lines
}

/// Render the help overlay
pub fn render_help_overlay(frame: &mut Frame<'_>, app: &App) {
    let lines = help_lines(app);

    // Height: content lines + 2 for borders, capped to the frame
    let desired = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let height = desired.min(frame.area().height);
    let area = centered_rect_absolute(60, height, frame.area());

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
