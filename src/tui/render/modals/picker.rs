//! Time picker modal rendering
//!
//! Two wheels (hour, minute) show the candidate with its neighbours above
//! and below. The focused wheel is highlighted.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect_absolute;
use crate::app::{EntryMode, TimePickerDialog};
use crate::time::TimeField;
use crate::tui::render::colors;

/// Render the time picker overlay
pub fn render_picker_overlay(frame: &mut Frame<'_>, dialog: &TimePickerDialog) {
    // 11 lines of content + 2 for borders
    let area = centered_rect_absolute(50, 13, frame.area());

    let (hour_prev, hour_next) = dialog.neighbours(TimeField::Hour);
    let (minute_prev, minute_next) = dialog.neighbours(TimeField::Minute);
    let candidate = dialog.candidate();

    let text = vec![
        Line::from(vec![
            field_label(dialog, TimeField::Hour),
            Span::raw("   "),
            field_label(dialog, TimeField::Minute),
        ]),
        Line::from(""),
        wheel_edge(hour_prev, minute_prev),
        Line::from(vec![
            wheel_value(dialog, TimeField::Hour, candidate.hour()),
            Span::styled(" : ", Style::default().fg(colors::TEXT_PRIMARY)),
            wheel_value(dialog, TimeField::Minute, candidate.minute()),
        ]),
        wheel_edge(hour_next, minute_next),
        Line::from(""),
        entry_mode_line(dialog),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "[Esc]",
                Style::default()
                    .fg(colors::ACCENT_NEGATIVE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Close    ", Style::default().fg(colors::TEXT_PRIMARY)),
            Span::styled(
                "[Enter]",
                Style::default()
                    .fg(colors::ACCENT_POSITIVE)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Confirm", Style::default().fg(colors::TEXT_PRIMARY)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "↑/↓ step, Tab switch, i dial/input",
            Style::default().fg(colors::TEXT_MUTED),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Select time ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::SELECTED)),
        )
        .style(Style::default().bg(colors::MODAL_BG));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn field_label(dialog: &TimePickerDialog, field: TimeField) -> Span<'static> {
    let style = if dialog.focus() == field {
        Style::default()
            .fg(colors::SELECTED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::TEXT_DIM)
    };
    Span::styled(format!("{:^6}", field.label()), style)
}

fn wheel_edge(hour: u8, minute: u8) -> Line<'static> {
    let style = Style::default().fg(colors::TEXT_MUTED);
    Line::from(vec![
        Span::styled(format!("  {hour:02}  "), style),
        Span::raw("   "),
        Span::styled(format!("  {minute:02}  "), style),
    ])
}

fn wheel_value(dialog: &TimePickerDialog, field: TimeField, value: u8) -> Span<'static> {
    if dialog.focus() == field {
        Span::styled(
            format!(" [{value:02}] "),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .bg(colors::SURFACE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!("  {value:02}  "),
            Style::default().fg(colors::TEXT_PRIMARY),
        )
    }
}

fn entry_mode_line(dialog: &TimePickerDialog) -> Line<'static> {
    let mode = dialog.entry_mode();
    let mut spans = vec![
        Span::styled("Entry: ", Style::default().fg(colors::TEXT_DIM)),
        Span::styled(
            mode.label(),
            Style::default()
                .fg(colors::TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if mode == EntryMode::Input {
        let typed = dialog
            .pending_digit()
            .map_or_else(|| "__".to_string(), |digit| format!("{digit}_"));
        spans.push(Span::styled(
            format!("  typing {typed}"),
            Style::default().fg(colors::TEXT_DIM),
        ));
    }
    Line::from(spans)
}
