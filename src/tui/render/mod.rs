//! TUI rendering
//!
//! This module contains all rendering logic for the TUI, organized into:
//! - `colors`: Color palette definitions
//! - `main_layout`: The screen body and status bar
//! - `modals`: Picker and help overlays

mod colors;
mod main_layout;
mod modals;

#[cfg(test)]
mod tests;

use crate::app::{App, Mode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Render the full application UI
///
/// The picker overlay is drawn exactly when the screen has a dialog mounted.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    main_layout::render_main(frame, app, chunks[0]);
    main_layout::render_status_bar(frame, app, chunks[1]);

    match app.mode() {
        Mode::Picking => {
            if let Some(dialog) = app.screen.dialog() {
                modals::render_picker_overlay(frame, dialog);
            }
        }
        Mode::Help => modals::render_help_overlay(frame, app),
        Mode::Normal => {}
    }
}
