//! Mode-specific key handling
//!
//! Keys go to exactly one place: the open picker, the help overlay, or the
//! screen's keybindings.

mod normal;
mod picker;

#[cfg(test)]
mod tests;

use crate::app::{Actions, App, Mode};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Handle a key event based on the current mode
pub fn handle_key_event(
    app: &mut App,
    actions: Actions<'_>,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    match app.mode() {
        Mode::Picking => picker::handle_picker_mode(app, code, modifiers),
        // Any key closes help
        Mode::Help => app.hide_help(),
        Mode::Normal => normal::handle_normal_mode(app, actions, code, modifiers),
    }
}
