//! Normal mode key handling

use crate::app::{Actions, App};
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Handle key events on the screen through the configured keybindings
pub fn handle_normal_mode(
    app: &mut App,
    actions: Actions<'_>,
    code: KeyCode,
    modifiers: KeyModifiers,
) {
    if let Some(action) = app.config.keys.get_action(code, modifiers) {
        actions.handle_action(app, action);
    }
}
