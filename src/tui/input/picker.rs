//! Picker mode key handling
//!
//! Confirm and cancel resolve the dialog through the screen, which unmounts
//! it; every other key edits the candidate.

use crate::app::App;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};

/// Handle key events while a time picker is open
pub fn handle_picker_mode(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return;
        }
        KeyCode::Enter | KeyCode::Char('y' | 'Y') => {
            app.screen.confirm_picker();
            return;
        }
        KeyCode::Esc | KeyCode::Char('n' | 'N') => {
            app.screen.cancel_picker();
            return;
        }
        _ => {}
    }

    let Some(dialog) = app.screen.dialog_mut() else {
        return;
    };
    match code {
        KeyCode::Up | KeyCode::Char('k' | '+') => dialog.increment(),
        KeyCode::Down | KeyCode::Char('j' | '-') => dialog.decrement(),
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Char('h' | 'l') => dialog.switch_field(),
        KeyCode::Char('i') => dialog.toggle_entry_mode(),
        KeyCode::Char(c) if c.is_ascii_digit() => dialog.type_digit(c),
        KeyCode::Backspace => dialog.clear_pending(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::EntryMode;
    use crate::clock::FixedClock;
    use crate::time::{TimeError, TimeField, TimeOfDay};

    fn picking_app(hour: u8, minute: u8) -> Result<App, TimeError> {
        let mut app = App::default();
        app.screen
            .open_picker(&FixedClock::new(TimeOfDay::new(hour, minute)?));
        Ok(app)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_picker_mode(app, code, KeyModifiers::NONE);
    }

    fn candidate(app: &App) -> Option<TimeOfDay> {
        app.screen.dialog().map(crate::app::TimePickerDialog::candidate)
    }

    #[test]
    fn test_up_and_down_step_hour() -> Result<(), TimeError> {
        let mut app = picking_app(10, 0)?;
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(candidate(&app), Some(TimeOfDay::new(12, 0)?));
        press(&mut app, KeyCode::Down);
        assert_eq!(candidate(&app), Some(TimeOfDay::new(11, 0)?));
        Ok(())
    }

    #[test]
    fn test_tab_moves_to_minutes() -> Result<(), TimeError> {
        let mut app = picking_app(10, 0)?;
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('-'));
        assert_eq!(candidate(&app), Some(TimeOfDay::new(10, 59)?));
        assert_eq!(
            app.screen.dialog().map(crate::app::TimePickerDialog::focus),
            Some(TimeField::Minute)
        );
        Ok(())
    }

    #[test]
    fn test_enter_confirms_and_unmounts() -> Result<(), TimeError> {
        let mut app = picking_app(21, 9)?;
        press(&mut app, KeyCode::Enter);
        assert!(!app.screen.dialog_open());
        assert_eq!(app.screen.label(), "21:09");
        Ok(())
    }

    #[test]
    fn test_esc_cancels_and_resets() -> Result<(), TimeError> {
        let mut app = picking_app(21, 9)?;
        press(&mut app, KeyCode::Enter);
        app.screen.open_picker(&FixedClock::new(TimeOfDay::new(5, 5)?));
        press(&mut app, KeyCode::Esc);
        assert!(!app.screen.dialog_open());
        assert_eq!(app.screen.label(), "00:00");
        Ok(())
    }

    #[test]
    fn test_i_toggles_typed_entry() -> Result<(), TimeError> {
        let mut app = picking_app(10, 0)?;
        press(&mut app, KeyCode::Char('i'));
        assert_eq!(
            app.screen.dialog().map(crate::app::TimePickerDialog::entry_mode),
            Some(EntryMode::Input)
        );
        for c in ['0', '7', '0', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(candidate(&app), Some(TimeOfDay::new(7, 3)?));
        Ok(())
    }

    #[test]
    fn test_ctrl_c_quits_without_resolving() -> Result<(), TimeError> {
        let mut app = picking_app(10, 0)?;
        handle_picker_mode(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
        assert!(app.screen.dialog_open());
        Ok(())
    }

    #[test]
    fn test_keys_after_resolution_do_nothing() -> Result<(), TimeError> {
        let mut app = picking_app(8, 30)?;
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen.label(), "08:30");
        Ok(())
    }
}
