//! Screen action dispatch

use super::state::{App, Mode};
use crate::clock::Clock;
use crate::config::Action;
use tracing::debug;

/// Runs screen actions against the app, with the clock pickers seed from
#[derive(Debug, Clone, Copy)]
pub struct Actions<'a> {
    clock: &'a dyn Clock,
}

impl<'a> Actions<'a> {
    /// Create an action handler reading time from `clock`
    #[must_use]
    pub const fn new(clock: &'a dyn Clock) -> Self {
        Self { clock }
    }

    /// Handle a keybinding action from the screen
    pub fn handle_action(self, app: &mut App, action: Action) {
        debug!(?action, mode = ?app.mode(), "Handling action");
        match action {
            Action::OpenPicker => {
                if app.mode() == Mode::Normal {
                    app.screen.open_picker(self.clock);
                }
            }
            Action::Help => app.show_help(),
            Action::Quit => app.quit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::time::{TimeError, TimeOfDay};

    #[test]
    fn test_open_picker_action() -> Result<(), TimeError> {
        let clock = FixedClock::new(TimeOfDay::new(6, 45)?);
        let mut app = App::default();

        Actions::new(&clock).handle_action(&mut app, Action::OpenPicker);

        assert_eq!(app.mode(), Mode::Picking);
        assert_eq!(
            app.screen.dialog().map(crate::app::TimePickerDialog::seed),
            Some(TimeOfDay::new(6, 45)?)
        );
        Ok(())
    }

    #[test]
    fn test_open_picker_ignored_under_help() {
        let clock = FixedClock::default();
        let mut app = App::default();
        app.show_help();

        Actions::new(&clock).handle_action(&mut app, Action::OpenPicker);

        assert_eq!(app.mode(), Mode::Help);
        assert!(!app.screen.dialog_open());
    }

    #[test]
    fn test_quit_and_help_actions() {
        let clock = FixedClock::default();
        let actions = Actions::new(&clock);
        let mut app = App::default();

        actions.handle_action(&mut app, Action::Help);
        assert!(app.help_visible);

        actions.handle_action(&mut app, Action::Quit);
        assert!(app.should_quit);
    }
}
