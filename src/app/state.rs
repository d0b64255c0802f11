//! Application state

use super::screen::TimeSelectionScreen;
use crate::config::Config;
use tracing::debug;

/// What currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The screen itself: trigger control and result label
    #[default]
    Normal,
    /// A time picker is open
    Picking,
    /// Showing help overlay
    Help,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// The time selection screen
    pub screen: TimeSelectionScreen,

    /// Whether the help overlay is shown
    pub help_visible: bool,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application with the given config
    #[must_use]
    pub fn new(config: Config) -> Self {
        let screen = TimeSelectionScreen::new()
            .with_minute_step(config.minute_step)
            .with_keep_time_on_cancel(config.keep_time_on_cancel);
        Self {
            config,
            screen,
            help_visible: false,
            should_quit: false,
        }
    }

    /// Current input mode
    ///
    /// Help is only reachable from `Normal`, so it never hides an open picker.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        if self.screen.dialog_open() {
            Mode::Picking
        } else if self.help_visible {
            Mode::Help
        } else {
            Mode::Normal
        }
    }

    /// Show the help overlay
    pub fn show_help(&mut self) {
        debug!("Showing help");
        self.help_visible = true;
    }

    /// Close the help overlay
    pub const fn hide_help(&mut self) {
        self.help_visible = false;
    }

    /// Ask the event loop to stop
    pub fn quit(&mut self) {
        debug!("Quit requested");
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::time::TimeOfDay;

    #[test]
    fn test_new_app_is_normal() {
        let app = App::default();
        assert_eq!(app.mode(), Mode::Normal);
        assert!(!app.should_quit);
        assert_eq!(app.screen.label(), "00:00");
    }

    #[test]
    fn test_mode_follows_dialog() {
        let mut app = App::default();
        app.screen.open_picker(&FixedClock::new(TimeOfDay::MIDNIGHT));
        assert_eq!(app.mode(), Mode::Picking);
        app.screen.cancel_picker();
        assert_eq!(app.mode(), Mode::Normal);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = App::default();
        app.show_help();
        assert_eq!(app.mode(), Mode::Help);
        app.hide_help();
        assert_eq!(app.mode(), Mode::Normal);
    }

    #[test]
    fn test_config_reaches_screen() -> Result<(), crate::time::TimeError> {
        let config = Config {
            keep_time_on_cancel: true,
            ..Config::default()
        };
        let mut app = App::new(config);
        app.screen
            .on_picker_result(crate::app::PickerResult::confirmed(TimeOfDay::new(8, 15)?));
        app.screen.open_picker(&FixedClock::new(TimeOfDay::MIDNIGHT));
        app.screen.cancel_picker();
        assert_eq!(app.screen.label(), "08:15");
        Ok(())
    }

    #[test]
    fn test_quit() {
        let mut app = App::default();
        app.quit();
        assert!(app.should_quit);
    }
}
