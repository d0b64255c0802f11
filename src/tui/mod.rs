//! Terminal User Interface for Timepick
//!
//! The loop is unidirectional: draw the current state, wait for one event,
//! apply it, draw again.

pub mod input;
pub mod render;

use crate::app::{Actions, App, Event, Handler};
use crate::clock::Clock;
use anyhow::{Context, Result};
use ratatui::crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Run the TUI until the user quits
///
/// The terminal is restored before returning, also when the loop fails.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or read from.
pub fn run(app: &mut App, clock: &dyn Clock) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);
    let actions = Actions::new(clock);

    let result = run_loop(&mut terminal, app, &event_handler, actions);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &Handler,
    actions: Actions<'_>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        match event_handler.next()? {
            Event::Key(key) => {
                input::handle_key_event(app, actions, key.code, key.modifiers);
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
            }
            Event::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
