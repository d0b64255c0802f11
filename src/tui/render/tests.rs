use super::*;
use crate::clock::FixedClock;
use crate::time::{TimeError, TimeOfDay};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buffer.cell((x, y)) {
                out.push_str(cell.symbol());
            }
        }
        out.push('\n');
    }
    out
}

fn draw(app: &App) -> Result<String, Box<dyn std::error::Error>> {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend)?;
    terminal.draw(|frame| render(frame, app))?;
    Ok(buffer_to_string(terminal.backend().buffer()))
}

#[test]
fn test_render_normal_mode() -> Result<(), Box<dyn std::error::Error>> {
    let content = draw(&App::default())?;

    assert!(content.contains("[ Select time ]"));
    assert!(content.contains("Current time: 00:00"));
    assert!(content.contains("[o]select"));
    assert!(!content.contains("Confirm"));
    Ok(())
}

#[test]
fn test_render_picker_overlay() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::default();
    app.screen
        .open_picker(&FixedClock::new(TimeOfDay::new(7, 3)?));

    let content = draw(&app)?;

    assert!(content.contains("Select time"));
    assert!(content.contains("[Enter] Confirm"));
    assert!(content.contains("[Esc] Close"));
    // Hour wheel is focused, minute wheel shows its neighbours
    assert!(content.contains("[07]"));
    assert!(content.contains("03"));
    assert!(content.contains("02"));
    assert!(content.contains("04"));
    assert!(content.contains("Entry: dial"));
    Ok(())
}

#[test]
fn test_render_picker_typing_indicator() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::default();
    app.screen
        .open_picker(&FixedClock::new(TimeOfDay::new(7, 3)?));
    if let Some(dialog) = app.screen.dialog_mut() {
        dialog.toggle_entry_mode();
        dialog.type_digit('1');
    }

    let content = draw(&app)?;

    assert!(content.contains("Entry: input"));
    assert!(content.contains("typing 1_"));
    assert!(content.contains("[01]"));
    Ok(())
}

#[test]
fn test_render_label_after_confirm() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::default();
    app.screen
        .open_picker(&FixedClock::new(TimeOfDay::new(23, 5)?));
    app.screen.confirm_picker();

    let content = draw(&app)?;

    assert!(content.contains("Current time: 23:05"));
    assert!(!content.contains("[Enter] Confirm"));
    Ok(())
}

#[test]
fn test_render_help_overlay() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::default();
    app.show_help();

    let content = draw(&app)?;

    assert!(content.contains("Keybindings"));
    assert!(content.contains("Select time"));
    assert!(content.contains("Press any key to close"));
    Ok(())
}

#[test]
fn test_render_small_terminal_does_not_panic() -> Result<(), TimeError> {
    let mut app = App::default();
    app.screen.open_picker(&FixedClock::new(TimeOfDay::new(12, 0)?));

    let backend = TestBackend::new(20, 6);
    let drawn = Terminal::new(backend).and_then(|mut terminal| {
        terminal.draw(|frame| render(frame, &app))?;
        Ok(())
    });
    assert!(drawn.is_ok());
    Ok(())
}
