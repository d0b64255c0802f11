use super::*;
use crate::clock::FixedClock;
use crate::config::{Action, Config};
use crate::time::{TimeError, TimeOfDay};

fn press(app: &mut App, clock: &FixedClock, code: KeyCode) {
    handle_key_event(app, Actions::new(clock), code, KeyModifiers::NONE);
}

// ========== Mode routing ==========

#[test]
fn test_enter_opens_picker_in_normal_mode() -> Result<(), TimeError> {
    let clock = FixedClock::new(TimeOfDay::new(13, 37)?);
    let mut app = App::default();

    press(&mut app, &clock, KeyCode::Enter);

    assert_eq!(app.mode(), Mode::Picking);
    // The label only changes once the picker resolves
    assert_eq!(app.screen.label(), "00:00");
    Ok(())
}

#[test]
fn test_enter_twice_confirms_seed() -> Result<(), TimeError> {
    let clock = FixedClock::new(TimeOfDay::new(13, 37)?);
    let mut app = App::default();

    press(&mut app, &clock, KeyCode::Enter);
    press(&mut app, &clock, KeyCode::Enter);

    assert_eq!(app.mode(), Mode::Normal);
    assert_eq!(app.screen.label(), "13:37");
    Ok(())
}

#[test]
fn test_open_key_while_picking_edits_instead_of_reopening() -> Result<(), TimeError> {
    let clock = FixedClock::new(TimeOfDay::new(13, 37)?);
    let mut app = App::default();

    press(&mut app, &clock, KeyCode::Char('o'));
    press(&mut app, &clock, KeyCode::Up);
    // `o` is not a picker key, so the edited dialog survives
    press(&mut app, &clock, KeyCode::Char('o'));

    assert_eq!(
        app.screen.dialog().map(crate::app::TimePickerDialog::candidate),
        Some(TimeOfDay::new(14, 37)?)
    );
    Ok(())
}

#[test]
fn test_help_closes_on_any_key() {
    let clock = FixedClock::default();
    let mut app = App::default();

    press(&mut app, &clock, KeyCode::Char('?'));
    assert_eq!(app.mode(), Mode::Help);

    press(&mut app, &clock, KeyCode::Char('q'));
    assert_eq!(app.mode(), Mode::Normal);
    assert!(!app.should_quit);
}

#[test]
fn test_q_quits_from_normal_mode() {
    let clock = FixedClock::default();
    let mut app = App::default();

    press(&mut app, &clock, KeyCode::Char('q'));

    assert!(app.should_quit);
}

#[test]
fn test_q_does_not_quit_while_picking() {
    let clock = FixedClock::default();
    let mut app = App::default();

    press(&mut app, &clock, KeyCode::Enter);
    press(&mut app, &clock, KeyCode::Char('q'));

    assert!(!app.should_quit);
    assert_eq!(app.mode(), Mode::Picking);
}

#[test]
fn test_rebound_open_key() {
    let clock = FixedClock::default();
    let mut config = Config::default();
    config.keys.set("t", Action::OpenPicker);
    let mut app = App::new(config);

    press(&mut app, &clock, KeyCode::Char('t'));

    assert_eq!(app.mode(), Mode::Picking);
}
