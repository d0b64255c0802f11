//! Time picker dialog: candidate editing and its two terminal outcomes
//!
//! A dialog is seeded from a [`Clock`] when it is opened and then edited
//! in place. Confirming or cancelling consumes the dialog, so a dialog can
//! report at most one [`PickerResult`].

use crate::clock::Clock;
use crate::time::{TimeError, TimeField, TimeOfDay};
use tracing::{debug, info};

/// Largest minute step the wheel accepts.
pub const MAX_MINUTE_STEP: u8 = 30;

/// How the user edits the candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryMode {
    /// Step the focused wheel up and down
    #[default]
    Dial,
    /// Type the focused field's digits
    Input,
}

impl EntryMode {
    /// Short label for the mode indicator.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dial => "dial",
            Self::Input => "input",
        }
    }

    /// The other entry mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dial => Self::Input,
            Self::Input => Self::Dial,
        }
    }
}

/// Outcome reported by a dialog when it closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerResult {
    /// Picked time, or `00:00` when the dialog was cancelled
    pub time: TimeOfDay,
    /// Whether the user confirmed the pick
    pub accepted: bool,
}

impl PickerResult {
    /// A confirmed pick of `time`.
    #[must_use]
    pub const fn confirmed(time: TimeOfDay) -> Self {
        Self {
            time,
            accepted: true,
        }
    }

    /// A dismissed dialog. Carries the `00:00` sentinel.
    #[must_use]
    pub const fn cancelled() -> Self {
        Self {
            time: TimeOfDay::MIDNIGHT,
            accepted: false,
        }
    }

    /// The picked time as `HH:MM`.
    #[must_use]
    pub fn formatted(&self) -> String {
        self.time.to_string()
    }
}

/// An open time picker holding the candidate time
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(
    missing_copy_implementations,
    reason = "resolving consumes the dialog; a copy could report a second result"
)]
pub struct TimePickerDialog {
    seed: TimeOfDay,
    candidate: TimeOfDay,
    focus: TimeField,
    entry_mode: EntryMode,
    pending_digit: Option<u8>,
    minute_step: u8,
}

impl TimePickerDialog {
    /// Open a dialog seeded from the clock's current time.
    ///
    /// This is the only place the clock is read. `minute_step` is clamped
    /// to `1..=30`.
    #[must_use]
    pub fn open(clock: &dyn Clock, minute_step: u8) -> Self {
        let seed = clock.now();
        debug!(%seed, "Opened time picker");
        Self {
            seed,
            candidate: seed,
            focus: TimeField::Hour,
            entry_mode: EntryMode::Dial,
            pending_digit: None,
            minute_step: minute_step.clamp(1, MAX_MINUTE_STEP),
        }
    }

    /// Time read from the clock when the dialog opened.
    #[must_use]
    pub const fn seed(&self) -> TimeOfDay {
        self.seed
    }

    /// Current, not yet confirmed, time.
    #[must_use]
    pub const fn candidate(&self) -> TimeOfDay {
        self.candidate
    }

    /// Field that stepping and typing act on.
    #[must_use]
    pub const fn focus(&self) -> TimeField {
        self.focus
    }

    /// Current entry mode.
    #[must_use]
    pub const fn entry_mode(&self) -> EntryMode {
        self.entry_mode
    }

    /// First digit of a two-digit entry still in progress.
    #[must_use]
    pub const fn pending_digit(&self) -> Option<u8> {
        self.pending_digit
    }

    /// Step size of the given field's wheel.
    #[must_use]
    pub const fn step_size(&self, field: TimeField) -> u8 {
        match field {
            TimeField::Hour => 1,
            TimeField::Minute => self.minute_step,
        }
    }

    /// Values shown above and below the candidate on a field's wheel.
    #[must_use]
    pub fn neighbours(&self, field: TimeField) -> (u8, u8) {
        let step = i16::from(self.step_size(field));
        (
            self.candidate.step(field, -step).get(field),
            self.candidate.step(field, step).get(field),
        )
    }

    /// Step the focused field up, wrapping at the top.
    pub fn increment(&mut self) {
        self.step_focused(1);
    }

    /// Step the focused field down, wrapping at the bottom.
    pub fn decrement(&mut self) {
        self.step_focused(-1);
    }

    fn step_focused(&mut self, direction: i16) {
        self.pending_digit = None;
        let step = i16::from(self.step_size(self.focus));
        self.candidate = self.candidate.step(self.focus, direction * step);
    }

    /// Move focus to the other field.
    pub const fn switch_field(&mut self) {
        self.focus = self.focus.other();
        self.pending_digit = None;
    }

    /// Flip between dial and typed entry.
    pub fn toggle_entry_mode(&mut self) {
        self.entry_mode = self.entry_mode.toggled();
        self.pending_digit = None;
        debug!(mode = self.entry_mode.label(), "Switched picker entry mode");
    }

    /// Set the candidate hour.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::HourOutOfRange`] and keeps the candidate when
    /// `hour` is not in `0..=23`.
    pub fn set_hour(&mut self, hour: u8) -> Result<(), TimeError> {
        self.candidate = self.candidate.with(TimeField::Hour, hour)?;
        Ok(())
    }

    /// Set the candidate minute.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::MinuteOutOfRange`] and keeps the candidate when
    /// `minute` is not in `0..=59`.
    pub fn set_minute(&mut self, minute: u8) -> Result<(), TimeError> {
        self.candidate = self.candidate.with(TimeField::Minute, minute)?;
        Ok(())
    }

    /// Feed a typed character to the focused field.
    ///
    /// Only digits in [`EntryMode::Input`] have an effect. A second digit
    /// completes a two-digit value when it is in range; otherwise it starts
    /// a new entry. A completed hour moves focus to the minute field.
    pub fn type_digit(&mut self, c: char) {
        if self.entry_mode != EntryMode::Input {
            return;
        }
        let Some(digit) = c.to_digit(10).and_then(|d| u8::try_from(d).ok()) else {
            return;
        };

        let field = self.focus;
        if let Some(first) = self.pending_digit.take()
            && let Ok(time) = self.candidate.with(field, first * 10 + digit)
        {
            self.candidate = time;
            if field == TimeField::Hour {
                self.focus = TimeField::Minute;
            }
            return;
        }

        // A single digit fits both fields
        if let Ok(time) = self.candidate.with(field, digit) {
            self.candidate = time;
            self.pending_digit = Some(digit);
        }
    }

    /// Drop a half-typed entry.
    pub const fn clear_pending(&mut self) {
        self.pending_digit = None;
    }

    /// Accept the candidate.
    #[must_use]
    pub fn confirm(self) -> PickerResult {
        info!(time = %self.candidate, "Time picker confirmed");
        PickerResult::confirmed(self.candidate)
    }

    /// Dismiss the dialog without accepting anything.
    #[must_use]
    pub fn cancel(self) -> PickerResult {
        info!(candidate = %self.candidate, "Time picker cancelled");
        PickerResult::cancelled()
    }
}
