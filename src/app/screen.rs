//! Time selection screen: the accepted time and the mounted picker

use super::picker::{PickerResult, TimePickerDialog};
use crate::clock::Clock;
use crate::time::TimeOfDay;
use tracing::debug;

/// Screen state: the time on display and, while picking, the open dialog
///
/// The dialog slot is the "picker is open" flag; there is never more than
/// one dialog, and the screen is the only thing that changes the
/// displayed time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSelectionScreen {
    displayed_time: TimeOfDay,
    dialog: Option<TimePickerDialog>,
    minute_step: u8,
    keep_time_on_cancel: bool,
}

impl Default for TimeSelectionScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSelectionScreen {
    /// A fresh screen showing `00:00` with the picker closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            displayed_time: TimeOfDay::MIDNIGHT,
            dialog: None,
            minute_step: 1,
            keep_time_on_cancel: false,
        }
    }

    /// Minute wheel step handed to dialogs opened from this screen.
    #[must_use]
    pub const fn with_minute_step(mut self, minute_step: u8) -> Self {
        self.minute_step = minute_step;
        self
    }

    /// Keep the previous time when a pick is cancelled instead of
    /// resetting to `00:00`.
    #[must_use]
    pub const fn with_keep_time_on_cancel(mut self, keep: bool) -> Self {
        self.keep_time_on_cancel = keep;
        self
    }

    /// Time currently shown in the result label.
    #[must_use]
    pub const fn displayed_time(&self) -> TimeOfDay {
        self.displayed_time
    }

    /// Whether the picker is mounted.
    #[must_use]
    pub const fn dialog_open(&self) -> bool {
        self.dialog.is_some()
    }

    /// The mounted picker, if any.
    #[must_use]
    pub const fn dialog(&self) -> Option<&TimePickerDialog> {
        self.dialog.as_ref()
    }

    /// The mounted picker, for editing its candidate.
    pub const fn dialog_mut(&mut self) -> Option<&mut TimePickerDialog> {
        self.dialog.as_mut()
    }

    /// Text of the result label.
    #[must_use]
    pub fn label(&self) -> String {
        self.displayed_time.to_string()
    }

    /// Mount a picker seeded from `clock`.
    ///
    /// Does nothing (and does not read the clock) when a picker is already
    /// open. Returns whether a new picker was mounted.
    pub fn open_picker(&mut self, clock: &dyn Clock) -> bool {
        if self.dialog.is_some() {
            debug!("Time picker already open");
            return false;
        }
        self.dialog = Some(TimePickerDialog::open(clock, self.minute_step));
        true
    }

    /// Apply a dialog's result and unmount the dialog.
    pub fn on_picker_result(&mut self, result: PickerResult) {
        self.dialog = None;
        if result.accepted {
            self.displayed_time = result.time;
        } else if !self.keep_time_on_cancel {
            self.displayed_time = TimeOfDay::MIDNIGHT;
        }
        debug!(
            accepted = result.accepted,
            displayed = %self.displayed_time,
            "Applied picker result"
        );
    }

    /// Confirm the mounted picker, if any, and apply its result.
    pub fn confirm_picker(&mut self) -> Option<PickerResult> {
        let result = self.dialog.take()?.confirm();
        self.on_picker_result(result);
        Some(result)
    }

    /// Cancel the mounted picker, if any, and apply its result.
    pub fn cancel_picker(&mut self) -> Option<PickerResult> {
        let result = self.dialog.take()?.cancel();
        self.on_picker_result(result);
        Some(result)
    }
}
