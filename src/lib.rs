//! Timepick - pick a time of day from the terminal
//!
//! A single screen shows the accepted time and opens a dial-style picker
//! seeded from the wall clock. Confirming the picker shows the picked time;
//! dismissing it resets the label.

pub mod app;
pub mod clock;
pub mod config;
pub mod paths;
pub mod time;
pub mod tui;

pub use app::{App, PickerResult, TimePickerDialog, TimeSelectionScreen};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use time::{TimeError, TimeField, TimeOfDay};
