//! Application state and logic

mod event;
mod handler;
mod picker;
mod screen;
mod state;

pub use event::{Event, Handler};
pub use handler::Actions;
pub use picker::{EntryMode, MAX_MINUTE_STEP, PickerResult, TimePickerDialog};
pub use screen::TimeSelectionScreen;
pub use state::{App, Mode};
