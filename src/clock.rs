//! Wall-clock sources used to seed the picker

use crate::time::TimeOfDay;
use std::fmt;
use tracing::debug;

/// Source of the current hour and minute (24-hour form)
pub trait Clock: fmt::Debug {
    /// Current time of day.
    fn now(&self) -> TimeOfDay;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> TimeOfDay {
        let now = TimeOfDay::from(chrono::Local::now().time());
        debug!(%now, "Read system clock");
        now
    }
}

/// A clock frozen at one time of day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedClock {
    time: TimeOfDay,
}

impl FixedClock {
    /// Create a clock that always reports `time`.
    #[must_use]
    pub const fn new(time: TimeOfDay) -> Self {
        Self { time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> TimeOfDay {
        self.time
    }
}
