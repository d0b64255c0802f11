//! Time-of-day values and their `HH:MM` rendering
//!
//! A [`TimeOfDay`] is an hour/minute pair on a 24-hour clock. It has no
//! seconds, date or zone, and both fields are always in range.

use chrono::{NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of hours on the dial (24-hour representation).
pub const HOURS_PER_DAY: u8 = 24;

/// Number of minutes on the minute wheel.
pub const MINUTES_PER_HOUR: u8 = 60;

/// Errors produced when building or parsing a [`TimeOfDay`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// Hour outside `0..=23`
    #[error("hour {0} is out of range (expected 0-23)")]
    HourOutOfRange(u8),

    /// Minute outside `0..=59`
    #[error("minute {0} is out of range (expected 0-59)")]
    MinuteOutOfRange(u8),

    /// Text that does not look like `H:MM` or `HH:MM`
    #[error("expected a time like HH:MM, got {0:?}")]
    Malformed(String),
}

/// One of the two editable fields of a [`TimeOfDay`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeField {
    /// The hour field (`0..=23`)
    #[default]
    Hour,
    /// The minute field (`0..=59`)
    Minute,
}

impl TimeField {
    /// Number of distinct values the field can take.
    #[must_use]
    pub const fn modulus(self) -> u8 {
        match self {
            Self::Hour => HOURS_PER_DAY,
            Self::Minute => MINUTES_PER_HOUR,
        }
    }

    /// The other field.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Hour => Self::Minute,
            Self::Minute => Self::Hour,
        }
    }

    /// Label shown above the field's wheel.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hour => "Hour",
            Self::Minute => "Minute",
        }
    }
}

/// An hour and minute on a 24-hour clock
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// `00:00`, also used as the "nothing picked" sentinel.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0 };

    /// Build a time, rejecting out-of-range fields.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::HourOutOfRange`] or [`TimeError::MinuteOutOfRange`]
    /// when a field does not fit the 24-hour clock.
    pub const fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour >= HOURS_PER_DAY {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Hour in `0..=23`.
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute in `0..=59`.
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Read a single field.
    #[must_use]
    pub const fn get(self, field: TimeField) -> u8 {
        match field {
            TimeField::Hour => self.hour,
            TimeField::Minute => self.minute,
        }
    }

    /// Replace a single field.
    ///
    /// # Errors
    ///
    /// Returns a range error when `value` does not fit `field`.
    pub const fn with(self, field: TimeField, value: u8) -> Result<Self, TimeError> {
        match field {
            TimeField::Hour => Self::new(value, self.minute),
            TimeField::Minute => Self::new(self.hour, value),
        }
    }

    /// Move a field by `delta`, wrapping within the field.
    ///
    /// Minutes wrap on their own wheel and never carry into the hour.
    #[must_use]
    pub fn step(self, field: TimeField, delta: i16) -> Self {
        let value = wrap(self.get(field), delta, field.modulus());
        match field {
            TimeField::Hour => Self {
                hour: value,
                ..self
            },
            TimeField::Minute => Self {
                minute: value,
                ..self
            },
        }
    }
}

fn wrap(value: u8, delta: i16, modulus: u8) -> u8 {
    let wrapped = (i32::from(value) + i32::from(delta)).rem_euclid(i32::from(modulus));
    // rem_euclid keeps the result in 0..modulus, which always fits a u8
    u8::try_from(wrapped).unwrap_or_default()
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeError::Malformed(s.to_string());

        let (hour, minute) = s.trim().split_once(':').ok_or_else(malformed)?;
        let parse_part = |part: &str| {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
            part.parse::<u8>().map_err(|_| malformed())
        };

        Self::new(parse_part(hour)?, parse_part(minute)?)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // NaiveTime already guarantees hour < 24 and minute < 60
        Self {
            hour: u8::try_from(time.hour()).unwrap_or_default(),
            minute: u8::try_from(time.minute()).unwrap_or_default(),
        }
    }
}
