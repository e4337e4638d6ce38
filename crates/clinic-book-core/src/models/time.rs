//! Minute-granularity clock times and intervals.

use std::fmt;

use thiserror::Error;

/// Minutes in a clinic day; `TimeValue` covers `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Errors from constructing or parsing a time value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("hour out of range: {0}")]
    HourOutOfRange(u8),

    #[error("minute out of range: {0}")]
    MinuteOutOfRange(u8),

    #[error("minute-of-day out of range: {0}")]
    MinuteOfDayOutOfRange(u16),

    #[error("malformed time: {0:?}")]
    Malformed(String),
}

/// A clock time with minute granularity, stored as minutes since midnight.
///
/// Immutable and totally ordered by minute count. Construction fails fast on
/// out-of-range components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeValue(u16);

impl TimeValue {
    /// Build from a 24-hour clock reading.
    pub fn new(hour: u8, minute: u8) -> Result<Self, TimeError> {
        if hour >= 24 {
            return Err(TimeError::HourOutOfRange(hour));
        }
        if minute >= 60 {
            return Err(TimeError::MinuteOutOfRange(minute));
        }
        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Build from a minute-of-day count.
    pub fn from_minutes(minutes: u16) -> Result<Self, TimeError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(TimeError::MinuteOfDayOutOfRange(minutes));
        }
        Ok(Self(minutes))
    }

    /// Parse `"HH:MM"` (24-hour clock).
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        let malformed = || TimeError::Malformed(text.to_string());
        let (hour, minute) = text.trim().split_once(':').ok_or_else(malformed)?;
        let hour: u8 = hour.parse().map_err(|_| malformed())?;
        let minute: u8 = minute.parse().map_err(|_| malformed())?;
        Self::new(hour, minute)
    }

    pub fn hour(&self) -> u8 {
        (self.0 / 60) as u8
    }

    pub fn minute(&self) -> u8 {
        (self.0 % 60) as u8
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A time range within one day.
///
/// Construction places no constraint on the endpoints: `end < start` is
/// representable, and validity is a predicate. Anything that derives an
/// interval from a computation must check `is_valid` before trusting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    pub start: TimeValue,
    pub end: TimeValue,
}

impl TimeInterval {
    pub fn new(start: TimeValue, end: TimeValue) -> Self {
        Self { start, end }
    }

    /// True iff `end >= start`. A zero-length interval is valid.
    pub fn is_valid(&self) -> bool {
        self.end >= self.start
    }

    /// True iff the interval is a single unmoving instant.
    pub fn is_zero(&self) -> bool {
        self.start == self.end
    }

    /// Signed length in minutes; negative exactly when the interval is
    /// invalid.
    pub fn duration_minutes(&self) -> i32 {
        i32::from(self.end.minutes()) - i32::from(self.start.minutes())
    }

    pub fn is_at_least_one_hour(&self) -> bool {
        self.duration_minutes() >= 60
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Intervals in the order a sweep emitted them, chronological left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntervalList(Vec<TimeInterval>);

impl IntervalList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, interval: TimeInterval) {
        self.0.push(interval);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeInterval> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[TimeInterval] {
        &self.0
    }

    /// A new list with every zero-length interval removed. Non-destructive;
    /// the original list keeps its degenerate entries.
    pub fn clear_zero_intervals(&self) -> Self {
        Self(self.0.iter().copied().filter(|i| !i.is_zero()).collect())
    }
}

impl From<Vec<TimeInterval>> for IntervalList {
    fn from(intervals: Vec<TimeInterval>) -> Self {
        Self(intervals)
    }
}

impl IntoIterator for IntervalList {
    type Item = TimeInterval;
    type IntoIter = std::vec::IntoIter<TimeInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
