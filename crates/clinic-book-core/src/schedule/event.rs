//! Sweep boundary events and their processing order.

use std::cmp::Ordering;

use crate::models::TimeValue;

/// Boundary event categories, ordered by processing precedence at a shared
/// instant.
///
/// The discriminants are load-bearing: at the same minute an operating
/// window closes before an appointment end is seen, and an appointment start
/// is seen before an operating window reopens. Under that order,
/// back-to-back sessions and bookings touching a boundary never spuriously
/// create or hide a free slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    OperatingWindowEnd = 0,
    AppointmentEnd = 1,
    AppointmentStart = 2,
    OperatingWindowStart = 3,
}

/// A point in time tagged with the kind of boundary it marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatedEvent {
    pub time: TimeValue,
    pub kind: EventKind,
}

impl AnnotatedEvent {
    pub fn new(time: TimeValue, kind: EventKind) -> Self {
        Self { time, kind }
    }
}

impl Ord for AnnotatedEvent {
    /// Time ascending, ties broken by kind precedence.
    ///
    /// Events with equal time and kind compare equal; the sweep sorts with a
    /// stable sort, so such duplicates keep their insertion order and are
    /// never collapsed.
    fn cmp(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time).then(self.kind.cmp(&other.kind))
    }
}

impl PartialOrd for AnnotatedEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
