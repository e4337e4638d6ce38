//! Free-slot computation for one clinic day.

use chrono::NaiveDate;

use super::event::{AnnotatedEvent, EventKind};
use crate::models::{Appointment, IntervalList, TimeInterval, TimeValue};

/// Compute the free intervals inside the operating windows that no booked
/// window covers.
///
/// A moment is free iff at least one operating session is open and no
/// appointment is running. Occupancy is counted, not flagged, so overlapping
/// booked input is tolerated: double-booked minutes stay busy until every
/// covering window has ended. With no operating windows the result is empty
/// regardless of bookings. Degenerate zero-length intervals produced at
/// exact touch points are pruned from the result.
pub fn free_intervals(operating: &[TimeInterval], booked: &[TimeInterval]) -> IntervalList {
    let mut events = Vec::with_capacity(2 * (operating.len() + booked.len()));
    for window in operating {
        events.push(AnnotatedEvent::new(
            window.start,
            EventKind::OperatingWindowStart,
        ));
        events.push(AnnotatedEvent::new(window.end, EventKind::OperatingWindowEnd));
    }
    for window in booked {
        events.push(AnnotatedEvent::new(window.start, EventKind::AppointmentStart));
        events.push(AnnotatedEvent::new(window.end, EventKind::AppointmentEnd));
    }
    // Stable sort; tie-break order lives on AnnotatedEvent.
    events.sort();

    let mut open_sessions: i32 = 0;
    let mut busy_appointments: i32 = 0;
    let mut free_since: Option<TimeValue> = None;
    let mut free = IntervalList::new();

    for event in events {
        match event.kind {
            EventKind::OperatingWindowStart => open_sessions += 1,
            EventKind::OperatingWindowEnd => open_sessions -= 1,
            EventKind::AppointmentStart => busy_appointments += 1,
            EventKind::AppointmentEnd => busy_appointments -= 1,
        }

        let is_free = open_sessions > 0 && busy_appointments == 0;
        match (free_since, is_free) {
            (None, true) => free_since = Some(event.time),
            (Some(start), false) => {
                let interval = TimeInterval::new(start, event.time);
                if interval.is_valid() {
                    free.push(interval);
                }
                free_since = None;
            }
            _ => {}
        }
    }

    free.clear_zero_intervals()
}

/// Free intervals for `date`: only appointments on that date occupy time
/// inside the day's operating windows.
pub fn free_intervals_for(
    date: NaiveDate,
    operating: &[TimeInterval],
    appointments: &[Appointment],
) -> IntervalList {
    let booked: Vec<TimeInterval> = appointments
        .iter()
        .filter(|a| a.date == date)
        .map(|a| a.window())
        .collect();
    free_intervals(operating, &booked)
}
