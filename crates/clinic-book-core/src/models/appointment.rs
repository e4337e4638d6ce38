//! Appointment models and their archival record form.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Nric, TimeInterval, TimeValue};

/// A booked appointment.
///
/// The scheduling engines read the date, window and completion flag; they
/// never mutate an appointment. Ownership stays with the clinic book.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub date: NaiveDate,
    pub start: TimeValue,
    pub end: TimeValue,
    pub patient_nric: Nric,
    pub is_done: bool,
}

impl Appointment {
    pub fn new(date: NaiveDate, start: TimeValue, end: TimeValue, patient_nric: Nric) -> Self {
        Self {
            date,
            start,
            end,
            patient_nric,
            is_done: false,
        }
    }

    /// The booked window as an interval.
    pub fn window(&self) -> TimeInterval {
        TimeInterval::new(self.start, self.end)
    }

    /// Expired means dated strictly before `today`; time of day is ignored.
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.date < today
    }
}

/// The durable record form of an archived appointment.
///
/// Fields are string-encoded for the partition file. Every archival pass
/// appends fresh records, so a logical appointment archived twice appears
/// twice; the partition is an append log, not a set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArchivedAppointment {
    pub patient_nric: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub start: String,
    /// `HH:MM`
    pub end: String,
    pub is_done: bool,
    /// When this record was written out of the active set
    pub archived_at: String,
}

impl From<&Appointment> for ArchivedAppointment {
    fn from(appointment: &Appointment) -> Self {
        Self {
            patient_nric: appointment.patient_nric.as_str().to_string(),
            date: appointment.date.format("%Y-%m-%d").to_string(),
            start: appointment.start.to_string(),
            end: appointment.end.to_string(),
            is_done: appointment.is_done,
            archived_at: Utc::now().to_rfc3339(),
        }
    }
}
