//! Archive rollover: move expired appointments into monthly partitions.

use chrono::NaiveDate;
use log::warn;

use super::{ArchiveStore, PartitionKey};
use crate::models::{Appointment, ArchivedAppointment};

/// Counters reported by one rollover pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArchiveStats {
    /// Appointments moved out of the active collection.
    pub archived: usize,
    /// Archived appointments that were never marked done.
    pub not_done_expired: usize,
}

/// Result of a rollover pass: what stays active, and what was counted.
#[derive(Debug, Clone, PartialEq)]
pub struct RolloverOutcome {
    pub upcoming: Vec<Appointment>,
    pub stats: ArchiveStats,
}

/// Partition `appointments` into expired entries, appended to their monthly
/// partitions, and upcoming entries, kept verbatim in their original order.
///
/// The input must be sorted ascending by date; appointments need not also be
/// time-ordered within a date. Expired means dated strictly before `today`.
/// The walk stops consuming at the first non-expired appointment. Buckets
/// are keyed by `(year, month)` and flushed only when that key actually
/// changes, so a day change inside a month never flushes.
///
/// When nothing is expired the input collection is returned untouched and
/// the store is never called. A failed partition write is logged and does
/// not abort the pass: the in-memory result still stands, and the durable
/// copy may lag it until a later pass appends again.
pub fn roll_over(
    appointments: Vec<Appointment>,
    today: NaiveDate,
    store: &mut dyn ArchiveStore,
) -> RolloverOutcome {
    let mut stats = ArchiveStats::default();
    let mut bucket: Vec<ArchivedAppointment> = Vec::new();
    let mut bucket_key: Option<PartitionKey> = None;
    let mut upcoming_from = appointments.len();

    for (index, appointment) in appointments.iter().enumerate() {
        if !appointment.is_expired(today) {
            // Dates are ascending, so everything from here on is upcoming.
            upcoming_from = index;
            break;
        }

        let key = PartitionKey::for_date(appointment.date);
        match bucket_key {
            None => bucket_key = Some(key),
            Some(current) if current != key => {
                flush(store, &current, &mut bucket);
                bucket_key = Some(key);
            }
            Some(_) => {}
        }

        bucket.push(ArchivedAppointment::from(appointment));
        stats.archived += 1;
        if !appointment.is_done {
            stats.not_done_expired += 1;
        }
    }

    if let Some(key) = bucket_key {
        flush(store, &key, &mut bucket);
    }

    if stats.archived == 0 {
        return RolloverOutcome {
            upcoming: appointments,
            stats,
        };
    }

    RolloverOutcome {
        upcoming: appointments[upcoming_from..].to_vec(),
        stats,
    }
}

fn flush(store: &mut dyn ArchiveStore, key: &PartitionKey, bucket: &mut Vec<ArchivedAppointment>) {
    if bucket.is_empty() {
        return;
    }
    if let Err(err) = store.append_batch(key, bucket) {
        warn!("failed to flush archive partition {key}: {err}");
    }
    bucket.clear();
}
