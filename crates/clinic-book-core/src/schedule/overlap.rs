//! Time-overlap conflict detection.

use crate::models::{Appointment, TimeInterval};

/// Strict interior intersection: two windows overlap iff each starts before
/// the other ends. Touching at a boundary is adjacency, not overlap.
pub fn intervals_overlap(a: &TimeInterval, b: &TimeInterval) -> bool {
    a.start < b.end && b.start < a.end
}

/// True iff `candidate` books time already covered by `existing` on the same
/// calendar day.
pub fn appointments_clash(candidate: &Appointment, existing: &Appointment) -> bool {
    candidate.date == existing.date && intervals_overlap(&candidate.window(), &existing.window())
}

/// True iff any appointment in `existing` clashes with `candidate`.
pub fn has_overlaps_with(candidate: &Appointment, existing: &[Appointment]) -> bool {
    existing.iter().any(|a| appointments_clash(candidate, a))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{Nric, TimeValue};

    fn interval(start: u16, end: u16) -> TimeInterval {
        TimeInterval::new(
            TimeValue::from_minutes(start).unwrap(),
            TimeValue::from_minutes(end).unwrap(),
        )
    }

    fn appointment(date: NaiveDate, start: u16, end: u16) -> Appointment {
        Appointment::new(
            date,
            TimeValue::from_minutes(start).unwrap(),
            TimeValue::from_minutes(end).unwrap(),
            Nric::new("S0123456A").unwrap(),
        )
    }

    #[test]
    fn test_touching_windows_do_not_overlap() {
        // 09:00-10:00 then 10:00-11:00.
        assert!(!intervals_overlap(&interval(540, 600), &interval(600, 660)));
        assert!(!intervals_overlap(&interval(600, 660), &interval(540, 600)));
    }

    #[test]
    fn test_one_minute_intrusion_overlaps() {
        assert!(intervals_overlap(&interval(540, 600), &interval(599, 660)));
        assert!(intervals_overlap(&interval(599, 660), &interval(540, 600)));
    }

    #[test]
    fn test_containment_overlaps() {
        assert!(intervals_overlap(&interval(540, 660), &interval(560, 580)));
    }

    #[test]
    fn test_clash_requires_same_date() {
        let monday = NaiveDate::from_ymd_opt(2010, 5, 3).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2010, 5, 4).unwrap();

        let a = appointment(monday, 540, 600);
        let same_day = appointment(monday, 570, 630);
        let other_day = appointment(tuesday, 570, 630);

        assert!(appointments_clash(&a, &same_day));
        assert!(!appointments_clash(&a, &other_day));
    }

    #[test]
    fn test_has_overlaps_with() {
        let monday = NaiveDate::from_ymd_opt(2010, 5, 3).unwrap();
        let existing = vec![appointment(monday, 540, 600), appointment(monday, 660, 720)];

        assert!(has_overlaps_with(&appointment(monday, 590, 610), &existing));
        assert!(!has_overlaps_with(&appointment(monday, 600, 660), &existing));
        assert!(!has_overlaps_with(&appointment(monday, 720, 780), &existing));
    }
}
