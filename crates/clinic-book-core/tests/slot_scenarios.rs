//! Scenario tests for the free-slot sweep engine.
//!
//! Each case describes one clinic day: operating sessions, booked windows,
//! and the free intervals the sweep must report. Minutes are counted from
//! midnight, so 480 is 08:00 and 1320 is 22:00.

use clinic_book_core::models::{TimeInterval, TimeValue};
use clinic_book_core::schedule::free_intervals;

struct SlotCase {
    id: &'static str,
    operating: &'static [(u16, u16)],
    booked: &'static [(u16, u16)],
    expected_free: &'static [(u16, u16)],
}

fn slot_cases() -> Vec<SlotCase> {
    vec![
        SlotCase {
            id: "open-day-no-bookings",
            operating: &[(480, 1320)],
            booked: &[],
            expected_free: &[(480, 1320)],
        },
        SlotCase {
            id: "bookings-at-open-and-mid-morning",
            operating: &[(480, 1320)],
            booked: &[(480, 540), (600, 630)],
            expected_free: &[(540, 600), (630, 1320)],
        },
        SlotCase {
            id: "back-to-back-bookings-no-gap",
            operating: &[(480, 1320)],
            booked: &[(540, 600), (600, 660)],
            expected_free: &[(480, 540), (660, 1320)],
        },
        SlotCase {
            id: "booking-fills-session-exactly",
            operating: &[(480, 540)],
            booked: &[(480, 540)],
            expected_free: &[],
        },
        SlotCase {
            id: "closed-day",
            operating: &[],
            booked: &[(480, 540)],
            expected_free: &[],
        },
        SlotCase {
            id: "two-sessions-with-lunch-break",
            operating: &[(480, 720), (780, 1320)],
            booked: &[],
            expected_free: &[(480, 720), (780, 1320)],
        },
        SlotCase {
            id: "booking-straddles-the-break",
            operating: &[(480, 720), (780, 1320)],
            booked: &[(700, 800)],
            expected_free: &[(480, 700), (800, 1320)],
        },
        SlotCase {
            id: "overlapping-bookings-stay-busy",
            operating: &[(480, 720)],
            booked: &[(540, 630), (600, 660)],
            expected_free: &[(480, 540), (660, 720)],
        },
        SlotCase {
            id: "booking-outside-hours-ignored",
            operating: &[(480, 540)],
            booked: &[(600, 660)],
            expected_free: &[(480, 540)],
        },
        SlotCase {
            id: "booking-ends-at-session-close",
            operating: &[(480, 720)],
            booked: &[(660, 720)],
            expected_free: &[(480, 660)],
        },
        SlotCase {
            id: "session-fully-booked-other-session-free",
            operating: &[(480, 540), (600, 720)],
            booked: &[(480, 540)],
            expected_free: &[(600, 720)],
        },
    ]
}

fn interval(minutes: &(u16, u16)) -> TimeInterval {
    TimeInterval::new(
        TimeValue::from_minutes(minutes.0).unwrap(),
        TimeValue::from_minutes(minutes.1).unwrap(),
    )
}

#[test]
fn sweep_matches_expected_free_intervals() {
    for case in slot_cases() {
        let operating: Vec<TimeInterval> = case.operating.iter().map(interval).collect();
        let booked: Vec<TimeInterval> = case.booked.iter().map(interval).collect();
        let expected: Vec<TimeInterval> = case.expected_free.iter().map(interval).collect();

        let free = free_intervals(&operating, &booked);
        assert_eq!(free.as_slice(), expected.as_slice(), "case {}", case.id);
    }
}

#[test]
fn sweep_results_are_usable_without_revalidation() {
    for case in slot_cases() {
        let operating: Vec<TimeInterval> = case.operating.iter().map(interval).collect();
        let booked: Vec<TimeInterval> = case.booked.iter().map(interval).collect();

        for free in free_intervals(&operating, &booked) {
            assert!(free.is_valid(), "case {}", case.id);
            assert!(!free.is_zero(), "case {}", case.id);
        }
    }
}
