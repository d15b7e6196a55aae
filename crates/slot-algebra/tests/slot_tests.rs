//! Tests for the `Slot` value type itself.

use chrono::{DateTime, TimeZone, Utc};
use slot_algebra::{Slot, SlotError};

fn slot(start: &str, end: &str) -> Slot {
    Slot::new(start.parse().unwrap(), end.parse().unwrap())
}

#[test]
fn checked_accepts_well_formed_slots() {
    let s = Slot::checked(
        Utc.with_ymd_and_hms(2026, 5, 4, 9, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 5, 4, 10, 0, 0).unwrap(),
    )
    .unwrap();
    assert_eq!(s.duration_minutes(), 60);
}

#[test]
fn checked_accepts_zero_length_slots() {
    let t = Utc.with_ymd_and_hms(2026, 5, 4, 9, 0, 0).unwrap();
    let s = Slot::checked(t, t).unwrap();
    assert_eq!(s.duration_minutes(), 0);
}

#[test]
fn checked_rejects_inverted_slots() {
    let result = Slot::checked(
        Utc.with_ymd_and_hms(2026, 5, 4, 10, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 5, 4, 9, 0, 0).unwrap(),
    );
    assert!(matches!(result, Err(SlotError::InvalidArgument(_))));
}

#[test]
fn overlap_is_strict() {
    let a = slot("2026-05-04T09:00:00Z", "2026-05-04T10:00:00Z");
    let b = slot("2026-05-04T09:30:00Z", "2026-05-04T10:30:00Z");
    let c = slot("2026-05-04T10:00:00Z", "2026-05-04T11:00:00Z");

    assert!(a.overlaps(&b));
    assert!(b.overlaps(&a));
    // Touching is not overlap.
    assert!(!a.overlaps(&c));
    assert!(!c.overlaps(&a));
}

#[test]
fn containment_includes_boundaries() {
    let outer = slot("2026-05-04T09:00:00Z", "2026-05-04T12:00:00Z");
    let inner = slot("2026-05-04T09:00:00Z", "2026-05-04T10:00:00Z");
    let crossing = slot("2026-05-04T11:00:00Z", "2026-05-04T13:00:00Z");

    assert!(outer.contains(&inner));
    assert!(outer.contains(&outer));
    assert!(!outer.contains(&crossing));
}

#[test]
fn shift_days_preserves_time_of_day_and_duration() {
    let s = slot("2026-05-04T09:15:00Z", "2026-05-04T10:45:00Z");
    let moved = s.shift_days(200);

    assert_eq!(moved.start, "2026-11-20T09:15:00Z".parse::<DateTime<Utc>>().unwrap());
    assert_eq!(moved.duration_minutes(), s.duration_minutes());
    assert_eq!(s.shift_days(0), s);
    assert_eq!(moved.shift_days(-200), s);
}

#[test]
fn slot_serializes_as_start_end_pair() {
    let s = slot("2026-05-04T09:00:00Z", "2026-05-04T10:00:00Z");

    let json = serde_json::to_value(s).unwrap();
    assert_eq!(json["start"], "2026-05-04T09:00:00Z");
    assert_eq!(json["end"], "2026-05-04T10:00:00Z");

    let back: Slot = serde_json::from_value(json).unwrap();
    assert_eq!(back, s);
}
