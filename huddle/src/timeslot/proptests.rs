//! Property-based tests for date and slot types.
//!
//! These tests focus on the wire/storage round trips and the ordering and
//! overlap invariants the booking and sweep queries rely on.

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;

use super::{ReservationDate, Slot, SlotTime};

// Strategy for generating arbitrary calendar dates
fn date_strategy() -> impl Strategy<Value = ReservationDate> {
    (2000i32..2100, 1u32..=12, 1u32..=31).prop_filter_map(
        "day must exist in month",
        |(year, month, day)| NaiveDate::from_ymd_opt(year, month, day).map(ReservationDate::from),
    )
}

// Strategy for generating whole-minute times of day
fn time_strategy() -> impl Strategy<Value = SlotTime> {
    (0u32..24, 0u32..60).prop_map(|(hour, minute)| {
        SlotTime::from(NaiveTime::from_hms_opt(hour, minute, 0).unwrap())
    })
}

// Strategy for generating valid slots
fn slot_strategy() -> impl Strategy<Value = Slot> {
    prop::collection::btree_set(0u32..(24 * 60), 2).prop_map(|minutes| {
        let times: Vec<SlotTime> = minutes
            .into_iter()
            .map(|m| SlotTime::from(NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap()))
            .collect();
        Slot::new(times[0], times[1]).unwrap()
    })
}

// Strategy for generating three strictly increasing times
fn ordered_triple_strategy() -> impl Strategy<Value = (SlotTime, SlotTime, SlotTime)> {
    prop::collection::btree_set(0u32..(24 * 60), 3).prop_map(|minutes| {
        let times: Vec<SlotTime> = minutes
            .into_iter()
            .map(|m| SlotTime::from(NaiveTime::from_hms_opt(m / 60, m % 60, 0).unwrap()))
            .collect();
        (times[0], times[1], times[2])
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // The wire format round-trips every representable date
    #[test]
    fn date_wire_round_trip(date in date_strategy()) {
        let parsed = ReservationDate::parse(&format!("{date}")).unwrap();
        prop_assert_eq!(parsed, date);
    }

    // The storage format round-trips every representable date
    #[test]
    fn date_storage_round_trip(date in date_strategy()) {
        let restored = ReservationDate::from_storage(&date.storage_key()).unwrap();
        prop_assert_eq!(restored, date);
    }

    // Storage keys compare exactly like the calendar dates they encode, so
    // SQL string ordering over stored dates is chronological
    #[test]
    fn storage_key_order_matches_calendar_order(
        a in date_strategy(),
        b in date_strategy()
    ) {
        prop_assert_eq!(a.cmp(&b), a.storage_key().cmp(&b.storage_key()));
    }

    // The time wire format round-trips every whole-minute time
    #[test]
    fn time_wire_round_trip(time in time_strategy()) {
        let parsed = SlotTime::parse(&format!("{time}")).unwrap();
        prop_assert_eq!(parsed, time);
    }

    // The slot wire format round-trips every valid slot
    #[test]
    fn slot_wire_round_trip(slot in slot_strategy()) {
        let parsed = Slot::parse(&format!("{slot}")).unwrap();
        prop_assert_eq!(parsed, slot);
    }

    // Overlap is symmetric
    #[test]
    fn overlap_is_symmetric(a in slot_strategy(), b in slot_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    // Every slot overlaps itself
    #[test]
    fn slot_overlaps_itself(slot in slot_strategy()) {
        prop_assert!(slot.overlaps(&slot));
    }

    // Back-to-back slots never overlap: the ranges are half-open
    #[test]
    fn adjacent_slots_never_overlap(
        (first, shared, last) in ordered_triple_strategy()
    ) {
        let before = Slot::new(first, shared).unwrap();
        let after = Slot::new(shared, last).unwrap();
        prop_assert!(!before.overlaps(&after));
        prop_assert!(!after.overlaps(&before));
    }
}
