//! Property-based tests for the resolver over sorted timelines

use cuetrack_core::{
    current_index, current_interval, is_active, is_enabled, is_visible, was_cleared, ClearTime,
    Record,
};
use proptest::prelude::*;

/// Strategy for clear times, roughly a third of them unset
fn arb_clear() -> impl Strategy<Value = ClearTime> {
    prop_oneof![
        1 => Just(ClearTime::from(-1.0)),
        2 => (0u32..1000).prop_map(|c| ClearTime::from(f64::from(c))),
    ]
}

/// Strategy for complete records sorted by timestamp
fn arb_sorted_records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((0u32..1000, arb_clear()), 0..24).prop_map(|mut items| {
        items.sort_by_key(|(timestamp, _)| *timestamp);
        items
            .into_iter()
            .map(|(timestamp, clear)| Record::new(f64::from(timestamp), clear))
            .collect()
    })
}

fn arb_time() -> impl Strategy<Value = f64> {
    (0u32..1100).prop_map(f64::from)
}

fn timestamp(record: &Record) -> f64 {
    record.timestamp.unwrap()
}

fn clear(record: &Record) -> ClearTime {
    record.clear.unwrap()
}

proptest! {
    #[test]
    fn visible_iff_timestamp_not_after_time(time in -1e6f64..1e6, ts in -1e6f64..1e6) {
        prop_assert_eq!(is_visible(time, ts), ts <= time);
    }

    #[test]
    fn cleared_iff_clear_time_reached(time in -1e6f64..1e6, c in -1e6f64..1e6) {
        prop_assert!(!was_cleared(time, ClearTime::from(-1.0)));
        if c != -1.0 {
            prop_assert_eq!(was_cleared(time, ClearTime::from(c)), c <= time);
        }
    }

    #[test]
    fn active_composes_predicates(time in -1e3f64..1e3, ts in -1e3f64..1e3, clear in arb_clear()) {
        prop_assert_eq!(
            is_active(time, ts, clear),
            is_visible(time, ts) && !was_cleared(time, clear)
        );
    }

    #[test]
    fn current_index_is_last_visible(records in arb_sorted_records(), time in arb_time()) {
        let expected = records.iter().rposition(|r| timestamp(r) <= time);
        prop_assert_eq!(current_index(&records, time), expected);
    }

    #[test]
    fn current_interval_covers_visible_prefix(records in arb_sorted_records(), time in arb_time()) {
        let interval = current_interval(&records, time);
        let last = current_index(&records, time);

        prop_assert_eq!(interval.last, last);
        prop_assert_eq!(interval.first, last.map(|_| 0));

        let expected_cleared: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, r)| timestamp(r) <= time && was_cleared(time, clear(r)))
            .map(|(index, _)| index)
            .collect();
        prop_assert_eq!(interval.cleared, expected_cleared);
    }

    #[test]
    fn enabled_iff_some_record_active(records in arb_sorted_records(), time in arb_time()) {
        let expected = records
            .iter()
            .any(|r| is_active(time, timestamp(r), clear(r)));
        prop_assert_eq!(is_enabled(&records, time), expected);
    }

    #[test]
    fn malformed_visible_prefix_aborts_strict_queries(
        records in arb_sorted_records(),
        time in arb_time(),
    ) {
        // Put a malformed record first: strict queries must give up
        let mut with_malformed = vec![Record::malformed()];
        with_malformed.extend(records.iter().copied());

        prop_assert_eq!(current_index(&with_malformed, time), None);
        prop_assert!(!is_enabled(&with_malformed, time));

        // The permissive query shifts by one and is otherwise unchanged
        let interval = current_interval(&with_malformed, time);
        let plain = current_interval(&records, time);
        prop_assert_eq!(interval.first, plain.first.map(|i| i + 1));
        prop_assert_eq!(interval.last, plain.last.map(|i| i + 1));
    }
}
