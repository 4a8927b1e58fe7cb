//! Property tests for the distance baseline and bar mapping

use navhud_core::{DistanceBaseline, Progress};
use navhud_protocol::DistanceField;
use proptest::prelude::*;

fn field() -> impl Strategy<Value = DistanceField> {
    prop_oneof![
        Just(DistanceField::Absent),
        Just(DistanceField::NoRoute),
        any::<u32>().prop_map(DistanceField::Meters),
        (0u32..20_000).prop_map(DistanceField::Meters),
    ]
}

proptest! {
    #[test]
    fn initial_never_below_current(fields in prop::collection::vec(field(), 0..64)) {
        let mut baseline = DistanceBaseline::new();
        for field in fields {
            baseline.update(field);
            prop_assert!(baseline.initial() >= baseline.current());
        }
    }

    #[test]
    fn initial_only_grows_once_started(fields in prop::collection::vec(field(), 0..64)) {
        let mut baseline = DistanceBaseline::new();
        for field in fields {
            let before = baseline.initial();
            baseline.update(field);
            if before != 0 {
                prop_assert!(baseline.initial() >= before);
            }
        }
    }

    #[test]
    fn only_meters_move_the_baseline(start in 1u32.., other in prop_oneof![
        Just(DistanceField::Absent),
        Just(DistanceField::NoRoute),
    ]) {
        let mut baseline = DistanceBaseline::new();
        baseline.record(start);
        let before = baseline;
        prop_assert_eq!(baseline.update(other), None);
        prop_assert_eq!(baseline, before);
    }

    #[test]
    fn label_shows_current(readings in prop::collection::vec(any::<u32>(), 1..32)) {
        let mut baseline = DistanceBaseline::new();
        for meters in readings {
            let progress = baseline.record(meters);
            prop_assert_eq!(progress.remaining(), meters);
        }
    }

    #[test]
    fn fill_stays_inside_bar(traveled in any::<u32>(), max in any::<u32>(), inner in 0u16..=256) {
        let fill = Progress { traveled, max }.fill_width(inner);
        prop_assert!(fill <= inner);
        if max == 0 || traveled == 0 {
            prop_assert_eq!(fill, 0);
        }
    }

    #[test]
    fn fill_is_monotonic(max in 1u32.., a in any::<u32>(), b in any::<u32>()) {
        let (low, high) = (a.min(b).min(max), a.max(b).min(max));
        let inner = 106;
        let low_fill = Progress { traveled: low, max }.fill_width(inner);
        let high_fill = Progress { traveled: high, max }.fill_width(inner);
        prop_assert!(low_fill <= high_fill);
    }
}
