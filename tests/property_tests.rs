use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use strum::IntoEnumIterator;
use yatrachain::export::trips_to_csv;
use yatrachain::filter::{CostRange, FilterState};
use yatrachain::stats::summarize;
use yatrachain::trips::{District, LngLat, TransportMode, Trip, TripPurpose};

// --- STRATEGIES ---

fn arb_mode() -> impl Strategy<Value = TransportMode> {
    let all: Vec<TransportMode> = TransportMode::iter().collect();
    proptest::sample::select(all)
}

fn arb_purpose() -> impl Strategy<Value = TripPurpose> {
    let all: Vec<TripPurpose> = TripPurpose::iter().collect();
    proptest::sample::select(all)
}

prop_compose! {
    fn arb_trip()(
        mode in arb_mode(),
        purpose in arb_purpose(),
        lng in 74.0..78.0f64,
        lat in 8.0..13.0f64,
        distance in 0.0..300.0f64,
        duration in 1u32..300,
        cost in 0.0..500.0f64,
        hour in 0u32..24,
        minute in 0u32..60,
        count in 0u64..500
    ) -> Trip {
        Trip {
            id: format!("{}-{}", mode, count),
            origin: LngLat(lng, lat),
            destination: LngLat(lng + 0.1, lat - 0.1),
            origin_label: "A".to_string(),
            destination_label: "B".to_string(),
            district: District::Ernakulam,
            mode,
            purpose,
            distance,
            duration,
            cost,
            timestamp: Utc.with_ymd_and_hms(2024, 9, 17, hour, minute, 0).unwrap(),
            count,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_select_all_matches_everything(trips in proptest::collection::vec(arb_trip(), 0..40)) {
        let state = FilterState::select_all();
        for t in &trips {
            prop_assert!(state.matches(t));
        }
    }

    #[test]
    fn test_total_is_sum_of_counts(trips in proptest::collection::vec(arb_trip(), 0..40)) {
        let expected: u64 = trips.iter().map(|t| t.count).sum();
        prop_assert_eq!(summarize(&trips).total_trips, expected);
    }

    #[test]
    fn test_shares_are_bounded_percentages(trips in proptest::collection::vec(arb_trip(), 0..40)) {
        let s = summarize(&trips);
        if s.total_trips == 0 {
            prop_assert!(s.mode_share.is_empty());
        } else {
            for &v in s.mode_share.values() {
                prop_assert!(v <= 100);
            }
            // Each mode rounds on its own, so the sum drifts by at most half a point per mode.
            let drift = (s.share_total() as i64 - 100).abs();
            prop_assert!(drift * 2 <= s.mode_share.len() as i64, "drift {} over {:?}", drift, s.mode_share);
        }
    }

    #[test]
    fn test_csv_has_one_line_per_trip(trips in proptest::collection::vec(arb_trip(), 0..40)) {
        let csv = trips_to_csv(&trips).unwrap();
        prop_assert_eq!(csv.lines().count(), trips.len() + 1);
    }

    #[test]
    fn test_filtering_is_idempotent_and_shrinks(
        trips in proptest::collection::vec(arb_trip(), 0..40),
        mode in arb_mode(),
        lo in 0.0..250.0f64,
        span in 0.0..250.0f64
    ) {
        let state = FilterState::builder()
            .modes([mode])
            .cost(CostRange::new(lo, lo + span).unwrap())
            .build();

        let once: Vec<Trip> = state.apply(&trips).into_iter().cloned().collect();
        let twice = state.apply(&once);

        prop_assert_eq!(twice.len(), once.len());
        prop_assert!(summarize(&once).total_trips <= summarize(&trips).total_trips);
        for t in &once {
            prop_assert_eq!(t.mode, mode);
            prop_assert!(t.cost >= lo && t.cost <= lo + span);
        }
    }
}
