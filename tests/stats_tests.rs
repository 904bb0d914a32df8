mod common;

use common::{at, builtin, trip};
use std::collections::BTreeMap;
use yatrachain::filter::FilterState;
use yatrachain::stats::summarize;
use yatrachain::trips::{TransportMode, Trip, TripPurpose};

#[test]
fn test_two_equal_modes_split_evenly() {
    let trips = vec![
        trip("1", TransportMode::Bus, TripPurpose::Work, 10),
        trip("2", TransportMode::Metro, TripPurpose::Work, 10),
    ];
    let s = summarize(&trips);

    assert_eq!(s.total_trips, 20);
    let expected: BTreeMap<TransportMode, u32> =
        [(TransportMode::Bus, 50), (TransportMode::Metro, 50)].into();
    assert_eq!(s.mode_share, expected);
}

#[test]
fn test_empty_collection_yields_zeroes() {
    let trips: Vec<Trip> = Vec::new();
    let s = summarize(&trips);

    assert_eq!(s.total_trips, 0);
    assert_eq!(s.trip_patterns, 0);
    assert_eq!(s.avg_distance_km, 0.0);
    assert!(s.mode_share.is_empty());
    assert!(s.purpose_share.is_empty());
    assert_eq!(s.peak_hour, None);
    assert_eq!(s.top_mode(), None);
}

#[test]
fn test_zero_count_records_do_not_divide_by_zero() {
    let trips = vec![trip("1", TransportMode::Bus, TripPurpose::Work, 0)];
    let s = summarize(&trips);
    assert_eq!(s.trip_patterns, 1);
    assert_eq!(s.total_trips, 0);
    assert!(s.avg_distance_km.is_finite());
    assert!(s.mode_share.is_empty());
}

#[test]
fn test_total_is_sum_of_counts_not_records() {
    let store = builtin();
    let s = summarize(store.trips());
    assert_eq!(s.trip_patterns, 11);
    assert_eq!(s.total_trips, 1280);
}

#[test]
fn test_original_dashboard_sample() {
    // The first six records are the dashboard's original mock trips.
    let store = builtin();
    let s = summarize(&store.trips()[..6]);

    assert_eq!(s.total_trips, 900);
    assert_eq!(s.avg_distance_km, 49.8);
    assert_eq!(s.avg_cost, 61);
    assert_eq!(s.mode_share[&TransportMode::Bus], 48);
    assert_eq!(s.mode_share[&TransportMode::Metro], 27);
    assert_eq!(s.mode_share[&TransportMode::TwoWheeler], 15);
    assert_eq!(s.mode_share[&TransportMode::Train], 10);
    assert_eq!(s.top_mode(), Some((TransportMode::Bus, 48)));
}

#[test]
fn test_share_rounding_is_per_mode_and_may_undershoot() {
    let trips = vec![
        trip("1", TransportMode::Bus, TripPurpose::Work, 1),
        trip("2", TransportMode::Metro, TripPurpose::Work, 1),
        trip("3", TransportMode::Walk, TripPurpose::Work, 1),
    ];
    let s = summarize(&trips);
    assert!(s.mode_share.values().all(|&v| v == 33));
    assert_eq!(s.share_total(), 99);
}

#[test]
fn test_share_rounding_may_overshoot() {
    // 12.5% and 87.5% both round up.
    let trips = vec![
        trip("1", TransportMode::Bus, TripPurpose::Work, 1),
        trip("2", TransportMode::Metro, TripPurpose::Work, 7),
    ];
    let s = summarize(&trips);
    assert_eq!(s.mode_share[&TransportMode::Bus], 13);
    assert_eq!(s.mode_share[&TransportMode::Metro], 88);
    assert_eq!(s.share_total(), 101);
}

#[test]
fn test_average_distance_is_weighted_by_count() {
    let mut short = trip("1", TransportMode::Bus, TripPurpose::Work, 3);
    short.distance = 2.0;
    let mut long = trip("2", TransportMode::Bus, TripPurpose::Work, 1);
    long.distance = 10.0;

    let s = summarize(&[short, long]);
    assert_eq!(s.avg_distance_km, 4.0);
}

#[test]
fn test_peak_hour_and_ties() {
    let trips = vec![
        at(trip("1", TransportMode::Bus, TripPurpose::Work, 50), 18, 0),
        at(trip("2", TransportMode::Bus, TripPurpose::Work, 50), 8, 15),
        at(trip("3", TransportMode::Bus, TripPurpose::Work, 20), 12, 0),
    ];
    let s = summarize(&trips);
    assert_eq!(s.peak_hour, Some(8));
    assert_eq!(s.peak_hour_label().as_deref(), Some("8 AM"));
    assert_eq!(s.hourly_trips.len(), 3);
}

#[test]
fn test_top_mode_tie_goes_to_last_seen_mode() {
    let trips = vec![
        trip("1", TransportMode::Bus, TripPurpose::Work, 10),
        trip("2", TransportMode::Metro, TripPurpose::Work, 10),
    ];
    assert_eq!(summarize(&trips).top_mode(), Some((TransportMode::Metro, 50)));

    let reversed = vec![
        trip("1", TransportMode::Metro, TripPurpose::Work, 10),
        trip("2", TransportMode::Bus, TripPurpose::Work, 10),
    ];
    assert_eq!(summarize(&reversed).top_mode(), Some((TransportMode::Bus, 50)));
}

#[test]
fn test_top_mode_strict_winner_ignores_order() {
    let trips = vec![
        trip("1", TransportMode::Walk, TripPurpose::Work, 30),
        trip("2", TransportMode::Bus, TripPurpose::Work, 10),
        trip("3", TransportMode::Metro, TripPurpose::Work, 10),
    ];
    assert_eq!(summarize(&trips).top_mode(), Some((TransportMode::Walk, 60)));
}

#[test]
fn test_counts_past_u64_max_saturate() {
    let trips = vec![
        trip("1", TransportMode::Bus, TripPurpose::Work, u64::MAX),
        trip("2", TransportMode::Metro, TripPurpose::Work, 1),
    ];
    let s = summarize(&trips);
    assert_eq!(s.total_trips, u64::MAX);
    assert_eq!(s.mode_share[&TransportMode::Bus], 100);
    assert_eq!(s.hourly_trips[&8], u64::MAX);
}

#[test]
fn test_stats_json_avg_cost_is_whole_rupees() {
    let store = builtin();
    let json = serde_json::to_string(&summarize(&store.trips()[..6])).unwrap();
    assert!(json.contains(r#""avgCost":61,"#), "{}", json);
    assert!(!json.contains("modeOrder"));
}

#[test]
fn test_full_builtin_summary() {
    let store = builtin();
    let filtered = FilterState::select_all().apply(store.trips());
    let s = summarize(&filtered);

    assert_eq!(s.mode_share[&TransportMode::Bus], 49);
    assert_eq!(s.mode_share[&TransportMode::Metro], 24);
    assert_eq!(s.share_total(), 100);
    assert_eq!(s.peak_hour, Some(8));
    assert_eq!(s.hourly_trips[&8], 412);
    assert_eq!(s.purpose_share[&TripPurpose::Work], 72);
}
