#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use yatrachain::trips::{District, LngLat, TransportMode, Trip, TripPurpose, TripStore};

pub fn trip(id: &str, mode: TransportMode, purpose: TripPurpose, count: u64) -> Trip {
    Trip {
        id: id.to_string(),
        origin: LngLat(76.2673, 9.9312),
        destination: LngLat(76.3127, 9.9816),
        origin_label: "Kochi".to_string(),
        destination_label: "Kakkanad".to_string(),
        district: District::Ernakulam,
        mode,
        purpose,
        distance: 10.0,
        duration: 30,
        cost: 20.0,
        timestamp: Utc.with_ymd_and_hms(2024, 9, 17, 8, 30, 0).unwrap(),
        count,
    }
}

pub fn at(mut t: Trip, hour: u32, minute: u32) -> Trip {
    t.timestamp = Utc.with_ymd_and_hms(2024, 9, 17, hour, minute, 0).unwrap();
    t
}

pub fn builtin() -> TripStore {
    TripStore::builtin().expect("built-in dataset must parse")
}

pub fn ids(trips: &[&Trip]) -> Vec<String> {
    trips.iter().map(|t| t.id.clone()).collect()
}
