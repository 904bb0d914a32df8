use crate::trips::{TransportMode, Trip, TripPurpose};
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub trip_patterns: usize,
    pub total_trips: u64,
    pub avg_distance_km: f64,
    /// Whole rupees.
    pub avg_cost: u32,
    /// Whole-number percentages, rounded per mode. May not sum to exactly 100.
    pub mode_share: BTreeMap<TransportMode, u32>,
    /// Modes in the order they first appear in the input.
    #[serde(skip)]
    pub mode_order: Vec<TransportMode>,
    pub purpose_share: BTreeMap<TripPurpose, u32>,
    pub hourly_trips: BTreeMap<u32, u64>,
    pub peak_hour: Option<u32>,
}

/// Reduces a (filtered) trip collection. Every record stands for `count` journeys,
/// so totals and averages are weighted by it.
///
/// Counts saturate at `u64::MAX`. `TripStore` rejects data whose counts do not fit, so
/// only hand-built collections can reach that.
pub fn summarize<T: Borrow<Trip>>(trips: &[T]) -> StatsSummary {
    let mut total_trips: u64 = 0;
    let mut distance_sum = 0.0;
    let mut cost_sum = 0.0;
    let mut mode_counts: BTreeMap<TransportMode, u64> = BTreeMap::new();
    let mut mode_order: Vec<TransportMode> = Vec::new();
    let mut purpose_counts: BTreeMap<TripPurpose, u64> = BTreeMap::new();
    let mut hourly_trips: BTreeMap<u32, u64> = BTreeMap::new();

    for item in trips {
        let t: &Trip = item.borrow();
        total_trips = total_trips.saturating_add(t.count);
        distance_sum += t.distance * t.count as f64;
        cost_sum += t.cost * t.count as f64;
        if !mode_counts.contains_key(&t.mode) {
            mode_order.push(t.mode);
        }
        add_count(&mut mode_counts, t.mode, t.count);
        add_count(&mut purpose_counts, t.purpose, t.count);
        add_count(&mut hourly_trips, t.hour(), t.count);
    }

    if total_trips == 0 {
        return StatsSummary {
            trip_patterns: trips.len(),
            ..Default::default()
        };
    }

    let total = total_trips as f64;

    // Ties go to the earliest hour: max_by_key keeps the last maximum, so walk backwards.
    let peak_hour = hourly_trips
        .iter()
        .rev()
        .max_by_key(|&(_, c)| *c)
        .map(|(&h, _)| h);

    StatsSummary {
        trip_patterns: trips.len(),
        total_trips,
        avg_distance_km: round_to(distance_sum / total, 1),
        avg_cost: (cost_sum / total).round() as u32,
        mode_share: share_of(&mode_counts, total),
        mode_order,
        purpose_share: share_of(&purpose_counts, total),
        hourly_trips,
        peak_hour,
    }
}

fn add_count<K: Ord>(counts: &mut BTreeMap<K, u64>, key: K, n: u64) {
    let slot = counts.entry(key).or_insert(0);
    *slot = slot.saturating_add(n);
}

fn share_of<K: Ord + Copy>(counts: &BTreeMap<K, u64>, total: f64) -> BTreeMap<K, u32> {
    counts
        .iter()
        .map(|(&k, &c)| (k, (c as f64 / total * 100.0).round() as u32))
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

impl StatsSummary {
    /// Mode with the largest share. On a tie the mode seen last in the input wins.
    pub fn top_mode(&self) -> Option<(TransportMode, u32)> {
        self.mode_order
            .iter()
            .filter_map(|m| self.mode_share.get(m).map(|&s| (*m, s)))
            .fold(None, |best: Option<(TransportMode, u32)>, (m, s)| match best {
                Some((_, bs)) if bs > s => best,
                _ => Some((m, s)),
            })
    }

    pub fn share_total(&self) -> u32 {
        self.mode_share.values().sum()
    }

    pub fn peak_hour_label(&self) -> Option<String> {
        self.peak_hour.map(hour_label)
    }
}

/// `8` -> "8 AM", `0` -> "12 AM", `18` -> "6 PM".
pub fn hour_label(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let h12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", h12, suffix)
}

/// Compact card-style count: 1.2M, 3.4K, 950.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1000 {
        format!("{:.1}K", n as f64 / 1000.0)
    } else {
        n.to_string()
    }
}
