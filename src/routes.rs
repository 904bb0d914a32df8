use crate::error::{YatraError, YcResult};
use crate::trips::{TransportMode, Trip, TripPurpose};
use serde::Serialize;
use std::borrow::Borrow;
use std::collections::HashMap;

/// One row of the aggregated route table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub id: String,
    pub route: String,
    pub mode: TransportMode,
    pub purpose: TripPurpose,
    pub trip_count: u64,
    pub avg_distance: f64,
    /// Minutes, rounded.
    pub avg_duration: u32,
    /// Rupees, rounded.
    pub avg_cost: u32,
    pub total_cost: u64,
    pub peak_hour: String,
}

type RouteKey = (String, String, TransportMode, TripPurpose);

#[derive(Default)]
struct RouteAcc<'a> {
    count: u64,
    distance: f64,
    duration: f64,
    cost: f64,
    busiest: Option<&'a Trip>,
}

/// Groups trips by origin/destination label, mode and purpose, in first-seen order.
pub fn aggregate_routes<T: Borrow<Trip>>(trips: &[T]) -> Vec<RouteSummary> {
    let mut order: Vec<RouteKey> = Vec::new();
    let mut groups: HashMap<RouteKey, RouteAcc> = HashMap::new();

    for item in trips {
        let t: &Trip = item.borrow();
        let key = (
            t.origin_label.clone(),
            t.destination_label.clone(),
            t.mode,
            t.purpose,
        );
        let acc = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            RouteAcc::default()
        });

        let w = t.count as f64;
        acc.count = acc.count.saturating_add(t.count);
        acc.distance += t.distance * w;
        acc.duration += t.duration as f64 * w;
        acc.cost += t.cost * w;
        if acc.busiest.map_or(true, |b| t.count > b.count) {
            acc.busiest = Some(t);
        }
    }

    order
        .into_iter()
        .enumerate()
        .filter_map(|(i, key)| {
            let acc = groups.remove(&key)?;
            let busiest = acc.busiest?;
            let n = if acc.count > 0 { acc.count as f64 } else { 1.0 };
            let (origin, destination, mode, purpose) = key;

            Some(RouteSummary {
                id: format!("AGG{:03}", i + 1),
                route: format!("{} → {}", origin, destination),
                mode,
                purpose,
                trip_count: acc.count,
                avg_distance: ((acc.distance / n) * 10.0).round() / 10.0,
                avg_duration: (acc.duration / n).round() as u32,
                avg_cost: (acc.cost / n).round() as u32,
                total_cost: acc.cost.round() as u64,
                peak_hour: busiest.timestamp.format("%-I:%M %p").to_string(),
            })
        })
        .collect()
}

/// Picks rows by id. An empty id list keeps every row; nothing left to export is an error.
pub fn select_routes(routes: Vec<RouteSummary>, ids: &[String]) -> YcResult<Vec<RouteSummary>> {
    let selected: Vec<RouteSummary> = if ids.is_empty() {
        routes
    } else {
        routes
            .into_iter()
            .filter(|r| ids.iter().any(|id| id.eq_ignore_ascii_case(&r.id)))
            .collect()
    };

    if selected.is_empty() {
        return Err(YatraError::NoDataSelected);
    }
    Ok(selected)
}
