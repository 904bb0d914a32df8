use crate::trips::Trip;
use serde::Serialize;
use std::borrow::Borrow;

/// A weighted point for a map provider's heat layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    pub weight: u64,
}

/// One point per trip origin, weighted by the journeys the record stands for.
pub fn origin_points<T: Borrow<Trip>>(trips: &[T]) -> Vec<HeatPoint> {
    trips
        .iter()
        .map(|item| {
            let t: &Trip = item.borrow();
            HeatPoint {
                lat: t.origin.lat(),
                lng: t.origin.lng(),
                weight: t.count,
            }
        })
        .collect()
}
