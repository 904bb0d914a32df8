use crate::error::{YatraError, YcResult};
use crate::trips::{District, TimeOfDay, TransportMode, Trip, TripPurpose};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::IntoEnumIterator;
use tracing::debug;
use typed_builder::TypedBuilder;

/// Inclusive per-trip cost window, in rupees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostRange {
    pub min: f64,
    pub max: f64,
}

impl Default for CostRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl CostRange {
    pub const FULL: CostRange = CostRange {
        min: 0.0,
        max: f64::MAX,
    };

    pub fn new(min: f64, max: f64) -> YcResult<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(YatraError::Config(format!(
                "Cost range [{}, {}] is empty (min must not exceed max)",
                min, max
            )));
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn contains(&self, cost: f64) -> bool {
        cost >= self.min && cost <= self.max
    }
}

/// Inclusive calendar window over the trip's UTC date. Missing bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date <= e)
    }
}

/// The active filter selections. Empty sets mean "no restriction".
///
/// Built once and never mutated; a new selection is a new value.
#[derive(Debug, Clone, PartialEq, TypedBuilder, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    #[builder(default, setter(into))]
    pub modes: BTreeSet<TransportMode>,
    #[builder(default, setter(into))]
    pub purposes: BTreeSet<TripPurpose>,
    #[builder(default, setter(into))]
    pub times_of_day: BTreeSet<TimeOfDay>,
    #[builder(default, setter(into))]
    pub districts: BTreeSet<District>,
    #[builder(default)]
    pub cost: CostRange,
    #[builder(default)]
    pub dates: DateRange,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl FilterState {
    /// Every mode, every purpose, the full cost range.
    pub fn select_all() -> Self {
        Self::builder()
            .modes(TransportMode::iter().collect::<BTreeSet<_>>())
            .purposes(TripPurpose::iter().collect::<BTreeSet<_>>())
            .build()
    }

    pub fn matches(&self, trip: &Trip) -> bool {
        (self.modes.is_empty() || self.modes.contains(&trip.mode))
            && (self.purposes.is_empty() || self.purposes.contains(&trip.purpose))
            && self.cost.contains(trip.cost)
            && (self.times_of_day.is_empty() || self.times_of_day.contains(&trip.time_of_day()))
            && (self.districts.is_empty() || self.districts.contains(&trip.district))
            && self.dates.contains(trip.date())
    }

    pub fn apply<'a>(&self, trips: &'a [Trip]) -> Vec<&'a Trip> {
        let kept: Vec<&Trip> = trips.iter().filter(|t| self.matches(t)).collect();
        debug!("Filter kept {} of {} trip patterns", kept.len(), trips.len());
        kept
    }
}
