use crate::error::{YatraError, YcResult};
use chrono::{DateTime, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

const BUILTIN_TRIPS: &str = include_str!("../data/kerala_trips.json");

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum TransportMode {
    Bus,
    Metro,
    Train,
    Walk,
    #[strum(serialize = "Two-Wheeler")]
    #[serde(rename = "Two-Wheeler")]
    TwoWheeler,
    Car,
    #[strum(serialize = "Auto-Rickshaw")]
    #[serde(rename = "Auto-Rickshaw")]
    AutoRickshaw,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum TripPurpose {
    Work,
    Education,
    Shopping,
    Leisure,
    Healthcare,
    Other,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum District {
    Thiruvananthapuram,
    Kollam,
    Pathanamthitta,
    Alappuzha,
    Kottayam,
    Idukki,
    Ernakulam,
    Thrissur,
    Palakkad,
    Malappuram,
    Kozhikode,
    Wayanad,
    Kannur,
    Kasaragod,
}

/// Coarse bucket of the hour a trip group started in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum TimeOfDay {
    #[strum(to_string = "Morning Peak", serialize = "morning-peak")]
    #[serde(rename = "Morning Peak")]
    MorningPeak,
    Midday,
    #[strum(to_string = "Evening Peak", serialize = "evening-peak")]
    #[serde(rename = "Evening Peak")]
    EveningPeak,
    Night,
}

impl TimeOfDay {
    // 06-09 | 10-15 | 16-19 | 20-05
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..=9 => Self::MorningPeak,
            10..=15 => Self::Midday,
            16..=19 => Self::EveningPeak,
            _ => Self::Night,
        }
    }
}

/// A `[lng, lat]` pair, the order the source data and map providers use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat(pub f64, pub f64);

impl LngLat {
    pub fn lng(&self) -> f64 {
        self.0
    }

    pub fn lat(&self) -> f64 {
        self.1
    }
}

/// One pre-aggregated group of journeys sharing origin, destination, mode and purpose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub origin: LngLat,
    pub destination: LngLat,
    pub origin_label: String,
    pub destination_label: String,
    pub district: District,
    pub mode: TransportMode,
    pub purpose: TripPurpose,
    pub distance: f64, // km
    pub duration: u32, // minutes
    pub cost: f64,     // rupees
    pub timestamp: DateTime<Utc>,
    pub count: u64,
}

impl Trip {
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        TimeOfDay::from_hour(self.hour())
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn route_label(&self) -> String {
        format!("{} → {}", self.origin_label, self.destination_label)
    }

    pub fn validate(&self) -> YcResult<()> {
        for (name, point) in [("origin", self.origin), ("destination", self.destination)] {
            let lng_ok = (-180.0..=180.0).contains(&point.lng());
            let lat_ok = (-90.0..=90.0).contains(&point.lat());
            if !lng_ok || !lat_ok {
                return Err(YatraError::Validation(format!(
                    "Trip '{}': {} [{}, {}] is not a valid [lng, lat] pair",
                    self.id,
                    name,
                    point.lng(),
                    point.lat()
                )));
            }
        }

        if !self.distance.is_finite() || self.distance < 0.0 {
            return Err(YatraError::Validation(format!(
                "Trip '{}': distance {} must be a non-negative number",
                self.id, self.distance
            )));
        }

        if !self.cost.is_finite() || self.cost < 0.0 {
            return Err(YatraError::Validation(format!(
                "Trip '{}': cost {} must be a non-negative number",
                self.id, self.cost
            )));
        }

        Ok(())
    }
}

/// Read-only collection of trip records, loaded once per session.
#[derive(Debug, Clone, Default)]
pub struct TripStore {
    trips: Vec<Trip>,
}

impl TripStore {
    pub fn new(trips: Vec<Trip>) -> YcResult<Self> {
        let mut total: u64 = 0;
        for trip in &trips {
            trip.validate()?;
            total = total.checked_add(trip.count).ok_or_else(|| {
                YatraError::Validation(format!(
                    "Trip '{}': count {} pushes the total past {}",
                    trip.id,
                    trip.count,
                    u64::MAX
                ))
            })?;
        }
        Ok(Self { trips })
    }

    /// The Kerala sample dataset compiled into the binary.
    pub fn builtin() -> YcResult<Self> {
        Self::from_json_str(BUILTIN_TRIPS)
    }

    pub fn from_json_str(content: &str) -> YcResult<Self> {
        let trips: Vec<Trip> = serde_json::from_str(content)?;
        debug!("Parsed {} trip records", trips.len());
        Self::new(trips)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> YcResult<Self> {
        let path = path.as_ref();
        debug!("Loading trips from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn len(&self) -> usize {
        self.trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Lowest and highest per-trip cost, `None` for an empty store.
    pub fn cost_bounds(&self) -> Option<(f64, f64)> {
        self.trips.iter().fold(None, |acc, t| match acc {
            None => Some((t.cost, t.cost)),
            Some((lo, hi)) => Some((lo.min(t.cost), hi.max(t.cost))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn mode_names_round_trip_through_strum() {
        assert_eq!(TransportMode::TwoWheeler.to_string(), "Two-Wheeler");
        assert_eq!(
            TransportMode::from_str("auto-rickshaw").unwrap(),
            TransportMode::AutoRickshaw
        );
        assert_eq!(TimeOfDay::from_str("evening-peak").unwrap(), TimeOfDay::EveningPeak);
    }

    #[test]
    fn time_of_day_buckets() {
        assert_eq!(TimeOfDay::from_hour(5), TimeOfDay::Night);
        assert_eq!(TimeOfDay::from_hour(6), TimeOfDay::MorningPeak);
        assert_eq!(TimeOfDay::from_hour(10), TimeOfDay::Midday);
        assert_eq!(TimeOfDay::from_hour(19), TimeOfDay::EveningPeak);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Night);
    }

    #[test]
    fn builtin_dataset_loads() {
        let store = TripStore::builtin().unwrap();
        assert_eq!(store.len(), 11);
        assert_eq!(store.trips()[0].mode, TransportMode::Metro);
        assert_eq!(store.trips()[0].origin.lat(), 9.9312);
        assert_eq!(store.cost_bounds(), Some((0.0, 210.0)));
    }
}
