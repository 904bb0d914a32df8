use crate::error::{YatraError, YcResult};
use crate::trips::{TransportMode, TripPurpose};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};
use tracing::debug;

const BUILTIN_USERS: &str = include_str!("../data/kerala_users.json");

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, Serialize, Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum UserCategory {
    Worker,
    Student,
    Tourist,
    Other,
}

/// Directory entry for one (pseudonymous) participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub category: UserCategory,
    /// Lifetime trip count as reported by the collection app.
    pub trip_count: u64,
    pub last_active: NaiveDate,
    pub avg_distance: f64,
    pub favorite_mode: TransportMode,
}

impl UserProfile {
    /// Case-insensitive substring match on id or category. An empty term matches everyone.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.id.to_lowercase().contains(&term)
            || self.category.to_string().to_lowercase().contains(&term)
    }
}

/// A single recorded journey of one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTrip {
    pub id: String,
    pub user_id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration: u32, // minutes
    pub distance: f64, // km
    pub mode: TransportMode,
    pub purpose: TripPurpose,
    pub origin: String,
    pub destination: String,
}

impl UserTrip {
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTripSummary {
    pub total_trips: usize,
    /// Rounded mean, in minutes. Zero without trips.
    pub avg_duration: u32,
    pub most_common_mode: Option<TransportMode>,
}

/// Header figures for a user's trip history. Mode ties go to the mode seen first.
pub fn summarize_user_trips<T: Borrow<UserTrip>>(trips: &[T]) -> UserTripSummary {
    if trips.is_empty() {
        return UserTripSummary::default();
    }

    let mut duration_sum: u64 = 0;
    let mut mode_counts: Vec<(TransportMode, usize)> = Vec::new();
    for item in trips {
        let t: &UserTrip = item.borrow();
        duration_sum += u64::from(t.duration);
        match mode_counts.iter_mut().find(|(m, _)| *m == t.mode) {
            Some((_, n)) => *n += 1,
            None => mode_counts.push((t.mode, 1)),
        }
    }

    let most_common_mode = mode_counts
        .iter()
        .fold(None, |best: Option<(TransportMode, usize)>, &(m, n)| match best {
            Some((_, bn)) if bn >= n => best,
            _ => Some((m, n)),
        })
        .map(|(m, _)| m);

    UserTripSummary {
        total_trips: trips.len(),
        avg_duration: (duration_sum as f64 / trips.len() as f64).round() as u32,
        most_common_mode,
    }
}

/// One user's profile, summary and trips, ready for display or JSON output.
#[derive(Debug, Clone, Serialize)]
pub struct UserHistory<'a> {
    pub user: &'a UserProfile,
    pub summary: UserTripSummary,
    pub trips: Vec<&'a UserTrip>,
}

/// Read-only user directory plus the recorded trips behind it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserDirectory {
    users: Vec<UserProfile>,
    #[serde(default)]
    trips: Vec<UserTrip>,
}

impl UserDirectory {
    pub fn new(users: Vec<UserProfile>, trips: Vec<UserTrip>) -> YcResult<Self> {
        let mut ids = HashSet::new();
        for user in &users {
            if !ids.insert(user.id.to_lowercase()) {
                return Err(YatraError::Validation(format!(
                    "User '{}' is listed more than once",
                    user.id
                )));
            }
        }

        for trip in &trips {
            if !ids.contains(&trip.user_id.to_lowercase()) {
                return Err(YatraError::Validation(format!(
                    "Trip '{}' belongs to unknown user '{}'",
                    trip.id, trip.user_id
                )));
            }
            if trip.end_time < trip.start_time {
                return Err(YatraError::Validation(format!(
                    "Trip '{}' ends before it starts",
                    trip.id
                )));
            }
            if !trip.distance.is_finite() || trip.distance < 0.0 {
                return Err(YatraError::Validation(format!(
                    "Trip '{}': distance {} must be a non-negative number",
                    trip.id, trip.distance
                )));
            }
        }

        Ok(Self { users, trips })
    }

    /// The sample directory compiled into the binary.
    pub fn builtin() -> YcResult<Self> {
        Self::from_json_str(BUILTIN_USERS)
    }

    pub fn from_json_str(content: &str) -> YcResult<Self> {
        let raw: UserDirectory = serde_json::from_str(content)?;
        debug!(
            "Parsed {} users with {} trips",
            raw.users.len(),
            raw.trips.len()
        );
        Self::new(raw.users, raw.trips)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> YcResult<Self> {
        let path = path.as_ref();
        debug!("Loading user directory from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn users(&self) -> &[UserProfile] {
        &self.users
    }

    pub fn search(&self, term: &str) -> Vec<&UserProfile> {
        self.users.iter().filter(|u| u.matches_search(term)).collect()
    }

    pub fn find(&self, id: &str) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.id.eq_ignore_ascii_case(id))
    }

    pub fn trips_for(&self, user_id: &str) -> Vec<&UserTrip> {
        self.trips
            .iter()
            .filter(|t| t.user_id.eq_ignore_ascii_case(user_id))
            .collect()
    }

    pub fn history(&self, user_id: &str) -> YcResult<UserHistory<'_>> {
        let user = self
            .find(user_id)
            .ok_or_else(|| YatraError::UnknownUser(user_id.to_string()))?;
        let trips = self.trips_for(&user.id);
        Ok(UserHistory {
            user,
            summary: summarize_user_trips(&trips),
            trips,
        })
    }
}
