use crate::error::{YatraError, YcResult};
use crate::filter::{CostRange, DateRange, FilterState};
use crate::trips::{District, TimeOfDay, TransportMode, TripPurpose};
use chrono::NaiveDate;
use clap::parser::ValueSource;
use clap::{ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Filter selections as they arrive from the command line or a JSON preset.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterArgs {
    /// Transport modes to keep (empty = all)
    #[arg(long = "mode", value_delimiter = ',')]
    pub modes: Vec<TransportMode>,

    /// Trip purposes to keep (empty = all)
    #[arg(long = "purpose", value_delimiter = ',')]
    pub purposes: Vec<TripPurpose>,

    #[arg(long = "time-of-day", value_delimiter = ',')]
    pub times_of_day: Vec<TimeOfDay>,

    #[arg(long = "district", value_delimiter = ',')]
    pub districts: Vec<District>,

    #[arg(long, default_value_t = 0.0)]
    pub min_cost: f64,

    #[arg(long, default_value_t = f64::MAX, hide_default_value = true)]
    pub max_cost: f64,

    /// First day to include (YYYY-MM-DD)
    #[arg(long = "from")]
    pub start_date: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long = "to")]
    pub end_date: Option<NaiveDate>,
}

impl Default for FilterArgs {
    fn default() -> Self {
        Self {
            modes: Vec::new(),
            purposes: Vec::new(),
            times_of_day: Vec::new(),
            districts: Vec::new(),
            min_cost: CostRange::FULL.min,
            max_cost: CostRange::FULL.max,
            start_date: None,
            end_date: None,
        }
    }
}

impl FilterArgs {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> YcResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            YatraError::Config(format!(
                "Failed to read filter preset '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overwrites only the fields the user actually typed on the command line.
    pub fn merge_from_cli(&mut self, cli: &FilterArgs, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_id:expr) => {
                if matches.value_source($arg_id) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(modes, "modes");
        update_if_present!(purposes, "purposes");
        update_if_present!(times_of_day, "times_of_day");
        update_if_present!(districts, "districts");
        update_if_present!(min_cost, "min_cost");
        update_if_present!(max_cost, "max_cost");
        update_if_present!(start_date, "start_date");
        update_if_present!(end_date, "end_date");
    }

    pub fn to_filter_state(&self) -> YcResult<FilterState> {
        if let (Some(s), Some(e)) = (self.start_date, self.end_date) {
            if s > e {
                return Err(YatraError::Config(format!(
                    "Date range {} .. {} is empty (--from is after --to)",
                    s, e
                )));
            }
        }

        Ok(FilterState::builder()
            .modes(self.modes.iter().copied().collect::<BTreeSet<_>>())
            .purposes(self.purposes.iter().copied().collect::<BTreeSet<_>>())
            .times_of_day(self.times_of_day.iter().copied().collect::<BTreeSet<_>>())
            .districts(self.districts.iter().copied().collect::<BTreeSet<_>>())
            .cost(CostRange::new(self.min_cost, self.max_cost)?)
            .dates(DateRange {
                start: self.start_date,
                end: self.end_date,
            })
            .build())
    }
}
