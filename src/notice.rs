use std::fmt;
use tracing::{info, warn};

/// Short user-facing feedback: a title and one sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

impl Notice {
    fn new(title: &str, description: String) -> Self {
        Self {
            title: title.to_string(),
            description,
            destructive: false,
        }
    }

    pub fn filters_applied(patterns: usize, total_trips: u64) -> Self {
        Self::new(
            "Filters Applied",
            format!(
                "Showing {} filtered trip patterns with {} total trips.",
                patterns, total_trips
            ),
        )
    }

    pub fn data_exported(records: usize, format: &str) -> Self {
        Self::new(
            "Data Exported",
            format!(
                "Successfully exported {} trip records to {}.",
                records,
                format.to_uppercase()
            ),
        )
    }

    pub fn export_successful(records: usize, format: &str) -> Self {
        Self::new(
            "Export Successful",
            format!(
                "Exported {} records as {} file.",
                records,
                format.to_uppercase()
            ),
        )
    }

    pub fn no_data_selected() -> Self {
        Self {
            destructive: true,
            ..Self::new(
                "No data selected",
                "Please select at least one row to export.".to_string(),
            )
        }
    }

    pub fn emit(&self) {
        if self.destructive {
            warn!("{}", self);
        } else {
            info!("{}", self);
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}
