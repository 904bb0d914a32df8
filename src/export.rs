use crate::error::{YatraError, YcResult};
use crate::heatmap;
use crate::routes::{self, RouteSummary};
use crate::trips::Trip;
use chrono::NaiveDate;
use clap::ValueEnum;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::borrow::Borrow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const TRIP_CSV_HEADER: [&str; 8] = [
    "Origin Lat",
    "Origin Lng",
    "Dest Lat",
    "Dest Lng",
    "Mode",
    "Purpose",
    "Distance (km)",
    "Trip Count",
];

pub const ROUTE_CSV_HEADER: [&str; 7] = [
    "Route",
    "Mode",
    "Purpose",
    "Trip Count",
    "Avg Distance (km)",
    "Avg Duration (min)",
    "Peak Hour",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    RoutesCsv,
    RoutesJson,
    Heatmap,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv | Self::RoutesCsv => "csv",
            Self::Json | Self::RoutesJson | Self::Heatmap => "json",
        }
    }

    fn file_stem(&self) -> &'static str {
        match self {
            Self::Csv | Self::Json => "yatrachain-data",
            Self::RoutesCsv | Self::RoutesJson => "yatrachain-export",
            Self::Heatmap => "yatrachain-heatmap",
        }
    }

    pub fn is_route_table(&self) -> bool {
        matches!(self, Self::RoutesCsv | Self::RoutesJson)
    }
}

/// Text ready to be written, plus how many records it holds.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub content: String,
    pub records: usize,
}

/// Serializes the filtered trips in the requested format. `selection` only applies to
/// the route table formats.
pub fn render<T: Borrow<Trip>>(
    format: ExportFormat,
    trips: &[T],
    selection: &[String],
) -> YcResult<Rendered> {
    match format {
        ExportFormat::Csv => Ok(Rendered {
            content: trips_to_csv(trips)?,
            records: trips.len(),
        }),
        ExportFormat::Json => Ok(Rendered {
            content: trips_to_json(trips)?,
            records: trips.len(),
        }),
        ExportFormat::RoutesCsv | ExportFormat::RoutesJson => {
            let rows = routes::select_routes(routes::aggregate_routes(trips), selection)?;
            let content = if format == ExportFormat::RoutesCsv {
                routes_to_csv(&rows)?
            } else {
                serde_json::to_string_pretty(&rows)?
            };
            Ok(Rendered {
                content,
                records: rows.len(),
            })
        }
        ExportFormat::Heatmap => {
            let points = heatmap::origin_points(trips);
            Ok(Rendered {
                content: serde_json::to_string_pretty(&points)?,
                records: points.len(),
            })
        }
    }
}

// Fields go out verbatim: nothing is quoted or escaped, so a value containing a comma
// shifts the columns after it.
fn plain_writer() -> csv::Writer<Vec<u8>> {
    WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new())
}

fn finish(wtr: csv::Writer<Vec<u8>>) -> YcResult<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| YatraError::Io(e.into_error()))?;
    let mut text = String::from_utf8(bytes).map_err(|e| YatraError::Validation(e.to_string()))?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Header row plus one line per trip, coordinates lat-first.
pub fn trips_to_csv<T: Borrow<Trip>>(trips: &[T]) -> YcResult<String> {
    let mut wtr = plain_writer();
    wtr.write_record(TRIP_CSV_HEADER)?;

    for item in trips {
        let t: &Trip = item.borrow();
        wtr.write_record([
            t.origin.lat().to_string(),
            t.origin.lng().to_string(),
            t.destination.lat().to_string(),
            t.destination.lng().to_string(),
            t.mode.to_string(),
            t.purpose.to_string(),
            t.distance.to_string(),
            t.count.to_string(),
        ])?;
    }

    finish(wtr)
}

pub fn trips_to_json<T: Borrow<Trip>>(trips: &[T]) -> YcResult<String> {
    let records: Vec<&Trip> = trips.iter().map(Borrow::<Trip>::borrow).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

pub fn routes_to_csv(rows: &[RouteSummary]) -> YcResult<String> {
    let mut wtr = plain_writer();
    wtr.write_record(ROUTE_CSV_HEADER)?;

    for r in rows {
        wtr.write_record([
            r.route.clone(),
            r.mode.to_string(),
            r.purpose.to_string(),
            r.trip_count.to_string(),
            r.avg_distance.to_string(),
            r.avg_duration.to_string(),
            r.peak_hour.clone(),
        ])?;
    }

    finish(wtr)
}

/// e.g. `yatrachain-data-2024-09-17.csv`
pub fn export_filename(format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "{}-{}.{}",
        format.file_stem(),
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

pub fn write_export<P: AsRef<Path>>(dir: P, filename: &str, content: &str) -> YcResult<PathBuf> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, content)?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}
