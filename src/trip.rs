//! Trip records and the calendar fields derived from their start time.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

use crate::filters::weekday_name;

/// Accepted start/end timestamp layouts, tried in order.
pub const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"];

/// Columns every city's source file must carry.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Start Time",
    "End Time",
    "Trip Duration",
    "Start Station",
    "End Station",
    "User Type",
];

pub const GENDER_COLUMN: &str = "Gender";
pub const BIRTH_YEAR_COLUMN: &str = "Birth Year";

/// A single row deserialized from a city CSV file.
///
/// Timestamps stay as text here; [`Trip::from_row`] parses them.
#[derive(Debug, Clone, Deserialize)]
pub struct TripRow {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time")]
    pub end_time: String,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// One bicycle rental with its derived calendar fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_time: NaiveDateTime,
    pub end_time: String,
    pub trip_duration: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,

    pub month: u32,
    pub day_of_week: Weekday,
    pub hour: u32,
}

impl Trip {
    /// Builds a trip from its raw row, deriving month, weekday and hour.
    ///
    /// Returns a description of the offending field on failure: an
    /// unparseable timestamp, or a non-finite duration or birth year.
    pub fn from_row(row: TripRow) -> Result<Self, String> {
        let start_time = parse_timestamp(&row.start_time)
            .ok_or_else(|| format!("unparseable Start Time '{}'", row.start_time))?;

        if !row.trip_duration.is_finite() {
            return Err(format!("non-finite Trip Duration '{}'", row.trip_duration));
        }
        if let Some(year) = row.birth_year.filter(|y| !y.is_finite()) {
            return Err(format!("non-finite Birth Year '{year}'"));
        }

        Ok(Trip {
            month: start_time.month(),
            day_of_week: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time: row.end_time,
            trip_duration: row.trip_duration,
            start_station: row.start_station,
            end_station: row.end_station,
            user_type: row.user_type,
            gender: row.gender,
            birth_year: row.birth_year,
        })
    }

    pub fn day_name(&self) -> &'static str {
        weekday_name(self.day_of_week)
    }
}

pub fn parse_timestamp(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}
