//! Loading a city's trip file and narrowing it by month and weekday.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{BikeshareError, Result};
use crate::filters::{City, DayFilter, MonthFilter};
use crate::trip::{BIRTH_YEAR_COLUMN, GENDER_COLUMN, REQUIRED_COLUMNS, Trip, TripRow};

/// Which optional columns a city's source file carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Schema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

/// Ordered trips for one city, in file order.
#[derive(Debug, Clone)]
pub struct Dataset {
    city: City,
    schema: Schema,
    trips: Vec<Trip>,
}

impl Dataset {
    pub fn new(city: City, schema: Schema, trips: Vec<Trip>) -> Self {
        Dataset {
            city,
            schema,
            trips,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn schema(&self) -> Schema {
        self.schema
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

    /// Returns a new dataset holding only the trips matching both filters.
    ///
    /// Row order and schema are preserved. An empty result is valid.
    pub fn filter(&self, month: MonthFilter, day: DayFilter) -> Dataset {
        let trips = self
            .trips
            .iter()
            .filter(|t| month.matches(t.month) && day.matches(t.day_of_week))
            .cloned()
            .collect();

        Dataset {
            city: self.city,
            schema: self.schema,
            trips,
        }
    }

    /// Up to `size` trips starting at `offset`; empty once past the end.
    pub fn page(&self, offset: usize, size: usize) -> &[Trip] {
        let start = offset.min(self.trips.len());
        let end = offset.saturating_add(size).min(self.trips.len());
        &self.trips[start..end]
    }
}

/// Reads every trip for `city` from `data_dir`, without filtering.
pub fn read_city(data_dir: &Path, city: City) -> Result<Dataset> {
    let path = data_dir.join(city.file_name());
    let file = File::open(&path).map_err(|source| BikeshareError::Io {
        path: path.clone(),
        source,
    })?;
    read_trips(file, &path, city)
}

/// Parses CSV trips from `reader`. `path` is only used in error messages.
///
/// Any row with an unparseable timestamp or number fails the whole read.
pub fn read_trips<R: Read>(reader: R, path: &Path, city: City) -> Result<Dataset> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers()?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(BikeshareError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    let schema = Schema {
        has_gender: headers.iter().any(|h| h == GENDER_COLUMN),
        has_birth_year: headers.iter().any(|h| h == BIRTH_YEAR_COLUMN),
    };

    let mut trips = Vec::new();
    let mut record = csv::StringRecord::new();

    loop {
        let more = rdr.read_record(&mut record).map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or_default();
            BikeshareError::malformed(path, line, e.to_string())
        })?;
        if !more {
            break;
        }

        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let row: TripRow = record
            .deserialize(Some(&headers))
            .map_err(|e| BikeshareError::malformed(path, line, e.to_string()))?;
        let trip = Trip::from_row(row).map_err(|reason| BikeshareError::malformed(path, line, reason))?;
        trips.push(trip);
    }

    debug!(
        city = %city,
        rows = trips.len(),
        has_gender = schema.has_gender,
        has_birth_year = schema.has_birth_year,
        "Trips parsed"
    );

    Ok(Dataset::new(city, schema, trips))
}

/// Loads `city` from `data_dir` and applies the month and day filters.
#[tracing::instrument(skip_all, fields(city = %city, month = %month, day = %day))]
pub fn load_filtered(
    data_dir: &Path,
    city: City,
    month: MonthFilter,
    day: DayFilter,
) -> Result<Dataset> {
    let all = read_city(data_dir, city)?;
    let filtered = all.filter(month, day);

    info!(total = all.len(), kept = filtered.len(), "Dataset loaded");
    Ok(filtered)
}

/// Loads a city's trips using the textual selectors accepted at the prompt.
///
/// `month` and `day` are either `"all"` or a month/weekday name, matched
/// case-insensitively.
///
/// # Errors
///
/// Returns [`BikeshareError::UnknownCity`] (or the month/day equivalents) for
/// unsupported selectors, and [`BikeshareError::MalformedRecord`] when any row
/// of the source cannot be parsed.
pub fn load(data_dir: &Path, city: &str, month: &str, day: &str) -> Result<Dataset> {
    let city: City = city.parse()?;
    let month: MonthFilter = month.parse()?;
    let day: DayFilter = day.parse()?;
    load_filtered(data_dir, city, month, day)
}
