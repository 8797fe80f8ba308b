//! Result types produced by the statistic groups.

use serde::Serialize;

/// A statistic that may be undefined for the data at hand.
///
/// `NoData` means the input was empty (or had only missing values);
/// `NotApplicable` means the city's source has no such column at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Measure<T> {
    Value(T),
    NoData,
    NotApplicable,
}

impl<T> Measure<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Measure::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Measure::NotApplicable)
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Measure::NoData)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Measure<U> {
        match self {
            Measure::Value(v) => Measure::Value(f(v)),
            Measure::NoData => Measure::NoData,
            Measure::NotApplicable => Measure::NotApplicable,
        }
    }
}

impl<T> From<Option<T>> for Measure<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Measure::NoData, Measure::Value)
    }
}

/// The most frequent value of a field and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Popular<T> {
    pub value: T,
    pub count: usize,
}

impl<T> Popular<T> {
    pub fn map_value<U>(self, f: impl FnOnce(T) -> U) -> Popular<U> {
        Popular {
            value: f(self.value),
            count: self.count,
        }
    }
}

/// One entry of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Most common month, weekday and start hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalStats {
    pub most_common_month: Measure<Popular<u32>>,
    pub most_common_day: Measure<Popular<String>>,
    pub most_common_hour: Measure<Popular<u32>>,
}

/// Most used start station, end station and start/end combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub top_start_station: Measure<Popular<String>>,
    pub top_end_station: Measure<Popular<String>>,
    pub top_trip: Measure<Popular<String>>,
}

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub trip_count: usize,
    pub total_duration_seconds: f64,
    pub mean_duration_seconds: Measure<f64>,
}

/// Earliest, latest and median birth year.
///
/// `median` is labelled "most common year of birth" in the printed report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthYearStats {
    pub earliest: f64,
    pub most_recent: f64,
    pub median: f64,
}

/// User type, gender and birth year breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_type_counts: Vec<ValueCount>,
    pub gender_counts: Measure<Vec<ValueCount>>,
    pub birth_year: Measure<BirthYearStats>,
}
