//! City, month and day selectors.
//!
//! All selectors parse case-insensitively and surrounding whitespace is
//! ignored, so `"New York City "` and `"new york city"` resolve to the same
//! [`City`].

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::Serialize;

use crate::error::BikeshareError;

/// Literal selector meaning "apply no filter".
pub const ALL: &str = "all";

/// Months a trip can be filtered by. The 1-based position is the calendar month.
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// Weekday names in the order the prompt lists them.
pub const WEEKDAYS: [(&str, Weekday); 7] = [
    ("sunday", Weekday::Sun),
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Source file holding this city's trips, relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| BikeshareError::UnknownCity(s.to_string()))
    }
}

/// Optional calendar month (1..=6) filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthFilter(Option<u32>);

impl MonthFilter {
    pub const ANY: MonthFilter = MonthFilter(None);

    /// Returns the calendar month this filter keeps, or `None` for "all".
    pub fn month(self) -> Option<u32> {
        self.0
    }

    pub fn matches(self, month: u32) -> bool {
        self.0.is_none_or(|m| m == month)
    }

    /// Every selector accepted by the prompt, "all" first.
    pub fn choices() -> impl Iterator<Item = &'static str> {
        std::iter::once(ALL).chain(MONTHS)
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(m) => f.write_str(MONTHS[(m - 1) as usize]),
            None => f.write_str(ALL),
        }
    }
}

impl Serialize for MonthFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == ALL {
            return Ok(MonthFilter::ANY);
        }
        MONTHS
            .iter()
            .position(|m| *m == wanted)
            .map(|idx| MonthFilter(Some(idx as u32 + 1)))
            .ok_or_else(|| BikeshareError::UnknownMonth(s.to_string()))
    }
}

/// Optional day-of-week filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayFilter(Option<Weekday>);

impl DayFilter {
    pub const ANY: DayFilter = DayFilter(None);

    pub fn weekday(self) -> Option<Weekday> {
        self.0
    }

    pub fn matches(self, day: Weekday) -> bool {
        self.0.is_none_or(|d| d == day)
    }

    pub fn choices() -> impl Iterator<Item = &'static str> {
        std::iter::once(ALL).chain(WEEKDAYS.into_iter().map(|(name, _)| name))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(d) => f.write_str(&weekday_name(d).to_lowercase()),
            None => f.write_str(ALL),
        }
    }
}

impl Serialize for DayFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == ALL {
            return Ok(DayFilter::ANY);
        }
        WEEKDAYS
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, day)| DayFilter(Some(*day)))
            .ok_or_else(|| BikeshareError::UnknownDay(s.to_string()))
    }
}

/// Title-cased weekday name, e.g. `"Monday"`.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Title-cased calendar month name for 1..=12.
pub fn month_name(month: u32) -> Option<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name())
}
