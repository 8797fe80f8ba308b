//! Output formatting and persistence for trip reports.
//!
//! Supports the sectioned text report, JSON serialization, raw-row CSV
//! rendering and CSV append of a report summary.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use csv::WriterBuilder;
use tracing::debug;

use crate::analyzers::types::{Measure, Popular, ValueCount};
use crate::filters::month_name;
use crate::loader::Schema;
use crate::stats::{ReportSummary, TripReport};
use crate::trip::Trip;

const RULE_WIDTH: usize = 40;
const NO_DATA: &str = "no data";

/// Logs a report using Rust's debug pretty-print format.
pub fn print_pretty(report: &TripReport) {
    debug!("{:#?}", report);
}

/// Writes the report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &TripReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the four human-readable statistic sections.
pub fn write_report<W: Write>(out: &mut W, report: &TripReport) -> Result<()> {
    writeln!(
        out,
        "\nTrips for {} (month: {}, day: {}): {}",
        report.city, report.month, report.day, report.row_count
    )?;

    write_temporal(out, report)?;
    write_stations(out, report)?;
    write_duration(out, report)?;
    write_users(out, report)?;
    Ok(())
}

fn write_temporal<W: Write>(out: &mut W, report: &TripReport) -> Result<()> {
    let t = &report.temporal;
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;

    let month = t.most_common_month.clone().map(|p| {
        let name = month_name(p.value).unwrap_or("?");
        p.map_value(|m| format!("{m} ({name})"))
    });
    writeln!(out, "most common month:  {}", popular(&month))?;
    writeln!(out, "most common day:  {}", popular(&t.most_common_day))?;
    writeln!(out, "most common start hour:  {}", popular(&t.most_common_hour))?;

    footer(out, report.timings.temporal)
}

fn write_stations<W: Write>(out: &mut W, report: &TripReport) -> Result<()> {
    let s = &report.stations;
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;

    writeln!(out, "most used start station:  {}", popular(&s.top_start_station))?;
    writeln!(out, "\nmost used end station:  {}", popular(&s.top_end_station))?;
    writeln!(
        out,
        "\nmost used combination of start and end stations:  {}",
        popular(&s.top_trip)
    )?;

    footer(out, report.timings.stations)
}

fn write_duration<W: Write>(out: &mut W, report: &TripReport) -> Result<()> {
    let d = &report.duration;
    writeln!(out, "\nCalculating Trip Duration...\n")?;

    writeln!(out, "trip total travel time in (s):  {}", d.total_duration_seconds)?;
    match d.mean_duration_seconds {
        Measure::Value(mean) => writeln!(out, "\ntrip avg travel time in (s):  {mean:.2}")?,
        _ => writeln!(out, "\ntrip avg travel time in (s):  undefined (no trips)")?,
    }

    footer(out, report.timings.duration)
}

fn write_users<W: Write>(out: &mut W, report: &TripReport) -> Result<()> {
    let u = &report.users;
    writeln!(out, "\nCalculating User Stats...\n")?;

    writeln!(out, "count of types:")?;
    write_counts(out, &u.user_type_counts)?;

    match &u.gender_counts {
        Measure::Value(counts) => {
            writeln!(out, "gender count is:")?;
            write_counts(out, counts)?;
        }
        Measure::NoData => writeln!(out, "gender count is:  {NO_DATA}")?,
        Measure::NotApplicable => writeln!(out, "no Gender available")?,
    }

    match &u.birth_year {
        Measure::Value(years) => {
            writeln!(out, "\nearliest year of birth:  {:.0}", years.earliest)?;
            writeln!(out, "\nmost recent year of birth:  {:.0}", years.most_recent)?;
            writeln!(out, "\nmost common year of birth:  {}", years.median)?;
        }
        Measure::NoData => writeln!(out, "\nyear of birth:  undefined (no values)")?,
        Measure::NotApplicable => writeln!(out, "no Birth Year available")?,
    }

    footer(out, report.timings.users)
}

fn write_counts<W: Write>(out: &mut W, counts: &[ValueCount]) -> Result<()> {
    if counts.is_empty() {
        writeln!(out, "  {NO_DATA}")?;
    }
    for c in counts {
        writeln!(out, "  {}: {}", c.value, c.count)?;
    }
    Ok(())
}

fn popular<T: std::fmt::Display>(m: &Measure<Popular<T>>) -> String {
    match m {
        Measure::Value(p) => format!("{} (count: {})", p.value, p.count),
        Measure::NoData | Measure::NotApplicable => NO_DATA.to_string(),
    }
}

fn footer<W: Write>(out: &mut W, took: Duration) -> Result<()> {
    writeln!(out, "\nThis took {} seconds.", took.as_secs_f64())?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    Ok(())
}

/// Column headers for raw rows of a dataset with the given schema.
pub fn raw_headers(schema: Schema) -> Vec<&'static str> {
    let mut headers = vec![
        "Start Time",
        "End Time",
        "Trip Duration",
        "Start Station",
        "End Station",
        "User Type",
    ];
    if schema.has_gender {
        headers.push("Gender");
    }
    if schema.has_birth_year {
        headers.push("Birth Year");
    }
    headers.extend(["month", "day of week", "hour"]);
    headers
}

/// Writes trips as CSV, including derived calendar fields.
pub fn write_raw_rows<W: Write>(
    out: &mut W,
    schema: Schema,
    trips: &[Trip],
    with_header: bool,
) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(out);

    if with_header {
        writer.write_record(raw_headers(schema))?;
    }

    for trip in trips {
        let mut record = vec![
            trip.start_time.format("%Y-%m-%d %H:%M:%S").to_string(),
            trip.end_time.clone(),
            trip.trip_duration.to_string(),
            trip.start_station.clone(),
            trip.end_station.clone(),
            trip.user_type.clone().unwrap_or_default(),
        ];
        if schema.has_gender {
            record.push(trip.gender.clone().unwrap_or_default());
        }
        if schema.has_birth_year {
            record.push(trip.birth_year.map(|y| y.to_string()).unwrap_or_default());
        }
        record.push(trip.month.to_string());
        record.push(trip.day_name().to_string());
        record.push(trip.hour.to_string());

        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Appends a [`ReportSummary`] record as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, summary: &ReportSummary) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(summary)?;
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_helpers::{dataset, dataset_with_demographics, trip, with_user};
    use crate::filters::{DayFilter, MonthFilter};
    use std::env;
    use std::fs;

    fn temp_path(name: &str) -> String {
        format!("{}/{}", env::temp_dir().display(), name)
    }

    fn render(report: &TripReport) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, report).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        let report = TripReport::from_dataset(&dataset(vec![]), MonthFilter::ANY, DayFilter::ANY);
        print_pretty(&report);
    }

    #[test]
    fn test_write_report_sections() {
        let ds = dataset(vec![
            trip("2017-06-23 15:09:32", "Lake St", "Canal St", 300.0, "Subscriber"),
            trip("2017-06-23 15:40:00", "Lake St", "Canal St", 100.0, "Customer"),
        ]);
        let report = TripReport::from_dataset(&ds, MonthFilter::ANY, DayFilter::ANY);
        let text = render(&report);

        assert!(text.contains("Calculating The Most Frequent Times of Travel..."));
        assert!(text.contains("most common month:  6 (June) (count: 2)"));
        assert!(text.contains("most common day:  Friday (count: 2)"));
        assert!(text.contains("most used combination of start and end stations:  Lake St and Canal St (count: 2)"));
        assert!(text.contains("trip total travel time in (s):  400"));
        assert!(text.contains("trip avg travel time in (s):  200.00"));
        assert!(text.contains("no Gender available"));
        assert!(text.contains("no Birth Year available"));
        assert_eq!(text.matches("This took").count(), 4);
    }

    #[test]
    fn test_write_report_empty_dataset() {
        let ds = dataset_with_demographics(vec![]);
        let report = TripReport::from_dataset(&ds, "june".parse().unwrap(), DayFilter::ANY);
        let text = render(&report);

        assert!(text.contains("most common month:  no data"));
        assert!(text.contains("trip total travel time in (s):  0"));
        assert!(text.contains("undefined (no trips)"));
        assert!(text.contains("year of birth:  undefined (no values)"));
        assert!(!text.contains("NaN"));
    }

    #[test]
    fn test_write_report_birth_years() {
        let base = trip("2017-01-02 08:00:00", "A", "B", 60.0, "Subscriber");
        let ds = dataset_with_demographics(vec![
            with_user(base.clone(), Some("Male"), Some(1980.0)),
            with_user(base, Some("Female"), Some(1991.0)),
        ]);
        let report = TripReport::from_dataset(&ds, MonthFilter::ANY, DayFilter::ANY);
        let text = render(&report);

        assert!(text.contains("earliest year of birth:  1980"));
        assert!(text.contains("most recent year of birth:  1991"));
        assert!(text.contains("most common year of birth:  1985.5"));
        assert!(text.contains("  Male: 1"));
    }

    #[test]
    fn test_write_json_is_valid() {
        let report = TripReport::from_dataset(&dataset(vec![]), MonthFilter::ANY, DayFilter::ANY);
        let mut buf = Vec::new();
        write_json(&mut buf, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["row_count"], 0);
        assert_eq!(value["duration"]["mean_duration_seconds"]["status"], "no_data");
    }

    #[test]
    fn test_write_raw_rows_follows_schema() {
        let ds = dataset(vec![trip("2017-06-23 15:09:32", "A", "B", 321.5, "Subscriber")]);
        let mut buf = Vec::new();
        write_raw_rows(&mut buf, ds.schema(), ds.trips(), true).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Start Time,End Time,Trip Duration,Start Station,End Station,User Type,month,day of week,hour"
        );
        assert_eq!(
            lines[1],
            "2017-06-23 15:09:32,2017-06-23 15:09:32,321.5,A,B,Subscriber,6,Friday,15"
        );
    }

    #[test]
    fn test_raw_headers_with_demographics() {
        let schema = Schema {
            has_gender: true,
            has_birth_year: true,
        };
        let headers = raw_headers(schema);
        assert!(headers.contains(&"Gender"));
        assert!(headers.contains(&"Birth Year"));
    }

    #[test]
    fn test_append_record_writes_header_once() {
        let path = temp_path("bikeshare_stats_test_header.csv");
        let _ = fs::remove_file(&path);

        let summary = ReportSummary::default();
        append_record(&path, &summary).unwrap();
        append_record(&path, &summary).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header_count = content.lines().filter(|l| l.contains("row_count")).count();
        assert_eq!(header_count, 1);
        assert_eq!(content.lines().count(), 3);

        fs::remove_file(&path).unwrap();
    }
}
