use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzers::types::{DurationStats, StationStats, TemporalStats, UserStats};
use crate::analyzers::{duration_stats, station_stats, temporal_stats, user_stats};
use crate::filters::{City, DayFilter, MonthFilter};
use crate::loader::Dataset;

/// Wall-clock time spent computing each statistic group.
#[derive(Debug, Default, Clone, Copy)]
pub struct SectionTimings {
    pub temporal: Duration,
    pub stations: Duration,
    pub duration: Duration,
    pub users: Duration,
}

/// All four statistic groups computed from one filtered dataset.
#[derive(Debug, Clone, Serialize)]
pub struct TripReport {
    pub generated_at: DateTime<Utc>,
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
    pub row_count: usize,

    pub temporal: TemporalStats,
    pub stations: StationStats,
    pub duration: DurationStats,
    pub users: UserStats,

    #[serde(skip)]
    pub timings: SectionTimings,
}

impl TripReport {
    #[tracing::instrument(skip(ds), fields(city = %ds.city(), rows = ds.len()))]
    pub fn from_dataset(ds: &Dataset, month: MonthFilter, day: DayFilter) -> Self {
        let mut timings = SectionTimings::default();

        let temporal = timed(&mut timings.temporal, || temporal_stats(ds));
        let stations = timed(&mut timings.stations, || station_stats(ds));
        let duration = timed(&mut timings.duration, || duration_stats(ds));
        let users = timed(&mut timings.users, || user_stats(ds));

        if ds.is_empty() {
            tracing::warn!("No trips match the selected filters");
        }

        TripReport {
            generated_at: Utc::now(),
            city: ds.city(),
            month,
            day,
            row_count: ds.len(),
            temporal,
            stations,
            duration,
            users,
            timings,
        }
    }
}

fn timed<T>(slot: &mut Duration, f: impl FnOnce() -> T) -> T {
    let start = Instant::now();
    let out = f();
    *slot = start.elapsed();
    out
}

/// A single flattened row summarising a report, for CSV export.
#[derive(Debug, Default, Serialize)]
pub struct ReportSummary {
    pub generated_at: Option<DateTime<Utc>>,
    pub city: String,
    pub month: String,
    pub day: String,
    pub row_count: usize,

    pub most_common_month: Option<u32>,
    pub most_common_day: Option<String>,
    pub most_common_hour: Option<u32>,

    pub top_start_station: Option<String>,
    pub top_end_station: Option<String>,
    pub top_trip: Option<String>,

    pub total_duration_seconds: f64,
    pub mean_duration_seconds: Option<f64>,

    pub user_types: usize,
    pub birth_year_median: Option<f64>,
}

impl ReportSummary {
    pub fn from_report(report: &TripReport) -> Self {
        let t = &report.temporal;
        let s = &report.stations;

        ReportSummary {
            generated_at: Some(report.generated_at),
            city: report.city.to_string(),
            month: report.month.to_string(),
            day: report.day.to_string(),
            row_count: report.row_count,
            most_common_month: t.most_common_month.value().map(|p| p.value),
            most_common_day: t.most_common_day.value().map(|p| p.value.clone()),
            most_common_hour: t.most_common_hour.value().map(|p| p.value),
            top_start_station: s.top_start_station.value().map(|p| p.value.clone()),
            top_end_station: s.top_end_station.value().map(|p| p.value.clone()),
            top_trip: s.top_trip.value().map(|p| p.value.clone()),
            total_duration_seconds: report.duration.total_duration_seconds,
            mean_duration_seconds: report.duration.mean_duration_seconds.value().copied(),
            user_types: report.users.user_type_counts.len(),
            birth_year_median: report.users.birth_year.value().map(|b| b.median),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::test_helpers::{dataset, trip};

    #[test]
    fn test_report_from_empty_dataset() {
        let ds = dataset(vec![]);
        let report = TripReport::from_dataset(&ds, MonthFilter::ANY, DayFilter::ANY);

        assert_eq!(report.row_count, 0);
        assert!(report.temporal.most_common_month.is_no_data());
        assert!(report.duration.mean_duration_seconds.is_no_data());
        assert!(report.users.gender_counts.is_not_applicable());
    }

    #[test]
    fn test_report_serializes_filters_as_names() {
        let ds = dataset(vec![trip("2017-01-02 08:00:00", "A", "B", 60.0, "Subscriber")]);
        let month: MonthFilter = "january".parse().unwrap();
        let day: DayFilter = "monday".parse().unwrap();
        let report = TripReport::from_dataset(&ds, month, day);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["city"], "washington");
        assert_eq!(json["month"], "january");
        assert_eq!(json["day"], "monday");
        assert_eq!(json["row_count"], 1);
        assert_eq!(json["duration"]["total_duration_seconds"], 60.0);
        assert!(json.get("timings").is_none());
    }

    #[test]
    fn test_summary_flattens_report() {
        let ds = dataset(vec![
            trip("2017-01-02 08:00:00", "A", "B", 60.0, "Subscriber"),
            trip("2017-01-02 09:00:00", "A", "C", 120.0, "Customer"),
        ]);
        let report = TripReport::from_dataset(&ds, MonthFilter::ANY, DayFilter::ANY);
        let summary = ReportSummary::from_report(&report);

        assert_eq!(summary.city, "washington");
        assert_eq!(summary.most_common_month, Some(1));
        assert_eq!(summary.most_common_day.as_deref(), Some("Monday"));
        assert_eq!(summary.top_start_station.as_deref(), Some("A"));
        assert_eq!(summary.top_trip.as_deref(), Some("A and B"));
        assert_eq!(summary.mean_duration_seconds, Some(90.0));
        assert_eq!(summary.user_types, 2);
        assert_eq!(summary.birth_year_median, None);
    }
}
