use crate::analyzers::types::TemporalStats;
use crate::analyzers::utility::mode;
use crate::loader::Dataset;

/// Most frequent month, weekday and start hour across all trips.
pub fn temporal_stats(ds: &Dataset) -> TemporalStats {
    let trips = ds.trips();

    TemporalStats {
        most_common_month: mode(trips.iter().map(|t| t.month)).into(),
        most_common_day: mode(trips.iter().map(|t| t.day_name().to_string())).into(),
        most_common_hour: mode(trips.iter().map(|t| t.hour)).into(),
    }
}
