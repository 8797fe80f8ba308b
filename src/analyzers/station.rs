use crate::analyzers::types::StationStats;
use crate::analyzers::utility::mode;
use crate::loader::Dataset;

/// Joins start and end station names into a single trip label.
pub const TRIP_SEPARATOR: &str = " and ";

pub fn trip_label(start: &str, end: &str) -> String {
    format!("{start}{TRIP_SEPARATOR}{end}")
}

/// Most used start station, end station and start/end combination.
pub fn station_stats(ds: &Dataset) -> StationStats {
    let trips = ds.trips();

    StationStats {
        top_start_station: mode(trips.iter().map(|t| t.start_station.as_str()))
            .map(|p| p.map_value(str::to_string))
            .into(),
        top_end_station: mode(trips.iter().map(|t| t.end_station.as_str()))
            .map(|p| p.map_value(str::to_string))
            .into(),
        top_trip: mode(
            trips
                .iter()
                .map(|t| trip_label(&t.start_station, &t.end_station)),
        )
        .into(),
    }
}
