use crate::analyzers::types::DurationStats;
use crate::analyzers::utility::mean;
use crate::loader::Dataset;

/// Sum and mean of trip durations. The mean is [`NoData`] for an empty dataset.
///
/// [`NoData`]: crate::analyzers::types::Measure::NoData
pub fn duration_stats(ds: &Dataset) -> DurationStats {
    let durations: Vec<f64> = ds.trips().iter().map(|t| t.trip_duration).collect();

    DurationStats {
        trip_count: durations.len(),
        // fold from +0.0: an empty f64 `sum()` yields -0.0
        total_duration_seconds: durations.iter().fold(0.0, |acc, d| acc + d),
        mean_duration_seconds: mean(&durations).into(),
    }
}
