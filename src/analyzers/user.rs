use crate::analyzers::types::{BirthYearStats, Measure, UserStats, ValueCount};
use crate::analyzers::utility::{median, value_counts};
use crate::loader::Dataset;

/// User type counts, plus gender counts and birth year range when the
/// city's source carries those columns.
///
/// Missing cells are skipped. A gender column with no values yields an
/// empty table; a birth year column with no values yields [`Measure::NoData`].
pub fn user_stats(ds: &Dataset) -> UserStats {
    let trips = ds.trips();
    let schema = ds.schema();

    let user_type_counts = counts(trips.iter().filter_map(|t| t.user_type.as_deref()));

    let gender_counts = if schema.has_gender {
        Measure::Value(counts(trips.iter().filter_map(|t| t.gender.as_deref())))
    } else {
        Measure::NotApplicable
    };

    let birth_year = if schema.has_birth_year {
        let years: Vec<f64> = trips.iter().filter_map(|t| t.birth_year).collect();
        birth_year_stats(years).into()
    } else {
        Measure::NotApplicable
    };

    UserStats {
        user_type_counts,
        gender_counts,
        birth_year,
    }
}

fn counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<ValueCount> {
    value_counts(values)
        .into_iter()
        .map(|(value, count)| ValueCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

fn birth_year_stats(years: Vec<f64>) -> Option<BirthYearStats> {
    let earliest = years.iter().copied().reduce(f64::min)?;
    let most_recent = years.iter().copied().reduce(f64::max)?;
    let median = median(years)?;

    Some(BirthYearStats {
        earliest,
        most_recent,
        median,
    })
}
