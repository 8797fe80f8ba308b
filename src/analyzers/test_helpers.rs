use crate::filters::City;
use crate::loader::{Dataset, Schema};
use crate::trip::{Trip, TripRow};

pub fn trip(start: &str, from: &str, to: &str, duration: f64, user_type: &str) -> Trip {
    Trip::from_row(TripRow {
        start_time: start.to_string(),
        end_time: start.to_string(),
        trip_duration: duration,
        start_station: from.to_string(),
        end_station: to.to_string(),
        user_type: Some(user_type.to_string()),
        gender: None,
        birth_year: None,
    })
    .unwrap()
}

pub fn with_user(mut trip: Trip, gender: Option<&str>, birth_year: Option<f64>) -> Trip {
    trip.gender = gender.map(str::to_string);
    trip.birth_year = birth_year;
    trip
}

pub fn dataset(trips: Vec<Trip>) -> Dataset {
    Dataset::new(City::Washington, Schema::default(), trips)
}

pub fn dataset_with_demographics(trips: Vec<Trip>) -> Dataset {
    let schema = Schema {
        has_gender: true,
        has_birth_year: true,
    };
    Dataset::new(City::Chicago, schema, trips)
}
