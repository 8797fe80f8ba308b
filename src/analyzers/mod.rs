//! Trip statistics.
//!
//! Each sub-module computes one independent statistic group over a
//! [`Dataset`](crate::loader::Dataset). None of them mutate the dataset, so
//! they may run in any order. Absence of data is reported in the returned
//! value through [`Measure`](types::Measure), never as an error.

pub mod duration;
pub mod station;
pub mod temporal;
pub mod types;
pub mod user;
pub mod utility;

pub use duration::duration_stats;
pub use station::station_stats;
pub use temporal::temporal_stats;
pub use user::user_stats;

#[cfg(test)]
pub(crate) mod test_helpers;
