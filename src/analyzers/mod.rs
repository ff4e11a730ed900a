//! Statistics over a filtered trip dataset.
//!
//! Each aggregator is a pure function of a borrowed [`Dataset`](crate::record::Dataset)
//! and reports an explicit no-data result for empty input instead of failing.
//! [`report::TripReport`] bundles the four results for one query.

pub mod duration;
pub mod report;
pub mod station;
pub mod time;
pub mod types;
pub mod user;
pub mod utility;
