//! Most frequent times of travel.

use crate::analyzers::types::{Stat, TimeStats};
use crate::analyzers::utility::mode;
use crate::record::{Dataset, WEEKDAYS};

/// Modes of the derived month, weekday and start hour.
///
/// Ties resolve to the lowest month, the earliest weekday (Monday first) and
/// the lowest hour.
#[tracing::instrument(skip_all, fields(records = dataset.len()))]
pub fn compute(dataset: &Dataset) -> Stat<TimeStats> {
    let month = mode(dataset.iter().map(|r| r.month));
    // weekdays have no ordering of their own, so count by Monday-based index
    let weekday = mode(dataset.iter().map(|r| r.day_of_week.num_days_from_monday()));
    let hour = mode(dataset.iter().map(|r| r.hour));

    match (month, weekday, hour) {
        (Some((month, _)), Some((weekday, _)), Some((hour, _))) => Stat::Value(TimeStats {
            most_frequent_month: month,
            most_frequent_weekday: WEEKDAYS[weekday as usize],
            most_frequent_hour: hour,
        }),
        _ => Stat::NoData,
    }
}
