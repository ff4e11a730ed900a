//! Result types produced by the aggregators.

use chrono::Weekday;
use serde::Serialize;

use crate::record::serialize_weekday;

/// A statistic that is undefined for an empty dataset.
///
/// Serializes as the inner value, or `null` for [`Stat::NoData`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Stat<T> {
    Value(T),
    NoData,
}

impl<T> Stat<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Stat::Value(v) => Some(v),
            Stat::NoData => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Stat::NoData)
    }
}

impl<T> From<Option<T>> for Stat<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Stat::NoData, Stat::Value)
    }
}

/// Most frequent month, weekday and start hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeStats {
    pub most_frequent_month: u32,
    #[serde(serialize_with = "serialize_weekday")]
    pub most_frequent_weekday: Weekday,
    pub most_frequent_hour: u32,
}

/// A start/end station pair.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Route {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationStats {
    pub most_frequent_start_station: String,
    pub most_frequent_end_station: String,
    pub most_frequent_route: Route,
    pub most_frequent_route_count: usize,
}

/// Total and mean trip duration. The total of an empty dataset is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DurationStats {
    pub trip_count: usize,
    pub total_millis: u128,
    pub total_seconds: f64,
    pub mean_seconds: Stat<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// Rider breakdown.
///
/// `genders` and `birth_years` are `None` when the source has no such column,
/// which is different from a column with no values in the filtered rows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub user_types: Vec<CategoryCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genders: Option<Vec<CategoryCount>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_years: Option<Stat<BirthYearStats>>,
}
