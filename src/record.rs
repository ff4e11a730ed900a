//! Trip record model and the in-memory dataset built by the loader.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::{Serialize, Serializer};

/// Weekdays in Monday-first order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English name of a 1-based month number.
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Serializes a weekday by its full name ("Monday") instead of chrono's short form.
pub fn serialize_weekday<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*day))
}

/// Trip length stored as whole milliseconds so totals accumulate exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub struct TripDuration(u64);

impl TripDuration {
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Converts a non-negative, finite number of seconds, rounding to the nearest millisecond.
    pub fn from_secs_f64(secs: f64) -> Option<Self> {
        if !secs.is_finite() || secs < 0.0 {
            return None;
        }
        Some(Self((secs * 1000.0).round() as u64))
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / 1000.0
    }
}

/// One ride, with calendar fields derived from `start_time` at load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    pub trip_duration: TripDuration,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived
    pub month: u32,
    #[serde(serialize_with = "serialize_weekday")]
    pub day_of_week: Weekday,
    pub hour: u32,
}

impl TripRecord {
    /// Builds a record, deriving month, weekday and hour from `start_time`.
    pub fn new(
        start_time: NaiveDateTime,
        trip_duration: TripDuration,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        user_type: impl Into<String>,
    ) -> Self {
        TripRecord {
            start_time,
            end_time: None,
            trip_duration,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: user_type.into(),
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day_of_week: start_time.weekday(),
            hour: start_time.hour(),
        }
    }

    pub fn with_end_time(mut self, end_time: NaiveDateTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_birth_year(mut self, birth_year: i32) -> Self {
        self.birth_year = Some(birth_year);
        self
    }
}

/// Ordered trip records of one city source.
///
/// `has_gender` / `has_birth_year` track whether the source carried those
/// columns at all, independent of whether any record has a value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<TripRecord>,
    has_gender: bool,
    has_birth_year: bool,
}

impl Dataset {
    pub fn new(records: Vec<TripRecord>, has_gender: bool, has_birth_year: bool) -> Self {
        Dataset {
            records,
            has_gender,
            has_birth_year,
        }
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_gender(&self) -> bool {
        self.has_gender
    }

    pub fn has_birth_year(&self) -> bool {
        self.has_birth_year
    }

    /// New dataset with the same column presence, holding only `records`.
    pub fn with_records(&self, records: Vec<TripRecord>) -> Self {
        Dataset {
            records,
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
