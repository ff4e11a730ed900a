//! City, month and day selectors accepted from the caller.
//!
//! Parsing is case-insensitive and ignores surrounding whitespace. The only
//! months covered by the trip data are January through June.

use chrono::Weekday;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::SelectorError;
use crate::record::{WEEKDAYS, month_name, weekday_name};

/// Months that can be selected, in calendar order.
const SELECTABLE_MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

/// One of the three cities with trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// File name of the city's trip source inside the data directory.
    pub fn source_file(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        City::ALL
            .into_iter()
            .find(|city| city.name() == wanted)
            .ok_or_else(|| SelectorError::InvalidCity(s.to_string()))
    }
}

/// Month restriction: everything, or a single month (January = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Month(u32),
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthFilter::All => f.write_str("all"),
            MonthFilter::Month(m) => f.write_str(month_name(*m).unwrap_or("unknown")),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(MonthFilter::All);
        }
        SELECTABLE_MONTHS
            .iter()
            .position(|m| *m == wanted)
            .map(|i| MonthFilter::Month(i as u32 + 1))
            .ok_or_else(|| SelectorError::InvalidMonth(s.to_string()))
    }
}

/// Weekday restriction: everything, or a single weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Day(Weekday),
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("all"),
            DayFilter::Day(d) => f.write_str(weekday_name(*d)),
        }
    }
}

impl FromStr for DayFilter {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        if wanted == "all" {
            return Ok(DayFilter::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|d| weekday_name(*d).to_lowercase() == wanted)
            .map(DayFilter::Day)
            .ok_or_else(|| SelectorError::InvalidDay(s.to_string()))
    }
}

/// Month and day restriction for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selector {
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Selector {
    pub fn new(month: MonthFilter, day: DayFilter) -> Self {
        Selector { month, day }
    }

    pub fn is_all(&self) -> bool {
        self.month == MonthFilter::All && self.day == DayFilter::All
    }
}

/// Validates raw city, month and day text into a typed query.
///
/// # Errors
///
/// Returns the first [`SelectorError`] found, checking city, then month, then day.
pub fn parse_selector(city: &str, month: &str, day: &str) -> Result<(City, Selector), SelectorError> {
    let city = city.parse()?;
    let selector = Selector::new(month.parse()?, day.parse()?);
    Ok((city, selector))
}
