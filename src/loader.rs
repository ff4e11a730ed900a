//! CSV loader for city trip sources.
//!
//! Reads a whole source into a [`Dataset`], resolving columns by header name,
//! parsing start times and deriving the calendar fields once per record.

use chrono::NaiveDateTime;
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{LoadError, Result};
use crate::record::{Dataset, TripDuration, TripRecord};
use crate::selector::City;

pub const START_TIME: &str = "start time";
pub const END_TIME: &str = "end time";
pub const TRIP_DURATION: &str = "trip duration";
pub const START_STATION: &str = "start station";
pub const END_STATION: &str = "end station";
pub const USER_TYPE: &str = "user type";
pub const GENDER: &str = "gender";
pub const BIRTH_YEAR: &str = "birth year";

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Header positions of the columns the loader consumes.
#[derive(Debug)]
struct Columns {
    start_time: usize,
    end_time: Option<usize>,
    trip_duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &'static str| find(name).ok_or(LoadError::MissingColumn { column: name });

        Ok(Columns {
            start_time: require(START_TIME)?,
            end_time: find(END_TIME),
            trip_duration: require(TRIP_DURATION)?,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            user_type: require(USER_TYPE)?,
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }
}

/// Loads the fixed source file for `city` from `data_dir`.
pub fn load_city(data_dir: &Path, city: City) -> Result<Dataset> {
    load_path(&data_dir.join(city.source_file()))
}

/// Loads a trip source from a file path.
///
/// # Errors
///
/// Returns [`LoadError::SourceNotFound`] if the file cannot be opened, or any
/// error [`load_reader`] reports for its contents.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_path(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|source| LoadError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;
    info!(
        records = dataset.len(),
        has_gender = dataset.has_gender(),
        has_birth_year = dataset.has_birth_year(),
        "Trip source loaded"
    );
    Ok(dataset)
}

/// Parses CSV trip rows from any reader, keeping source order.
///
/// # Errors
///
/// Fails on a missing header, a missing required column, or any row whose
/// start time, trip duration or birth year cannot be parsed. Nothing is
/// returned for a source with a bad row.
pub fn load_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(LoadError::MissingHeader);
    }
    let columns = Columns::resolve(&headers)?;
    debug!(?columns, "Resolved trip columns");

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        records.push(parse_row(&row, &columns)?);
    }

    Ok(Dataset::new(
        records,
        columns.gender.is_some(),
        columns.birth_year.is_some(),
    ))
}

fn parse_row(row: &StringRecord, columns: &Columns) -> Result<TripRecord> {
    let line = row.position().map(|p| p.line()).unwrap_or_default();
    let field = |idx: usize| row.get(idx).map(str::trim).unwrap_or_default();
    let optional = |idx: Option<usize>| idx.map(field).filter(|v| !v.is_empty());

    let raw_start = field(columns.start_time);
    let start_time = parse_timestamp(raw_start).ok_or_else(|| LoadError::UnparseableTimestamp {
        line,
        value: raw_start.to_string(),
    })?;

    let raw_duration = field(columns.trip_duration);
    let trip_duration = raw_duration
        .parse::<f64>()
        .ok()
        .and_then(TripDuration::from_secs_f64)
        .ok_or_else(|| LoadError::InvalidField {
            line,
            column: TRIP_DURATION,
            value: raw_duration.to_string(),
        })?;

    let mut record = TripRecord::new(
        start_time,
        trip_duration,
        field(columns.start_station),
        field(columns.end_station),
        field(columns.user_type),
    );

    // end time is carried through but never consumed, so a bad value is not fatal
    if let Some(end_time) = optional(columns.end_time).and_then(parse_timestamp) {
        record = record.with_end_time(end_time);
    }
    if let Some(gender) = optional(columns.gender) {
        record = record.with_gender(gender);
    }
    if let Some(raw_year) = optional(columns.birth_year) {
        let year = parse_birth_year(raw_year).ok_or_else(|| LoadError::InvalidField {
            line,
            column: BIRTH_YEAR,
            value: raw_year.to_string(),
        })?;
        record = record.with_birth_year(year);
    }

    Ok(record)
}

/// Parses a start/end time in any of the layouts found in the city sources.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

/// Accepts `1989` as well as the float-formatted `1989.0`.
fn parse_birth_year(value: &str) -> Option<i32> {
    if let Ok(year) = value.parse::<i32>() {
        return Some(year);
    }
    let year = value.parse::<f64>().ok()?;
    if year.is_finite() && year.fract() == 0.0 && year.abs() <= i32::MAX as f64 {
        Some(year as i32)
    } else {
        None
    }
}
