//! Rider demographics.

use crate::analyzers::types::{BirthYearStats, CategoryCount, Stat, UserStats};
use crate::analyzers::utility::{mode, value_counts};
use crate::record::Dataset;

/// User type counts, plus gender counts and birth-year extrema when the
/// source carries those columns.
///
/// Empty category cells are not counted.
#[tracing::instrument(skip_all, fields(records = dataset.len()))]
pub fn compute(dataset: &Dataset) -> UserStats {
    let user_types = category_counts(
        dataset
            .iter()
            .map(|r| r.user_type.as_str())
            .filter(|v| !v.is_empty()),
    );

    let genders = dataset
        .has_gender()
        .then(|| category_counts(dataset.iter().filter_map(|r| r.gender.as_deref())));

    let birth_years = dataset
        .has_birth_year()
        .then(|| birth_year_stats(dataset));

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}

fn category_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<CategoryCount> {
    value_counts(values)
        .into_iter()
        .map(|(value, count)| CategoryCount {
            value: value.to_string(),
            count,
        })
        .collect()
}

fn birth_year_stats(dataset: &Dataset) -> Stat<BirthYearStats> {
    let years = || dataset.iter().filter_map(|r| r.birth_year);

    match (years().min(), years().max(), mode(years())) {
        (Some(earliest), Some(most_recent), Some((most_common, _))) => {
            Stat::Value(BirthYearStats {
                earliest,
                most_recent,
                most_common,
            })
        }
        _ => Stat::NoData,
    }
}
