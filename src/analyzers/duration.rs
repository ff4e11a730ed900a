//! Total and mean trip duration.

use crate::analyzers::types::{DurationStats, Stat};
use crate::analyzers::utility::mean;
use crate::record::Dataset;

/// Sums durations exactly in milliseconds. The mean is [`Stat::NoData`] for
/// an empty dataset.
#[tracing::instrument(skip_all, fields(records = dataset.len()))]
pub fn compute(dataset: &Dataset) -> DurationStats {
    let total_millis: u128 = dataset
        .iter()
        .map(|r| u128::from(r.trip_duration.as_millis()))
        .sum();
    let total_seconds = total_millis as f64 / 1000.0;

    DurationStats {
        trip_count: dataset.len(),
        total_millis,
        total_seconds,
        mean_seconds: mean(total_seconds, dataset.len()).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{TripDuration, TripRecord};
    use chrono::NaiveDate;

    fn trip(millis: u64) -> TripRecord {
        let at = NaiveDate::from_ymd_opt(2017, 2, 14)
            .unwrap()
            .and_hms_opt(7, 45, 0)
            .unwrap();
        TripRecord::new(at, TripDuration::from_millis(millis), "A", "B", "Subscriber")
    }

    #[test]
    fn test_empty_dataset() {
        let stats = compute(&Dataset::default());

        assert_eq!(stats.trip_count, 0);
        assert_eq!(stats.total_millis, 0);
        assert_eq!(stats.total_seconds, 0.0);
        assert!(stats.mean_seconds.is_no_data());
    }

    #[test]
    fn test_total_and_mean() {
        let dataset = Dataset::new(
            vec![trip(321_000), trip(1_039_000), trip(489_066)],
            false,
            false,
        );
        let stats = compute(&dataset);

        assert_eq!(stats.trip_count, 3);
        assert_eq!(stats.total_millis, 1_849_066);
        assert!((stats.total_seconds - 1849.066).abs() < 1e-9);
        let mean = *stats.mean_seconds.value().unwrap();
        assert!((mean * 3.0 - stats.total_seconds).abs() < 1e-9);
    }

    #[test]
    fn test_total_does_not_overflow_u64() {
        let dataset = Dataset::new(vec![trip(u64::MAX), trip(u64::MAX)], false, false);
        let stats = compute(&dataset);

        assert_eq!(stats.total_millis, u128::from(u64::MAX) * 2);
    }
}
