//! Month/weekday narrowing of a loaded dataset.

use tracing::debug;

use crate::record::{Dataset, TripRecord};
use crate::selector::{DayFilter, MonthFilter, Selector};

/// Returns the records matching `selector`, in their original order.
///
/// An all/all selector yields an identical copy. The source dataset is never
/// modified, and an empty result is a valid dataset.
#[tracing::instrument(skip_all, fields(records = dataset.len(), month = %selector.month, day = %selector.day))]
pub fn apply(dataset: &Dataset, selector: &Selector) -> Dataset {
    if selector.is_all() {
        return dataset.clone();
    }

    let records: Vec<TripRecord> = dataset
        .iter()
        .filter(|r| is_selected(r, selector))
        .cloned()
        .collect();
    debug!(kept = records.len(), "Filter applied");

    dataset.with_records(records)
}

fn is_selected(record: &TripRecord, selector: &Selector) -> bool {
    let month_ok = match selector.month {
        MonthFilter::All => true,
        MonthFilter::Month(m) => record.month == m,
    };
    let day_ok = match selector.day {
        DayFilter::All => true,
        DayFilter::Day(d) => record.day_of_week == d,
    };
    month_ok && day_ok
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TripDuration;
    use chrono::{NaiveDate, Weekday};

    fn trip(month: u32, day: u32, station: &str) -> TripRecord {
        let start = NaiveDate::from_ymd_opt(2017, month, day)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        TripRecord::new(start, TripDuration::from_millis(60_000), station, "B", "Subscriber")
    }

    fn sample() -> Dataset {
        // 2017-01-02 Mon, 2017-01-06 Fri, 2017-02-06 Mon, 2017-03-03 Fri
        Dataset::new(
            vec![
                trip(1, 2, "a"),
                trip(1, 6, "b"),
                trip(2, 6, "c"),
                trip(3, 3, "d"),
                trip(1, 2, "e"),
            ],
            false,
            false,
        )
    }

    fn stations(dataset: &Dataset) -> Vec<&str> {
        dataset.iter().map(|r| r.start_station.as_str()).collect()
    }

    #[test]
    fn test_all_all_is_identity() {
        let mut records = Vec::new();
        for (i, month) in [1, 2, 3, 4, 5, 1, 2, 3, 4, 5].into_iter().enumerate() {
            records.push(trip(month, 10, &format!("s{i}")));
        }
        let dataset = Dataset::new(records, true, true);

        let filtered = apply(&dataset, &Selector::default());
        assert_eq!(filtered, dataset);
        assert_eq!(filtered.len(), 10);
    }

    #[test]
    fn test_month_only() {
        let dataset = sample();
        let selector = Selector::new(MonthFilter::Month(1), DayFilter::All);
        let filtered = apply(&dataset, &selector);

        assert_eq!(stations(&filtered), vec!["a", "b", "e"]);
        assert!(filtered.iter().all(|r| r.month == 1));
        assert!(filtered.len() <= dataset.len());
    }

    #[test]
    fn test_day_only() {
        let dataset = sample();
        let selector = Selector::new(MonthFilter::All, DayFilter::Day(Weekday::Fri));
        let filtered = apply(&dataset, &selector);

        assert_eq!(stations(&filtered), vec!["b", "d"]);
    }

    #[test]
    fn test_month_and_day() {
        let dataset = sample();
        let selector = Selector::new(MonthFilter::Month(1), DayFilter::Day(Weekday::Mon));
        let filtered = apply(&dataset, &selector);

        assert_eq!(stations(&filtered), vec!["a", "e"]);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let dataset = sample();
        let selector = Selector::new(MonthFilter::Month(6), DayFilter::All);
        let filtered = apply(&dataset, &selector);

        assert!(filtered.is_empty());
        assert_eq!(dataset.len(), 5);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let dataset = sample();
        for selector in [
            Selector::default(),
            Selector::new(MonthFilter::Month(1), DayFilter::All),
            Selector::new(MonthFilter::All, DayFilter::Day(Weekday::Mon)),
            Selector::new(MonthFilter::Month(3), DayFilter::Day(Weekday::Fri)),
        ] {
            let once = apply(&dataset, &selector);
            let twice = apply(&once, &selector);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filter_keeps_column_presence() {
        let dataset = Dataset::new(vec![trip(1, 2, "a")], true, true);
        let filtered = apply(&dataset, &Selector::new(MonthFilter::Month(4), DayFilter::All));

        assert!(filtered.has_gender());
        assert!(filtered.has_birth_year());
    }
}
