//! Most popular stations and trip.

use crate::analyzers::types::{Route, Stat, StationStats};
use crate::analyzers::utility::mode;
use crate::record::Dataset;

/// Most frequent start station, end station and (start, end) route.
///
/// Ties resolve to the lexicographically smallest station name, or route pair.
#[tracing::instrument(skip_all, fields(records = dataset.len()))]
pub fn compute(dataset: &Dataset) -> Stat<StationStats> {
    let start = mode(dataset.iter().map(|r| r.start_station.as_str()));
    let end = mode(dataset.iter().map(|r| r.end_station.as_str()));
    let route = mode(
        dataset
            .iter()
            .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
    );

    match (start, end, route) {
        (Some((start, _)), Some((end, _)), Some(((route_start, route_end), route_count))) => {
            Stat::Value(StationStats {
                most_frequent_start_station: start.to_string(),
                most_frequent_end_station: end.to_string(),
                most_frequent_route: Route {
                    start: route_start.to_string(),
                    end: route_end.to_string(),
                },
                most_frequent_route_count: route_count,
            })
        }
        _ => Stat::NoData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{TripDuration, TripRecord};
    use chrono::NaiveDate;

    fn trip(start: &str, end: &str) -> TripRecord {
        let at = NaiveDate::from_ymd_opt(2017, 4, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        TripRecord::new(at, TripDuration::from_millis(1_000), start, end, "Customer")
    }

    #[test]
    fn test_empty_dataset_is_no_data() {
        assert!(compute(&Dataset::default()).is_no_data());
    }

    #[test]
    fn test_most_frequent_route() {
        let dataset = Dataset::new(
            vec![trip("A", "B"), trip("A", "C"), trip("A", "B")],
            false,
            false,
        );
        let stats = compute(&dataset);
        let stats = stats.value().unwrap();

        assert_eq!(stats.most_frequent_start_station, "A");
        assert_eq!(stats.most_frequent_end_station, "B");
        assert_eq!(
            stats.most_frequent_route,
            Route {
                start: "A".to_string(),
                end: "B".to_string()
            }
        );
        assert_eq!(stats.most_frequent_route_count, 2);
    }

    #[test]
    fn test_ties_are_lexicographic() {
        let dataset = Dataset::new(
            vec![trip("Streeter Dr", "Lake Shore"), trip("Clark St", "Wabash Ave")],
            false,
            false,
        );
        let stats = compute(&dataset);
        let stats = stats.value().unwrap();

        assert_eq!(stats.most_frequent_start_station, "Clark St");
        assert_eq!(stats.most_frequent_end_station, "Lake Shore");
        assert_eq!(stats.most_frequent_route.start, "Clark St");
        assert_eq!(stats.most_frequent_route.end, "Wabash Ave");
        assert_eq!(stats.most_frequent_route_count, 1);
    }

    #[test]
    fn test_route_tie_picks_smaller_pair() {
        // (X, Z) and (Y, Y) both occur three times
        let dataset = Dataset::new(
            vec![
                trip("X", "Z"),
                trip("X", "Z"),
                trip("X", "W"),
                trip("Y", "Y"),
                trip("Y", "Y"),
                trip("Y", "Y"),
                trip("X", "Z"),
                trip("Q", "Z"),
            ],
            false,
            false,
        );
        let stats = compute(&dataset);
        let stats = stats.value().unwrap();

        assert_eq!(stats.most_frequent_start_station, "X");
        assert_eq!(stats.most_frequent_end_station, "Z");
        assert_eq!(stats.most_frequent_route.start, "X");
        assert_eq!(stats.most_frequent_route.end, "Z");
        assert_eq!(stats.most_frequent_route_count, 3);
    }
}
