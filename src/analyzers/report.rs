use serde::Serialize;
use std::sync::Arc;

use crate::analyzers::types::{DurationStats, Stat, StationStats, TimeStats, UserStats};
use crate::analyzers::{duration, station, time, user};
use crate::record::Dataset;

/// All four aggregator results for one filtered dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripReport {
    pub trip_count: usize,
    pub time: Stat<TimeStats>,
    pub stations: Stat<StationStats>,
    pub durations: DurationStats,
    pub users: UserStats,
}

impl TripReport {
    /// Runs the aggregators one after another on the calling thread.
    #[tracing::instrument(skip_all, fields(records = dataset.len()))]
    pub fn build(dataset: &Dataset) -> Self {
        TripReport {
            trip_count: dataset.len(),
            time: time::compute(dataset),
            stations: station::compute(dataset),
            durations: duration::compute(dataset),
            users: user::compute(dataset),
        }
    }

    /// Runs each aggregator as its own blocking task over a shared snapshot.
    ///
    /// Produces the same report as [`TripReport::build`].
    ///
    /// # Errors
    ///
    /// Returns an error if an aggregator task panics or is cancelled.
    #[tracing::instrument(skip_all, fields(records = dataset.len()))]
    pub async fn build_concurrent(dataset: Arc<Dataset>) -> anyhow::Result<Self> {
        let (time, stations, durations, users) = tokio::try_join!(
            spawn_aggregator(&dataset, time::compute),
            spawn_aggregator(&dataset, station::compute),
            spawn_aggregator(&dataset, duration::compute),
            spawn_aggregator(&dataset, user::compute),
        )?;

        Ok(TripReport {
            trip_count: dataset.len(),
            time,
            stations,
            durations,
            users,
        })
    }
}

fn spawn_aggregator<T, F>(dataset: &Arc<Dataset>, compute: F) -> tokio::task::JoinHandle<T>
where
    T: Send + 'static,
    F: FnOnce(&Dataset) -> T + Send + 'static,
{
    let dataset = Arc::clone(dataset);
    let span = tracing::Span::current();
    tokio::task::spawn_blocking(move || span.in_scope(|| compute(&dataset)))
}
