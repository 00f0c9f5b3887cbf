//! The query pipeline: load, validate, select, sort, truncate.

use tracing::{debug, info};

use crate::domain::TrainRecord;
use crate::source::{FileSource, TrainSource, load_records};

use super::config::FinderConfig;
use super::error::FindError;
use super::select::select_trains;
use super::sort::sort_trains;
use super::validate::Query;

/// Answers train queries against a data source.
///
/// Holds no state between queries: every call re-reads and re-decodes the
/// source.
#[derive(Debug, Clone)]
pub struct TrainFinder<S> {
    source: S,
    max_results: usize,
}

impl TrainFinder<FileSource> {
    /// Create a finder reading the timetable file named in `config`.
    pub fn from_config(config: &FinderConfig) -> Self {
        Self::new(FileSource::new(&config.data_path), config)
    }
}

impl<S: TrainSource> TrainFinder<S> {
    /// Create a finder over an arbitrary source.
    ///
    /// Only `max_results` is taken from `config`; the source replaces
    /// `data_path`.
    pub fn new(source: S, config: &FinderConfig) -> Self {
        Self {
            source,
            max_results: config.max_results,
        }
    }

    /// Find the best trains from `departure_station` to `arrival_station`.
    ///
    /// Steps run in order and the first failure is returned unchanged:
    /// 1. Load and decode every record.
    /// 2. Validate the raw query.
    /// 3. Keep trains for the requested station pair.
    /// 4. Sort them by `criteria`.
    /// 5. Truncate to at most `max_results`.
    ///
    /// No matching trains is not an error; the result is simply empty.
    pub fn find(
        &self,
        departure_station: &str,
        arrival_station: &str,
        criteria: &str,
    ) -> Result<Vec<TrainRecord>, FindError> {
        let records = load_records(&self.source)?;

        let query = Query::validate(departure_station, arrival_station, criteria)?;
        debug!(
            departure = %query.departure_station,
            arrival = %query.arrival_station,
            criteria = %query.criteria,
            "query accepted"
        );

        let mut trains = select_trains(records, query.departure_station, query.arrival_station);
        debug!(matches = trains.len(), "selected trains");

        sort_trains(&mut trains, query.criteria);
        trains.truncate(self.max_results);

        info!(results = trains.len(), "train query complete");
        Ok(trains)
    }
}

/// Run a query against the default timetable file (`data.json`).
pub fn find_trains(
    departure_station: &str,
    arrival_station: &str,
    criteria: &str,
) -> Result<Vec<TrainRecord>, FindError> {
    TrainFinder::from_config(&FinderConfig::default()).find(
        departure_station,
        arrival_station,
        criteria,
    )
}
