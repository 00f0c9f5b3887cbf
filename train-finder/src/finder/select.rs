//! Station-pair selection.

use crate::domain::{StationId, TrainRecord};

/// Keep only trains running from `departure` to `arrival`.
///
/// Relative order is preserved. Returns an empty vector when nothing
/// matches.
pub fn select_trains(
    records: impl IntoIterator<Item = TrainRecord>,
    departure: StationId,
    arrival: StationId,
) -> Vec<TrainRecord> {
    records
        .into_iter()
        .filter(|record| {
            record.departure_station_id() == departure.get()
                && record.arrival_station_id() == arrival.get()
        })
        .collect()
}
