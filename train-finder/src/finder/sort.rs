//! Result ordering.

use std::cmp::Ordering;

use crate::domain::{Criteria, TrainRecord};

/// Sort trains in place by the given criterion, earliest or cheapest first.
///
/// The sort is stable: trains that compare equal keep their input order.
pub fn sort_trains(records: &mut [TrainRecord], criteria: Criteria) {
    records.sort_by(|a, b| compare(a, b, criteria));
}

fn compare(a: &TrainRecord, b: &TrainRecord, criteria: Criteria) -> Ordering {
    match criteria {
        // Prices decoded from JSON are never NaN; treat any that slip
        // through as ties so order stays stable.
        Criteria::Price => a
            .price()
            .partial_cmp(&b.price())
            .unwrap_or(Ordering::Equal),
        Criteria::ArrivalTime => a.arrival_time().cmp(&b.arrival_time()),
        Criteria::DepartureTime => a.departure_time().cmp(&b.departure_time()),
    }
}
