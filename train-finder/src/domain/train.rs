//! Train record type, decoded from the timetable data file.

use std::fmt;

use serde::{Deserialize, Deserializer};

use super::ClockTime;

/// One scheduled train between two stations.
///
/// Records are only built by decoding (or by [`TrainRecord::new`] in
/// tests and tools) and are never mutated afterwards; fields are exposed
/// through accessors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrainRecord {
    #[serde(rename = "TrainID")]
    id: i64,

    #[serde(rename = "DepartureStationID")]
    departure_station_id: i64,

    #[serde(rename = "ArrivalStationID")]
    arrival_station_id: i64,

    /// Fare. Not checked for sign.
    #[serde(rename = "Price")]
    price: f32,

    #[serde(rename = "ArrivalTime", deserialize_with = "parse_clock_time")]
    arrival_time: ClockTime,

    #[serde(rename = "DepartureTime", deserialize_with = "parse_clock_time")]
    departure_time: ClockTime,
}

impl TrainRecord {
    /// Create a record from already-validated parts.
    pub fn new(
        id: i64,
        departure_station_id: i64,
        arrival_station_id: i64,
        price: f32,
        departure_time: ClockTime,
        arrival_time: ClockTime,
    ) -> Self {
        Self {
            id,
            departure_station_id,
            arrival_station_id,
            price,
            arrival_time,
            departure_time,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn departure_station_id(&self) -> i64 {
        self.departure_station_id
    }

    pub fn arrival_station_id(&self) -> i64 {
        self.arrival_station_id
    }

    pub fn price(&self) -> f32 {
        self.price
    }

    pub fn departure_time(&self) -> ClockTime {
        self.departure_time
    }

    pub fn arrival_time(&self) -> ClockTime {
        self.arrival_time
    }
}

impl fmt::Display for TrainRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id={} departure_station={} arrival_station={} departure_time={} arrival_time={} price={}",
            self.id,
            self.departure_station_id,
            self.arrival_station_id,
            self.departure_time,
            self.arrival_time,
            self.price
        )
    }
}

/// Decode an "HH:MM:SS" string field, failing the whole record on a bad time.
fn parse_clock_time<'de, D: Deserializer<'de>>(d: D) -> Result<ClockTime, D::Error> {
    let s = String::deserialize(d)?;
    ClockTime::parse(&s).map_err(serde::de::Error::custom)
}
