//! Train data loading.
//!
//! Records come from a JSON array of train objects. The bytes are produced
//! by a [`TrainSource`]: in production a file at a fixed relative path,
//! in tests an in-memory buffer.

mod error;
mod file;
mod memory;

pub use error::SourceError;
pub use file::{DEFAULT_DATA_PATH, FileSource};
pub use memory::MemorySource;

use tracing::debug;

use crate::domain::TrainRecord;

/// Trait for providing the raw train data payload.
///
/// This abstraction allows the finder to be tested without touching disk.
pub trait TrainSource {
    /// Read the full payload, or fail with an I/O error.
    fn read(&self) -> std::io::Result<Vec<u8>>;
}

impl<T: TrainSource + ?Sized> TrainSource for &T {
    fn read(&self) -> std::io::Result<Vec<u8>> {
        (**self).read()
    }
}

/// Decode a JSON array of train objects, preserving source order.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<TrainRecord>, SourceError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Read and decode every record from a source.
pub fn load_records<S: TrainSource>(source: &S) -> Result<Vec<TrainRecord>, SourceError> {
    let bytes = source.read()?;
    let records = decode_records(&bytes)?;
    debug!(bytes = bytes.len(), records = records.len(), "loaded train data");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClockTime;

    const TWO_TRAINS: &str = r#"[
        {"TrainID":1,"DepartureStationID":1,"ArrivalStationID":2,"Price":30,
         "ArrivalTime":"10:00:00","DepartureTime":"09:00:00"},
        {"TrainID":2,"DepartureStationID":3,"ArrivalStationID":4,"Price":12.5,
         "ArrivalTime":"18:45:10","DepartureTime":"17:00:00"}
    ]"#;

    #[test]
    fn decode_preserves_order() {
        let records = decode_records(TWO_TRAINS.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id(), 1);
        assert_eq!(records[1].id(), 2);
        assert_eq!(
            records[1].arrival_time(),
            ClockTime::parse("18:45:10").unwrap()
        );
    }

    #[test]
    fn decode_empty_array() {
        assert!(decode_records(b"[]").unwrap().is_empty());
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = decode_records(b"[{").unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));

        let err = decode_records(b"").unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn decode_rejects_non_array() {
        let err = decode_records(br#"{"TrainID":1}"#).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
    }

    #[test]
    fn decode_fails_on_single_bad_time() {
        let json = r#"[
            {"TrainID":1,"DepartureStationID":1,"ArrivalStationID":2,"Price":30,
             "ArrivalTime":"10:00:00","DepartureTime":"09:00:00"},
            {"TrainID":2,"DepartureStationID":1,"ArrivalStationID":2,"Price":30,
             "ArrivalTime":"10:00:00","DepartureTime":"9:00"}
        ]"#;
        let err = decode_records(json.as_bytes()).unwrap_err();
        assert!(matches!(err, SourceError::Decode(_)));
        assert!(err.to_string().contains("invalid time"));
    }

    #[test]
    fn load_through_reference() {
        let source = MemorySource::new(TWO_TRAINS);
        let records = load_records(&&source).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn load_propagates_io_error() {
        let source = FileSource::new("/nonexistent/path/data.json");
        let err = load_records(&source).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
