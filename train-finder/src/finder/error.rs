//! Query error types.
//!
//! Validation failures are plain kinds with no payload, so callers can
//! match on them directly. Source failures keep their underlying cause
//! for display.

use crate::source::SourceError;

/// Reasons a raw query is rejected, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    /// Departure station was left blank
    #[error("empty departure station")]
    EmptyDepartureStation,

    /// Arrival station was left blank
    #[error("empty arrival station")]
    EmptyArrivalStation,

    /// Departure station is not a positive integer
    #[error("bad departure station input")]
    InvalidDepartureStation,

    /// Arrival station is not a positive integer
    #[error("bad arrival station input")]
    InvalidArrivalStation,

    /// Criterion is not one of the supported keys
    #[error("unsupported criteria")]
    UnsupportedCriteria,
}

/// Every way a query can fail, without any attached detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Io,
    Decode,
    EmptyDepartureStation,
    EmptyArrivalStation,
    InvalidDepartureStation,
    InvalidArrivalStation,
    UnsupportedCriteria,
}

impl From<ValidationError> for ErrorKind {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::EmptyDepartureStation => ErrorKind::EmptyDepartureStation,
            ValidationError::EmptyArrivalStation => ErrorKind::EmptyArrivalStation,
            ValidationError::InvalidDepartureStation => ErrorKind::InvalidDepartureStation,
            ValidationError::InvalidArrivalStation => ErrorKind::InvalidArrivalStation,
            ValidationError::UnsupportedCriteria => ErrorKind::UnsupportedCriteria,
        }
    }
}

/// Error from a train query.
#[derive(Debug, thiserror::Error)]
pub enum FindError {
    /// Loading or decoding the timetable failed
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The raw query was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl FindError {
    /// Returns the kind of failure, for matching without the cause.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FindError::Source(SourceError::Io(_)) => ErrorKind::Io,
            FindError::Source(SourceError::Decode(_)) => ErrorKind::Decode,
            FindError::Validation(err) => (*err).into(),
        }
    }
}
