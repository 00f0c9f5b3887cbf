//! Station identifier types.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A positive integer identifying a station on the network.
///
/// This type guarantees that any `StationId` value is at least 1.
///
/// # Examples
///
/// ```
/// use train_finder::domain::StationId;
///
/// let id = StationId::parse("42").unwrap();
/// assert_eq!(id.get(), 42);
///
/// // Zero and negative numbers are rejected
/// assert!(StationId::parse("0").is_err());
/// assert!(StationId::parse("-3").is_err());
///
/// // So is anything that isn't a base-10 integer
/// assert!(StationId::parse("4.2").is_err());
/// assert!(StationId::parse("abc").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(i64);

impl StationId {
    /// Parse a station id from a base-10 integer string.
    ///
    /// A leading `+` is accepted. Values that overflow `i64` are rejected.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let value: i64 = s.parse().map_err(|_| InvalidStationId {
            reason: "must be a base-10 integer",
        })?;

        Self::new(value).ok_or(InvalidStationId {
            reason: "must be at least 1",
        })
    }

    /// Wrap a raw value, returning `None` if it is not positive.
    pub fn new(value: i64) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    /// Returns the raw integer value.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl FromStr for StationId {
    type Err = InvalidStationId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
