//! Sort criteria for query results.

use std::fmt;
use std::str::FromStr;

/// Error returned when a criterion key is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported criteria: {0:?}")]
pub struct UnsupportedCriteria(pub String);

/// The key used to order matching trains.
///
/// # Examples
///
/// ```
/// use train_finder::domain::Criteria;
///
/// assert_eq!(Criteria::parse("price").unwrap(), Criteria::Price);
/// assert_eq!(Criteria::ArrivalTime.as_str(), "arrival-time");
/// assert!(Criteria::parse("fastest").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criteria {
    /// Cheapest fare first.
    Price,
    /// Earliest arrival first.
    ArrivalTime,
    /// Earliest departure first.
    DepartureTime,
}

impl Criteria {
    /// Every supported criterion, in display order.
    pub const ALL: [Criteria; 3] = [
        Criteria::Price,
        Criteria::ArrivalTime,
        Criteria::DepartureTime,
    ];

    /// Parse a criterion from its key. Matching is exact and case-sensitive.
    pub fn parse(s: &str) -> Result<Self, UnsupportedCriteria> {
        match s {
            "price" => Ok(Criteria::Price),
            "arrival-time" => Ok(Criteria::ArrivalTime),
            "departure-time" => Ok(Criteria::DepartureTime),
            other => Err(UnsupportedCriteria(other.to_string())),
        }
    }

    /// Returns the key this criterion is written as.
    pub fn as_str(&self) -> &'static str {
        match self {
            Criteria::Price => "price",
            Criteria::ArrivalTime => "arrival-time",
            Criteria::DepartureTime => "departure-time",
        }
    }
}

impl FromStr for Criteria {
    type Err = UnsupportedCriteria;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Criteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
