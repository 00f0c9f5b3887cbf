//! Query validation.
//!
//! Turns the three raw strings typed by the user into a typed [`Query`].
//! Checks run in a fixed order and stop at the first failure:
//! empty departure, empty arrival, departure format, arrival format,
//! criteria.

use tracing::debug;

use crate::domain::{Criteria, StationId};

use super::error::ValidationError;

/// A validated train query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    /// Station the train must leave from.
    pub departure_station: StationId,

    /// Station the train must arrive at.
    pub arrival_station: StationId,

    /// How to order the matches.
    pub criteria: Criteria,
}

impl Query {
    /// Create a query from already-validated parts.
    pub fn new(departure_station: StationId, arrival_station: StationId, criteria: Criteria) -> Self {
        Self {
            departure_station,
            arrival_station,
            criteria,
        }
    }

    /// Validate raw user input.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_finder::finder::{Query, ValidationError};
    ///
    /// let query = Query::validate("1", "2", "price").unwrap();
    /// assert_eq!(query.departure_station.get(), 1);
    ///
    /// // Every field is wrong, but the empty departure is reported first
    /// assert_eq!(
    ///     Query::validate("", "", "fastest"),
    ///     Err(ValidationError::EmptyDepartureStation)
    /// );
    /// ```
    pub fn validate(
        departure_station: &str,
        arrival_station: &str,
        criteria: &str,
    ) -> Result<Self, ValidationError> {
        if departure_station.is_empty() {
            return Err(ValidationError::EmptyDepartureStation);
        }
        if arrival_station.is_empty() {
            return Err(ValidationError::EmptyArrivalStation);
        }

        let departure_station = StationId::parse(departure_station).map_err(|err| {
            debug!(%err, "rejected departure station");
            ValidationError::InvalidDepartureStation
        })?;
        let arrival_station = StationId::parse(arrival_station).map_err(|err| {
            debug!(%err, "rejected arrival station");
            ValidationError::InvalidArrivalStation
        })?;
        let criteria = Criteria::parse(criteria).map_err(|err| {
            debug!(%err, "rejected criteria");
            ValidationError::UnsupportedCriteria
        })?;

        Ok(Self::new(departure_station, arrival_station, criteria))
    }
}
