//! Domain types for the train finder.
//!
//! This module contains the value types that the query pipeline works on.
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod criteria;
mod station;
mod time;
mod train;

pub use criteria::{Criteria, UnsupportedCriteria};
pub use station::{InvalidStationId, StationId};
pub use time::{ClockTime, TimeError};
pub use train::TrainRecord;
