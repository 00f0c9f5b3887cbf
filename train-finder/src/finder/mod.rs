//! Train query pipeline.
//!
//! This module answers: "which trains run from here to there, best first?"
//! The raw query is validated, the timetable is filtered to the requested
//! station pair, and the matches are ordered by the chosen criterion and
//! capped at a few results.

mod config;
mod error;
mod find;
mod select;
mod sort;
mod validate;

pub use config::FinderConfig;
pub use error::{ErrorKind, FindError, ValidationError};
pub use find::{TrainFinder, find_trains};
pub use select::select_trains;
pub use sort::sort_trains;
pub use validate::Query;
