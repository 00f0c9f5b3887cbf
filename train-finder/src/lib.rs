//! Train finder.
//!
//! A small command-line tool that answers: "what are the best trains
//! from this station to that one?" from a local JSON timetable.

pub mod cli;
pub mod domain;
pub mod finder;
pub mod logger;
pub mod source;
