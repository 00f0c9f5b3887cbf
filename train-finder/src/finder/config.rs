//! Configuration for the train finder.

use std::path::PathBuf;

use crate::source::DEFAULT_DATA_PATH;

/// Configuration parameters for a train query.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Path to the JSON timetable.
    pub data_path: PathBuf,

    /// Maximum number of trains to return.
    pub max_results: usize,
}

impl FinderConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(data_path: impl Into<PathBuf>, max_results: usize) -> Self {
        Self {
            data_path: data_path.into(),
            max_results,
        }
    }

    /// Read the timetable from a different file.
    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    /// Return at most `max_results` trains.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            max_results: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = FinderConfig::default();

        assert_eq!(config.data_path, PathBuf::from("data.json"));
        assert_eq!(config.max_results, 3);
    }

    #[test]
    fn custom_config() {
        let config = FinderConfig::new("/tmp/trains.json", 5);

        assert_eq!(config.data_path, PathBuf::from("/tmp/trains.json"));
        assert_eq!(config.max_results, 5);
    }

    #[test]
    fn builder_methods() {
        let config = FinderConfig::default()
            .with_data_path("fixtures/trains.json")
            .with_max_results(1);

        assert_eq!(config.data_path, PathBuf::from("fixtures/trains.json"));
        assert_eq!(config.max_results, 1);
    }
}
