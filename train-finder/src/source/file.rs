//! File-backed train data source.

use std::path::{Path, PathBuf};

use tracing::trace;

use super::TrainSource;

/// Where the timetable lives, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Reads the whole data file on every call.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

impl TrainSource for FileSource {
    fn read(&self) -> std::io::Result<Vec<u8>> {
        trace!(path = %self.path.display(), "reading train data");
        std::fs::read(&self.path)
    }
}
