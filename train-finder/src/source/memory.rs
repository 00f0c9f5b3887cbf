//! In-memory train data source for testing without a data file.

use super::TrainSource;

/// Serves a fixed payload as if it had been read from disk.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    payload: Vec<u8>,
}

impl MemorySource {
    /// Create a source that always returns `payload`.
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

impl TrainSource for MemorySource {
    fn read(&self) -> std::io::Result<Vec<u8>> {
        Ok(self.payload.clone())
    }
}
