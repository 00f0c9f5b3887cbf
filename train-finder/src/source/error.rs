//! Train data source error types.

/// Errors that can occur while loading train records.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The raw payload could not be read
    #[error("failed to read train data: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not a valid list of train records
    #[error("failed to decode train data: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SourceError::from(io);
        assert_eq!(err.to_string(), "failed to read train data: no such file");

        let json = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
        let err = SourceError::from(json);
        assert!(err.to_string().starts_with("failed to decode train data: "));
    }
}
