use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading configuration or decoding inbound events.
///
/// The simulation itself never fails: degenerate geometry is skipped and
/// overflow is handled by eviction.
#[derive(Debug, Error)]
pub enum Error {
    /// A configuration value is out of its valid range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Malformed JSON in a config file or event payload.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Propagated I/O errors (reading config files).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_informative() {
        let e = Error::InvalidConfig("friction must be within [0, 1]".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("invalid config"));
        assert!(msg.contains("friction"));
    }

    #[test]
    fn test_json_errors_convert() {
        let err: Error = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
    }
}
