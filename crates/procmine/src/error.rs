//! Error types for process mining.

use thiserror::Error;

/// Result type for mining operations.
pub type Result<T> = std::result::Result<T, MiningError>;

/// Mining error type.
///
/// Parse and discovery failures abort a request. Metric edge cases (empty
/// logs, unknown variants) never produce an error; those operations return
/// zero or empty results instead.
#[derive(Error, Debug)]
pub enum MiningError {
    /// Malformed or unreadable event log.
    #[error("Parse error: {0}")]
    Parse(String),

    /// IO error while reading a configuration file. Unreadable logs are
    /// reported as [`MiningError::Parse`].
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Process discovery could not produce a net.
    #[error("Discovery error: {0}")]
    Discovery(String),

    /// Query referenced an activity, transition or variant that does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MiningError {
    /// Create a parse error with event-log position context.
    pub fn parse_at(
        trace_index: usize,
        event_index: Option<usize>,
        message: impl AsRef<str>,
    ) -> Self {
        match event_index {
            Some(event_index) => MiningError::Parse(format!(
                "trace {}, event {}: {}",
                trace_index,
                event_index,
                message.as_ref()
            )),
            None => MiningError::Parse(format!("trace {}: {}", trace_index, message.as_ref())),
        }
    }

    /// Check if this error aborts the request (as opposed to a lookup miss).
    pub fn is_fatal(&self) -> bool {
        !matches!(self, MiningError::NotFound(_))
    }
}

impl From<roxmltree::Error> for MiningError {
    fn from(e: roxmltree::Error) -> Self {
        MiningError::Parse(e.to_string())
    }
}

impl From<toml::de::Error> for MiningError {
    fn from(e: toml::de::Error) -> Self {
        MiningError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_at_formats_position() {
        let err = MiningError::parse_at(3, Some(1), "missing concept:name");
        assert_eq!(
            err.to_string(),
            "Parse error: trace 3, event 1: missing concept:name"
        );

        let err = MiningError::parse_at(2, None, "bad trace");
        assert_eq!(err.to_string(), "Parse error: trace 2: bad trace");
    }

    #[test]
    fn test_not_found_is_not_fatal() {
        assert!(!MiningError::NotFound("X".into()).is_fatal());
        assert!(MiningError::Discovery("empty log".into()).is_fatal());
    }
}
