//! Error types for the loading edges of the criteria crate.
//!
//! Parsing and matching never fail; only turning outside data (record
//! files, configuration) into typed values can.

use thiserror::Error;

/// Errors that can occur when loading records or configuration.
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// Input was not valid JSON.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A record was some other JSON value than an object.
    #[error("record must be a JSON object, got {actual}")]
    RecordNotAnObject { actual: &'static str },

    /// A record collection was neither an array nor an object.
    #[error("record collection must be a JSON array or object, got {actual}")]
    InvalidCollection { actual: &'static str },

    /// Configuration file could not be read.
    #[error("failed to read config '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file was not valid YAML for the expected shape.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_yaml::Error),
}

/// Result type for criteria operations.
pub type Result<T> = std::result::Result<T, CriteriaError>;
