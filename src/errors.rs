use reqwest::StatusCode;
use thiserror::Error;

use crate::clients::entities::ResourceKind;

/// Everything that can go wrong while talking to the backend or bootstrapping locales
#[derive(Error, Debug)]
pub enum Error {
    /// Empty or dot-segment identifier, rejected before any request
    #[error("No {0}Id provided")]
    InvalidInput(ResourceKind),

    /// Backend answered with a non-success status
    #[error("Error fetching {kind}: {status_text}")]
    Fetch {
        /// Resource that was requested
        kind: ResourceKind,
        /// Status code of the response
        status: StatusCode,
        /// Reason phrase sent by the server, or the canonical one
        status_text: String,
    },

    /// The request never got a response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not JSON of the expected shape
    #[error("Failed to parse {kind} response, error: {source}")]
    Parse {
        /// Resource that was requested
        kind: ResourceKind,
        /// What serde rejected
        #[source]
        source: serde_json::Error,
    },

    /// Unusable base URL or environment
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Malformed message bundle
    #[error("Locale error: {0}")]
    LocaleError(String),

    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}
