use thiserror::Error;

/// Everything that can abort an artist lookup or an intake session.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure, including a request the client could not build.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body was not JSON or did not have the expected shape.
    #[error("Spotify Deserialization error: {0}")]
    DeserializationError(#[from] serde_json::Error),

    /// Non-success status from the token endpoint or the Web API.
    #[error("Spotify API unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Missing or unusable credentials or endpoint settings.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Console input could not be read.
    #[error("Input error: {0}")]
    InputError(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
