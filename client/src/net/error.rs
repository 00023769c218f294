//! Failure taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Pages collapse every variant into one generic message; only the
//! become-broker flow inspects [`ApiError::status`].

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Why an API request did not produce the expected value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// HTTP is only wired up in the browser build.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// HTTP status code, when the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}
