//! Error types for the Confluence content API client.

/// Error from Confluence API operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfluenceError {
    /// Caller violated an operation precondition. Raised before any
    /// network activity.
    #[error("validation failed: {0}")]
    Validation(String),

    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    Transport(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    Response {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Response body is not valid JSON.
    #[error("JSON decode error")]
    Decoding(#[from] serde_json::Error),

    /// Decoded payload does not match the expected entity shape.
    #[error("hydration error")]
    Hydration(#[from] HydrationError),
}

/// Error hydrating a decoded JSON payload into a typed entity.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum HydrationError {
    /// The `type` discriminator does not name a known content type.
    #[error("unrecognized content type `{0}`")]
    UnknownContentType(String),

    /// A required field is absent from the payload.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field is present but has an unusable value or type.
    #[error("invalid value for field `{0}`")]
    InvalidField(&'static str),
}
