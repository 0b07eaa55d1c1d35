//! Error types for the API client.

/// Errors that can occur when building or executing queries.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A predicate, limit, or query was constructed from an absent or out-of-range input.
    /// Raised before any network activity.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The exchange failed at the transport level (connection, TLS, or stream read).
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The service returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body could not be decoded into the requested record type,
    /// even after repair.
    #[error("Failed to decode response: {message}")]
    Decode { message: String, body: String },
}

impl Error {
    /// Returns true for failures of the HTTP exchange itself.
    ///
    /// A rejected login is not necessarily one of them: Space-Track answers
    /// bad credentials with status 200 and a `{"Login":"Failed"}` object,
    /// which surfaces as [`Error::Decode`] carrying that body. Callers that
    /// need to detect bad credentials should inspect `body` on both
    /// `HttpStatus` and `Decode`.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::RequestFailed(_) | Error::HttpStatus { .. })
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

/// Caps a response body for logs and error payloads.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...[truncated]", &body[..cut]),
        None => body.to_string(),
    }
}
