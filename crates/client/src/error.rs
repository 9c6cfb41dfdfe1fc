//! Client-side error taxonomy.

/// Errors surfaced to the UI layer by the session and HTTP backend.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Input rejected locally before any network call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing, invalid, or expired credential. The session must force
    /// re-authentication; there is no silent refresh.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Network-level failure (connect error, timeout). Transient; never
    /// retried automatically.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("Server error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}
