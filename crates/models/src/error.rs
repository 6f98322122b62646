use thiserror::Error;

/// Failure modes for remote model discovery.
///
/// Only the resolver decides whether a failure is masked behind the static
/// catalog; the fetcher always reports the typed failure to its caller.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint rejected the credential (HTTP 401/403). Retrying with
    /// the same key will not help; the UI should surface this one.
    #[error("credential rejected (HTTP {status})")]
    Auth { status: u16 },

    /// The endpoint could not be reached: connect/DNS failure, timeout, or
    /// a non-auth HTTP error status.
    #[error("endpoint unreachable: {message}")]
    Endpoint { message: String },

    /// The response did not match the OpenAI models-list shape
    /// (`{"data": [{"id": "..."}]}`). May indicate API contract drift.
    #[error("unexpected models response: {message}")]
    Parse { message: String },
}

impl FetchError {
    pub(crate) fn endpoint(message: impl Into<String>) -> Self {
        Self::Endpoint {
            message: message.into(),
        }
    }

    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Whether this failure means the credential itself is bad.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
