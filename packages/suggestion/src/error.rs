//! Typed errors for the suggestion pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to give callers a
//! strongly-typed taxonomy they can map onto their own responses.

use thiserror::Error;

/// Errors that can occur while producing a suggestion.
///
/// All four provider/payload kinds are terminal for the request; the
/// pipeline never retries internally. Note that a reply with no locatable
/// structured payload is NOT an error (see [`crate::extract`]) - only a
/// payload that was located but failed to decode is.
#[derive(Debug, Error)]
pub enum SuggestionError {
    /// Transport failure reaching the provider, or a non-success HTTP
    /// status. Retryable from the caller's point of view.
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The provider's own envelope carried an error object instead of
    /// generated content.
    #[error("provider rejected request: {message}")]
    ProviderRejected { message: String },

    /// The provider answered successfully but returned no text fragment.
    #[error("provider returned an empty completion")]
    EmptyCompletion,

    /// A structured payload was located in the reply but failed strict
    /// JSON decoding. Distinct from the no-payload fallback, which
    /// degrades gracefully instead of failing.
    #[error("malformed payload in provider reply: {0}")]
    MalformedPayload(#[source] serde_json::Error),

    /// The caller abandoned the request while the provider call was in
    /// flight.
    #[error("suggestion cancelled")]
    Cancelled,

    /// Construction-time failure (missing API key, unreadable catalog
    /// data).
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for suggestion operations.
pub type Result<T> = std::result::Result<T, SuggestionError>;
