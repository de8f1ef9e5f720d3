//! Error taxonomy for the translation pipeline.
//!
//! Every failure a caller can observe is one of these variants; nothing
//! panics past the orchestrator boundary and nothing is retried. The
//! classification order mirrors the pipeline: configuration before any
//! network traffic, transport before status, status before parsing,
//! parsing before extraction.

use thiserror::Error;

/// Classified failure from a translation call.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The selection or input is incomplete; caught before any network
    /// call is made.
    #[error("configuration error: {0}")]
    Config(String),

    /// The provider answered with a non-success status. `message` is the
    /// provider's own `error.message` when present, otherwise the HTTP
    /// status line text.
    #[error("provider returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    MalformedResponse(String),

    /// Strict decoding was requested and no extraction path yielded text.
    /// The serialized response rides along so the payload is never lost.
    #[error("no recognizable text in response: {0}")]
    Decode(String),

    /// The request never produced a response (connect failure, timeout).
    #[error("request failed: {0}")]
    Transport(String),
}
