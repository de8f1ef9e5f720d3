//! HTTP transport seam.
//!
//! The orchestrator only needs "POST this, hand me status and body", so
//! that is the whole trait. [`ReqwestTransport`] is the production path;
//! tests substitute recording or canned implementations.

use async_trait::async_trait;
use reqwest::StatusCode;

use subglot_core::TranslateError;

use crate::encode::EncodedRequest;

/// What came back from the wire, before any JSON interpretation.
#[derive(Clone, Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Minimal async HTTP client interface: one POST, one response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Deliver the encoded request. Failures that never produce a
    /// response (connect errors, timeouts) map to
    /// [`TranslateError::Transport`]; non-2xx statuses are not errors at
    /// this layer.
    async fn post(&self, request: EncodedRequest) -> Result<RawResponse, TranslateError>;
}

/// Production transport backed by a shared, connection-pooled
/// `reqwest::Client`.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(&self, request: EncodedRequest) -> Result<RawResponse, TranslateError> {
        let response = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .json(&request.body)
            .send()
            .await
            .map_err(|e| TranslateError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::Transport(e.to_string()))?;

        Ok(RawResponse { status, body })
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
