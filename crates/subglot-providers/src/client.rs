//! The translation orchestrator: validate, encode, send, decode. One
//! call, one POST, one classified outcome.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, error, warn};

use subglot_core::types::TextOrigin;
use subglot_core::{prompt, ModelSelection, TranslateError, Translation};

use crate::decode::decode;
use crate::encode::encode;
use crate::transport::{RawResponse, ReqwestTransport, Transport};

// ─────────────────────────────────────────────
// Translator
// ─────────────────────────────────────────────

/// Drives one translation call end to end.
///
/// Holds no per-call state, so a single instance can serve sequential
/// calls; there is no retry, no streaming and no cancellation. The
/// selection is taken per call, which keeps settings changes made
/// between calls from bleeding into a request already built.
pub struct Translator {
    transport: Arc<dyn Transport>,
    strict_decode: bool,
}

impl Translator {
    /// Translator with the production reqwest transport and lenient
    /// decoding: a raw dump counts as a flagged success.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()))
    }

    /// Translator over a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Translator {
            transport,
            strict_decode: false,
        }
    }

    /// Surface raw-dump decoding as [`TranslateError::Decode`] instead of
    /// a flagged success. The dump still rides inside the error.
    pub fn strict_decode(mut self, strict: bool) -> Self {
        self.strict_decode = strict;
        self
    }

    /// Translate `text` against the given selection.
    ///
    /// Exactly one POST per invocation. Configuration problems are
    /// caught before any network traffic happens.
    pub async fn translate(
        &self,
        text: &str,
        selection: &ModelSelection,
    ) -> Result<Translation, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::Config("nothing to translate".to_string()));
        }
        selection.validate()?;

        let request = encode(selection, &prompt::build(text))?;

        debug!(
            dialect = %selection.dialect,
            endpoint = %selection.endpoint,
            model = %selection.model_id,
            "Sending translation request"
        );

        let response = self.transport.post(request).await?;

        if !response.status.is_success() {
            error!(
                dialect = %selection.dialect,
                status = response.status.as_u16(),
                "Provider call failed"
            );
            return Err(classify_http_error(&response));
        }

        let raw: Value = serde_json::from_str(&response.body)
            .map_err(|e| TranslateError::MalformedResponse(e.to_string()))?;

        let translation = decode(selection.dialect, &raw);
        match translation.origin {
            TextOrigin::Primary => {}
            TextOrigin::Fallback => {
                debug!(
                    dialect = %selection.dialect,
                    "Canonical path missed, used fallback probe"
                );
            }
            TextOrigin::RawDump => {
                warn!(
                    dialect = %selection.dialect,
                    "No extraction path matched, returning raw response"
                );
                if self.strict_decode {
                    return Err(TranslateError::Decode(translation.text));
                }
            }
        }

        Ok(translation)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-2xx classification: prefer the provider's own `error.message`,
/// fall back to the HTTP status line text.
fn classify_http_error(response: &RawResponse) -> TranslateError {
    let message = serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| {
            response
                .status
                .canonical_reason()
                .unwrap_or("unknown status")
                .to_string()
        });

    TranslateError::Http {
        status: response.status.as_u16(),
        message,
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
