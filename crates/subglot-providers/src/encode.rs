//! Request encoding: one dialect in, one ready-to-send POST out.
//!
//! The encoder is pure. It assembles the full URL/header/body triple and
//! performs no I/O, so every dialect's wire format can be tested without
//! a server. Unknown dialects never fail here: `other` gets the
//! OpenAI-compatible shape and decoding degrades gracefully instead.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::Value;

use subglot_core::types::{
    ChatCompletionsBody, ChatMessage, Dialect, GeminiBody, GeminiContent, GeminiGenerationConfig,
    QwenBody, QwenInput, QwenParameters,
};
use subglot_core::{ModelSelection, TranslateError};

/// Sampling temperature for every translation request. Low randomness
/// keeps line counts stable across retellings; not user-configurable.
pub const TEMPERATURE: f64 = 0.3;

/// Version header Anthropic requires alongside the key.
const ANTHROPIC_VERSION: &str = "2023-06-01";

// ─────────────────────────────────────────────
// EncodedRequest
// ─────────────────────────────────────────────

/// A fully-assembled request, consumed exactly once by the transport.
/// Always delivered as a POST.
#[derive(Clone, Debug)]
pub struct EncodedRequest {
    /// Target URL, taken verbatim from the selection's endpoint.
    pub url: String,
    /// Auth and content-type headers for the dialect.
    pub headers: HeaderMap,
    /// JSON body in the dialect's layout.
    pub body: Value,
}

// ─────────────────────────────────────────────
// Encoding
// ─────────────────────────────────────────────

/// Build the wire request for one translation call.
///
/// The selection is read, never modified; the same selection and prompt
/// always produce the same request.
pub fn encode(selection: &ModelSelection, prompt: &str) -> Result<EncodedRequest, TranslateError> {
    let headers = build_headers(selection)?;
    let body = build_body(selection, prompt)?;

    Ok(EncodedRequest {
        url: selection.endpoint.clone(),
        headers,
        body,
    })
}

/// Auth headers per dialect. Anthropic wants `x-api-key` plus a version
/// header, Azure wants `api-key`, everyone else takes a Bearer token.
fn build_headers(selection: &ModelSelection) -> Result<HeaderMap, TranslateError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    match selection.dialect {
        Dialect::AnthropicMessages => {
            headers.insert("x-api-key", header_value(&selection.api_key)?);
            headers.insert(
                "anthropic-version",
                HeaderValue::from_static(ANTHROPIC_VERSION),
            );
        }
        Dialect::AzureOpenAi => {
            headers.insert("api-key", header_value(&selection.api_key)?);
        }
        _ => {
            headers.insert(
                AUTHORIZATION,
                header_value(&format!("Bearer {}", selection.api_key))?,
            );
        }
    }

    Ok(headers)
}

/// An API key only ever travels as a header value, so it has to be
/// header-safe. Rejecting it here keeps the failure on the config side
/// instead of a cryptic transport error.
fn header_value(raw: &str) -> Result<HeaderValue, TranslateError> {
    HeaderValue::from_str(raw).map_err(|_| {
        TranslateError::Config("API key contains characters not allowed in a header".to_string())
    })
}

/// Body per dialect family. Gemini and DashScope have their own
/// envelopes; Azure omits the in-body model; the rest share the OpenAI
/// `messages` shape.
fn build_body(selection: &ModelSelection, prompt: &str) -> Result<Value, TranslateError> {
    let body = match selection.dialect {
        Dialect::Gemini => serde_json::to_value(GeminiBody {
            contents: vec![GeminiContent::user(prompt)],
            generation_config: GeminiGenerationConfig {
                temperature: TEMPERATURE,
            },
        }),
        Dialect::Qwen => serde_json::to_value(QwenBody {
            model: selection.model_id.clone(),
            input: QwenInput {
                messages: vec![ChatMessage::user(prompt)],
            },
            parameters: QwenParameters {
                temperature: TEMPERATURE,
            },
        }),
        Dialect::AzureOpenAi => serde_json::to_value(ChatCompletionsBody {
            model: None,
            messages: vec![ChatMessage::user(prompt)],
            temperature: TEMPERATURE,
        }),
        _ => serde_json::to_value(ChatCompletionsBody {
            model: Some(selection.model_id.clone()),
            messages: vec![ChatMessage::user(prompt)],
            temperature: TEMPERATURE,
        }),
    };

    body.map_err(|e| TranslateError::Config(format!("failed to serialize request body: {e}")))
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
