//! Core wire types for Subglot: the dialect tag plus the per-dialect
//! request body shapes.
//!
//! Chat-completion APIs disagree on body layout. Most speak the OpenAI
//! `messages` shape, Gemini nests parts under `contents`, and DashScope
//! wraps everything in `input`/`parameters`. Each layout gets a typed
//! `Serialize` struct here so a malformed request is a compile error,
//! not a provider-side 400.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Dialect
// ─────────────────────────────────────────────

/// Wire-format dialect of a chat completion API.
///
/// This is the single dispatch key for request encoding and response
/// decoding. It is deliberately decoupled from provider display names:
/// two providers with the same dialect behave identically on the wire,
/// and nothing downstream ever inspects a name string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dialect {
    /// OpenAI `/chat/completions` and lookalikes.
    #[serde(rename = "openai-chat")]
    OpenAiChat,
    /// Anthropic `/v1/messages`.
    #[serde(rename = "anthropic-messages")]
    AnthropicMessages,
    /// Azure-hosted OpenAI deployments; the model rides in the URL.
    #[serde(rename = "azure-openai")]
    AzureOpenAi,
    /// Google Gemini `generateContent`; the model rides in the URL.
    #[serde(rename = "gemini")]
    Gemini,
    /// Zhipu GLM, OpenAI-shaped body.
    #[serde(rename = "zhipu")]
    Zhipu,
    /// Deepseek, OpenAI-shaped body.
    #[serde(rename = "deepseek")]
    Deepseek,
    /// DashScope Qwen text generation.
    #[serde(rename = "qwen")]
    Qwen,
    /// Unknown backends: OpenAI-shaped requests, probe-based decoding.
    #[serde(rename = "other")]
    Other,
}

impl Dialect {
    /// The complete, closed set of dialects.
    pub const ALL: [Dialect; 8] = [
        Dialect::OpenAiChat,
        Dialect::AnthropicMessages,
        Dialect::AzureOpenAi,
        Dialect::Gemini,
        Dialect::Zhipu,
        Dialect::Deepseek,
        Dialect::Qwen,
        Dialect::Other,
    ];

    /// Stable string id, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::OpenAiChat => "openai-chat",
            Dialect::AnthropicMessages => "anthropic-messages",
            Dialect::AzureOpenAi => "azure-openai",
            Dialect::Gemini => "gemini",
            Dialect::Zhipu => "zhipu",
            Dialect::Deepseek => "deepseek",
            Dialect::Qwen => "qwen",
            Dialect::Other => "other",
        }
    }

    /// Whether a selection for this dialect must carry a model id.
    ///
    /// Azure deployments and Gemini endpoints already name the model in
    /// the URL path, so their request bodies go out without one.
    pub fn requires_model_id(&self) -> bool {
        !matches!(self, Dialect::AzureOpenAi | Dialect::Gemini)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────

/// A chat message in the ubiquitous `{role, content}` layout.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    /// Create a user message, the only role the translation flow sends.
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

// ─────────────────────────────────────────────
// Request bodies (per dialect family)
// ─────────────────────────────────────────────

/// Request body for OpenAI-shaped chat APIs: `openai-chat`,
/// `anthropic-messages`, `azure-openai`, `zhipu`, `deepseek` and the
/// generic fallback.
///
/// `model` stays `None` for Azure deployments, where the deployment id
/// is part of the endpoint URL and an in-body model is rejected.
#[derive(Clone, Debug, Serialize)]
pub struct ChatCompletionsBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
}

/// Request body for Gemini `generateContent`.
#[derive(Clone, Debug, Serialize)]
pub struct GeminiBody {
    pub contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GeminiGenerationConfig,
}

/// One turn in a Gemini conversation.
#[derive(Clone, Debug, Serialize)]
pub struct GeminiContent {
    pub role: String,
    pub parts: Vec<GeminiPart>,
}

impl GeminiContent {
    /// Create a single-part user turn.
    pub fn user(text: impl Into<String>) -> Self {
        GeminiContent {
            role: "user".to_string(),
            parts: vec![GeminiPart { text: text.into() }],
        }
    }
}

/// A text part of a Gemini content turn.
#[derive(Clone, Debug, Serialize)]
pub struct GeminiPart {
    pub text: String,
}

/// Sampling settings in Gemini's camelCase envelope.
#[derive(Clone, Debug, Serialize)]
pub struct GeminiGenerationConfig {
    pub temperature: f64,
}

/// Request body for DashScope's Qwen text-generation endpoint, which
/// nests messages under `input` and sampling under `parameters`.
#[derive(Clone, Debug, Serialize)]
pub struct QwenBody {
    pub model: String,
    pub input: QwenInput,
    pub parameters: QwenParameters,
}

/// The `input` envelope of a DashScope request.
#[derive(Clone, Debug, Serialize)]
pub struct QwenInput {
    pub messages: Vec<ChatMessage>,
}

/// The `parameters` envelope of a DashScope request.
#[derive(Clone, Debug, Serialize)]
pub struct QwenParameters {
    pub temperature: f64,
}

// ─────────────────────────────────────────────
// Translation result
// ─────────────────────────────────────────────

/// Which extraction stage produced the translated text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextOrigin {
    /// The dialect's canonical extraction path.
    Primary,
    /// One of the ordered fallback probes.
    Fallback,
    /// No probe matched; the text is the serialized response body.
    RawDump,
}

/// A successful translation handed back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct Translation {
    /// The extracted text, or the serialized response when `origin` is
    /// [`TextOrigin::RawDump`].
    pub text: String,
    /// Which extraction stage produced `text`.
    pub origin: TextOrigin,
}

impl Translation {
    /// Create a translation result.
    pub fn new(text: impl Into<String>, origin: TextOrigin) -> Self {
        Translation {
            text: text.into(),
            origin,
        }
    }

    /// Whether the decoder fell through to dumping the raw response.
    pub fn is_raw_dump(&self) -> bool {
        self.origin == TextOrigin::RawDump
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
