//! Provider profile registry: the static catalog of selectable
//! translation backends.
//!
//! Each profile pairs a display name with the three facts dispatch
//! needs: wire dialect, default endpoint and default model id. All
//! dialect-specific behavior downstream is keyed by [`Dialect`] alone;
//! display names exist for menus and key hints, and the pipeline never
//! inspects them.

use subglot_core::{Dialect, ModelSelection};

// ─────────────────────────────────────────────
// ProviderProfile
// ─────────────────────────────────────────────

/// Static description of one selectable translation backend.
#[derive(Clone, Debug)]
pub struct ProviderProfile {
    /// Stable id used for lookup (e.g. `"deepseek-chat"`).
    pub name: &'static str,
    /// Human-readable name for menus and logs.
    pub display_name: &'static str,
    /// Wire dialect this backend speaks.
    pub dialect: Dialect,
    /// Default endpoint URL; empty for the custom profile.
    pub default_endpoint: &'static str,
    /// Default model id; empty where the caller must supply one.
    pub default_model: &'static str,
    /// Vendor console where an API key can be created. Empty when there
    /// is no single obvious place to point at.
    pub console_url: &'static str,
}

impl ProviderProfile {
    /// Resolve this profile into a per-call selection with the given key.
    ///
    /// For the custom profile the result still needs an endpoint (and
    /// usually a model id) before it validates.
    pub fn selection(&self, api_key: impl Into<String>) -> ModelSelection {
        ModelSelection {
            dialect: self.dialect,
            endpoint: self.default_endpoint.to_string(),
            model_id: self.default_model.to_string(),
            api_key: api_key.into(),
        }
    }
}

// ─────────────────────────────────────────────
// Built-in profiles (in menu order)
// ─────────────────────────────────────────────

/// Complete list of built-in profiles, in menu order.
pub static PROFILES: &[ProviderProfile] = &[
    // 1. OpenAI GPT-4
    ProviderProfile {
        name: "openai-gpt-4",
        display_name: "OpenAI - GPT-4",
        dialect: Dialect::OpenAiChat,
        default_endpoint: "https://api.openai.com/v1/chat/completions",
        default_model: "gpt-4-turbo",
        console_url: "https://platform.openai.com",
    },
    // 2. OpenAI GPT-3.5 Turbo
    ProviderProfile {
        name: "openai-gpt-3.5-turbo",
        display_name: "OpenAI - GPT-3.5 Turbo",
        dialect: Dialect::OpenAiChat,
        default_endpoint: "https://api.openai.com/v1/chat/completions",
        default_model: "gpt-3.5-turbo",
        console_url: "https://platform.openai.com",
    },
    // 3. Claude 3 Opus
    ProviderProfile {
        name: "anthropic-claude-3-opus",
        display_name: "Anthropic - Claude 3 Opus",
        dialect: Dialect::AnthropicMessages,
        default_endpoint: "https://api.anthropic.com/v1/messages",
        default_model: "claude-3-opus-20240229",
        console_url: "https://console.anthropic.com",
    },
    // 4. Claude 3 Sonnet
    ProviderProfile {
        name: "anthropic-claude-3-sonnet",
        display_name: "Anthropic - Claude 3 Sonnet",
        dialect: Dialect::AnthropicMessages,
        default_endpoint: "https://api.anthropic.com/v1/messages",
        default_model: "claude-3-sonnet-20240229",
        console_url: "https://console.anthropic.com",
    },
    // 5. Claude 3 Haiku
    ProviderProfile {
        name: "anthropic-claude-3-haiku",
        display_name: "Anthropic - Claude 3 Haiku",
        dialect: Dialect::AnthropicMessages,
        default_endpoint: "https://api.anthropic.com/v1/messages",
        default_model: "claude-3-haiku-20240307",
        console_url: "https://console.anthropic.com",
    },
    // 6. Zhipu GLM-4
    ProviderProfile {
        name: "zhipu-glm-4",
        display_name: "Zhipu - GLM-4",
        dialect: Dialect::Zhipu,
        default_endpoint: "https://open.bigmodel.cn/api/paas/v4/chat/completions",
        default_model: "glm-4",
        console_url: "https://open.bigmodel.cn",
    },
    // 7. Deepseek Chat
    ProviderProfile {
        name: "deepseek-chat",
        display_name: "Deepseek - Deepseek-Chat",
        dialect: Dialect::Deepseek,
        default_endpoint: "https://api.deepseek.com/v1/chat/completions",
        default_model: "deepseek-chat",
        console_url: "https://platform.deepseek.com",
    },
    // 8. Deepseek Reasoner
    ProviderProfile {
        name: "deepseek-reasoner",
        display_name: "Deepseek - Deepseek-Reasoner",
        dialect: Dialect::Deepseek,
        default_endpoint: "https://api.deepseek.com/v1/chat/completions",
        default_model: "deepseek-reasoner",
        console_url: "https://platform.deepseek.com",
    },
    // 9. Qwen Max
    ProviderProfile {
        name: "qwen-max",
        display_name: "Qwen - Qwen-Max",
        dialect: Dialect::Qwen,
        default_endpoint: "https://dashscope.aliyuncs.com/api/v1/services/aigc/text-generation/generation",
        default_model: "qwen-max",
        console_url: "https://dashscope.aliyun.com",
    },
    // 10. Custom backend, everything supplied by the caller
    ProviderProfile {
        name: "custom",
        display_name: "自定义模型",
        dialect: Dialect::Other,
        default_endpoint: "",
        default_model: "",
        console_url: "",
    },
];

// ─────────────────────────────────────────────
// Lookup functions
// ─────────────────────────────────────────────

/// Find a built-in profile by its stable id.
pub fn find_profile(name: &str) -> Option<&'static ProviderProfile> {
    PROFILES.iter().find(|p| p.name == name)
}

/// Suggested endpoint for a dialect, used to prefill custom selections.
///
/// `other` has no sensible suggestion; the Azure entry is a template the
/// user fills in with resource and deployment names.
pub fn default_endpoint_for(dialect: Dialect) -> Option<&'static str> {
    match dialect {
        Dialect::OpenAiChat => Some("https://api.openai.com/v1/chat/completions"),
        Dialect::AnthropicMessages => Some("https://api.anthropic.com/v1/messages"),
        Dialect::AzureOpenAi => Some(
            "https://{your-resource-name}.openai.azure.com/openai/deployments/{deployment-id}/chat/completions?api-version=2023-05-15",
        ),
        Dialect::Gemini => Some(
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent",
        ),
        Dialect::Zhipu => Some("https://open.bigmodel.cn/api/paas/v4/chat/completions"),
        Dialect::Deepseek => Some("https://api.deepseek.com/v1/chat/completions"),
        Dialect::Qwen => {
            Some("https://dashscope.aliyuncs.com/api/v1/services/aigc/text-generation/generation")
        }
        Dialect::Other => None,
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
