//! Per-call model selection: the resolved endpoint/model/key bundle that
//! drives exactly one translation request.

use serde::{Deserialize, Serialize};

use crate::error::TranslateError;
use crate::types::Dialect;

/// Fully-resolved configuration for one translation call.
///
/// Built fresh per call, either from a registry profile plus the user's
/// key or free-form for custom backends. The pipeline treats it as
/// immutable input and never stores it; persistence belongs to the
/// embedding application, which is why the serde names are camelCase.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ModelSelection {
    /// Wire dialect used for both encoding and decoding.
    pub dialect: Dialect,
    /// Complete endpoint URL, including any path and query string.
    pub endpoint: String,
    /// Model id for the request body; may stay empty for dialects that
    /// carry the model in the URL.
    #[serde(default)]
    pub model_id: String,
    /// API key, passed through verbatim into the auth header.
    pub api_key: String,
}

impl ModelSelection {
    /// Build a free-form selection for a custom backend.
    pub fn custom(
        dialect: Dialect,
        endpoint: impl Into<String>,
        model_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        ModelSelection {
            dialect,
            endpoint: endpoint.into(),
            model_id: model_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Whether every field the dialect needs is present.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check completeness. The orchestrator calls this before any network
    /// traffic, so an unconfigured selection never produces a request.
    pub fn validate(&self) -> Result<(), TranslateError> {
        if self.endpoint.trim().is_empty() {
            return Err(TranslateError::Config("no endpoint configured".to_string()));
        }
        if self.api_key.trim().is_empty() {
            return Err(TranslateError::Config("no API key configured".to_string()));
        }
        if self.dialect.requires_model_id() && self.model_id.trim().is_empty() {
            return Err(TranslateError::Config(format!(
                "dialect {} requires a model id",
                self.dialect
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn openai_selection() -> ModelSelection {
        ModelSelection::custom(
            Dialect::OpenAiChat,
            "https://api.openai.com/v1/chat/completions",
            "gpt-4-turbo",
            "sk-test",
        )
    }

    #[test]
    fn test_complete_selection_validates() {
        assert!(openai_selection().validate().is_ok());
        assert!(openai_selection().is_complete());
    }

    #[test]
    fn test_missing_endpoint_is_config_error() {
        let mut selection = openai_selection();
        selection.endpoint = "  ".to_string();

        match selection.validate() {
            Err(TranslateError::Config(msg)) => assert!(msg.contains("endpoint")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_api_key_is_config_error() {
        let mut selection = openai_selection();
        selection.api_key = String::new();

        match selection.validate() {
            Err(TranslateError::Config(msg)) => assert!(msg.contains("API key")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_model_id_is_config_error_when_required() {
        let mut selection = openai_selection();
        selection.model_id = String::new();

        match selection.validate() {
            Err(TranslateError::Config(msg)) => assert!(msg.contains("model id")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_url_addressed_dialects_validate_without_model_id() {
        let azure = ModelSelection::custom(
            Dialect::AzureOpenAi,
            "https://my-resource.openai.azure.com/openai/deployments/gpt4/chat/completions?api-version=2023-05-15",
            "",
            "azure-key",
        );
        let gemini = ModelSelection::custom(
            Dialect::Gemini,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent",
            "",
            "gemini-key",
        );

        assert!(azure.validate().is_ok());
        assert!(gemini.validate().is_ok());
    }

    #[test]
    fn test_selection_serializes_camel_case() {
        let json = serde_json::to_value(openai_selection()).unwrap();

        assert_eq!(json["dialect"], "openai-chat");
        assert_eq!(json["modelId"], "gpt-4-turbo");
        assert_eq!(json["apiKey"], "sk-test");
        assert!(json.get("model_id").is_none());
    }

    #[test]
    fn test_selection_round_trip() {
        let selection = openai_selection();
        let json_str = serde_json::to_string(&selection).unwrap();
        let back: ModelSelection = serde_json::from_str(&json_str).unwrap();

        assert_eq!(back, selection);
    }
}
