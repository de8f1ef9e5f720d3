//! Response decoding: find the translated text inside whatever JSON the
//! provider answered with.
//!
//! Extraction runs in three stages. First the dialect's canonical path,
//! then an ordered list of fallback probes shared by every dialect, and
//! as a last resort a dump of the whole serialized response. The dump
//! means a response in an unrecognized shape still reaches the user for
//! manual inspection instead of vanishing into an error.

use serde_json::Value;

use subglot_core::types::{Dialect, TextOrigin, Translation};

/// Canonical extraction path per dialect, as a JSON pointer.
///
/// `other` has no canonical shape and starts straight at the probes.
fn primary_path(dialect: Dialect) -> Option<&'static str> {
    match dialect {
        Dialect::OpenAiChat | Dialect::AzureOpenAi | Dialect::Zhipu | Dialect::Deepseek => {
            Some("/choices/0/message/content")
        }
        Dialect::AnthropicMessages => Some("/content/0/text"),
        Dialect::Gemini => Some("/candidates/0/content/parts/0/text"),
        Dialect::Qwen => Some("/output/text"),
        Dialect::Other => None,
    }
}

/// Fallback probes, tried in order after the canonical path misses.
/// The order is part of the contract: the first non-empty string wins.
const FALLBACK_PATHS: &[&str] = &[
    "/choices/0/message/content",
    "/content/0/text",
    "/response",
    "/output/text",
    "/generated_text",
    "/candidates/0/content/parts/0/text",
];

/// A probe hits only on a non-empty string. Objects, arrays, numbers,
/// nulls and empty strings all fall through to the next probe.
fn probe(raw: &Value, pointer: &str) -> Option<String> {
    raw.pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Extract the translated text from a parsed response.
///
/// This never fails. When no path matches, the whole response comes back
/// serialized with [`TextOrigin::RawDump`] recorded, so callers can tell
/// a real translation from a dumped payload.
pub fn decode(dialect: Dialect, raw: &Value) -> Translation {
    if let Some(text) = primary_path(dialect).and_then(|path| probe(raw, path)) {
        return Translation::new(text, TextOrigin::Primary);
    }

    for path in FALLBACK_PATHS {
        if let Some(text) = probe(raw, path) {
            return Translation::new(text, TextOrigin::Fallback);
        }
    }

    Translation::new(raw.to_string(), TextOrigin::RawDump)
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Canonical paths ──

    #[test]
    fn test_decode_openai_shape() {
        let raw = json!({"choices": [{"message": {"content": "你好"}}]});
        let t = decode(Dialect::OpenAiChat, &raw);

        assert_eq!(t.text, "你好");
        assert_eq!(t.origin, TextOrigin::Primary);
    }

    #[test]
    fn test_decode_openai_lookalikes_share_the_path() {
        let raw = json!({"choices": [{"message": {"content": "译文"}}]});

        for dialect in [Dialect::AzureOpenAi, Dialect::Zhipu, Dialect::Deepseek] {
            let t = decode(dialect, &raw);
            assert_eq!(t.text, "译文", "wrong text for {dialect}");
            assert_eq!(t.origin, TextOrigin::Primary);
        }
    }

    #[test]
    fn test_decode_anthropic_shape() {
        let raw = json!({"content": [{"type": "text", "text": "你好"}]});
        let t = decode(Dialect::AnthropicMessages, &raw);

        assert_eq!(t.text, "你好");
        assert_eq!(t.origin, TextOrigin::Primary);
    }

    #[test]
    fn test_decode_gemini_shape() {
        let raw = json!({
            "candidates": [{"content": {"parts": [{"text": "你好"}], "role": "model"}}]
        });
        let t = decode(Dialect::Gemini, &raw);

        assert_eq!(t.text, "你好");
        assert_eq!(t.origin, TextOrigin::Primary);
    }

    #[test]
    fn test_decode_qwen_shape() {
        let raw = json!({"output": {"text": "你好"}, "request_id": "r-1"});
        let t = decode(Dialect::Qwen, &raw);

        assert_eq!(t.text, "你好");
        assert_eq!(t.origin, TextOrigin::Primary);
    }

    // ── Fallback probes ──

    #[test]
    fn test_unknown_dialect_probes_for_text() {
        let raw = json!({"response": "probed"});
        let t = decode(Dialect::Other, &raw);

        assert_eq!(t.text, "probed");
        assert_eq!(t.origin, TextOrigin::Fallback);
    }

    #[test]
    fn test_known_dialect_falls_back_when_canonical_path_misses() {
        // A Qwen selection pointed at an OpenAI-shaped proxy still decodes.
        let raw = json!({"choices": [{"message": {"content": "译文"}}]});
        let t = decode(Dialect::Qwen, &raw);

        assert_eq!(t.text, "译文");
        assert_eq!(t.origin, TextOrigin::Fallback);
    }

    #[test]
    fn test_probe_order_choices_wins_over_response() {
        let raw = json!({
            "choices": [{"message": {"content": "first"}}],
            "response": "second"
        });
        let t = decode(Dialect::Other, &raw);

        assert_eq!(t.text, "first");
    }

    #[test]
    fn test_probe_order_response_wins_over_generated_text() {
        let raw = json!({
            "generated_text": "later",
            "response": "earlier"
        });
        let t = decode(Dialect::Other, &raw);

        assert_eq!(t.text, "earlier");
    }

    #[test]
    fn test_probe_skips_empty_strings() {
        let raw = json!({"response": "", "generated_text": "real"});
        let t = decode(Dialect::Other, &raw);

        assert_eq!(t.text, "real");
        assert_eq!(t.origin, TextOrigin::Fallback);
    }

    #[test]
    fn test_probe_skips_non_string_values() {
        let raw = json!({
            "response": {"nested": "object"},
            "output": {"text": 42},
            "generated_text": "real"
        });
        let t = decode(Dialect::Other, &raw);

        assert_eq!(t.text, "real");
    }

    #[test]
    fn test_null_content_does_not_count_as_text() {
        let raw = json!({"choices": [{"message": {"content": null}}]});
        let t = decode(Dialect::OpenAiChat, &raw);

        assert_eq!(t.origin, TextOrigin::RawDump);
    }

    // ── Raw dump ──

    #[test]
    fn test_unrecognized_shape_dumps_raw_response() {
        let raw = json!({"usage": {"tokens": 7}, "status": "done"});
        let t = decode(Dialect::Other, &raw);

        assert_eq!(t.origin, TextOrigin::RawDump);
        assert!(t.is_raw_dump());
        assert!(!t.text.is_empty());

        // The dump is the full payload, reparseable.
        let back: Value = serde_json::from_str(&t.text).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_decode_never_returns_empty_text() {
        for raw in [json!(null), json!({}), json!([]), json!("")] {
            let t = decode(Dialect::Other, &raw);
            assert!(!t.text.is_empty(), "empty text for {raw}");
        }
    }
}
