//! Structured response extraction — cascade repair of raw agent replies.
//!
//! Model output is not guaranteed well-formed: it may be wrapped in prose,
//! fenced code blocks, or truncated mid-object by the generation limit. The
//! cascade is an ordered list of pure attempts, tried in sequence and
//! short-circuiting on the first success. Every stage only narrows the
//! candidate substring — no stage edits content or fabricates fields, and
//! extraction either fully succeeds or fails with `ExtractionError`.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::ExtractionError;

/// A validated key/value document recovered from an agent reply.
pub type ExtractedDocument = Map<String, Value>;

/// A raw reply from the remote agent: either plain text or an envelope
/// object that may carry the actual text under a `response` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAgentResponse {
    Envelope(Map<String, Value>),
    Text(String),
}

impl RawAgentResponse {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }
}

/// Extract a document from a raw agent response.
///
/// - An envelope without a string `response` field *is* the document.
/// - An envelope with one is unwrapped and its text run through the cascade.
/// - Plain text runs through the cascade directly.
pub fn extract(response: &RawAgentResponse) -> Result<ExtractedDocument, ExtractionError> {
    match response {
        RawAgentResponse::Envelope(map) => match map.get("response") {
            Some(Value::String(inner)) => extract_from_text(inner),
            _ => {
                debug!("agent response is already a document, returning as-is");
                Ok(map.clone())
            }
        },
        RawAgentResponse::Text(text) => extract_from_text(text),
    }
}

/// Run the text cascade: direct parse, fenced block, widest braces,
/// truncation at the last closing brace.
pub fn extract_from_text(text: &str) -> Result<ExtractedDocument, ExtractionError> {
    const STAGES: &[(&str, fn(&str) -> Option<ExtractedDocument>)] = &[
        ("direct", direct_parse),
        ("fenced_block", fenced_block),
        ("widest_braces", widest_braces),
        ("truncate_last_brace", truncate_last_brace),
    ];

    for (name, stage) in STAGES {
        if let Some(document) = stage(text) {
            debug!(stage = name, keys = document.len(), "extraction succeeded");
            return Ok(document);
        }
        debug!(stage = name, "extraction stage failed, falling through");
    }

    warn!(bytes = text.len(), "no extraction stage recovered a document");
    Err(ExtractionError::NoDocument {
        raw: text.to_string(),
    })
}

/// Parse a candidate substring as a JSON object. Arrays and scalars are
/// not documents and fail the stage.
fn parse_document(candidate: &str) -> Option<ExtractedDocument> {
    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

fn direct_parse(text: &str) -> Option<ExtractedDocument> {
    parse_document(text.trim())
}

/// Contents of a markdown code fence, preferring an explicit ```json fence.
fn fenced_block(text: &str) -> Option<ExtractedDocument> {
    let trimmed = text.trim();

    if let Some(start) = trimmed.find("```json") {
        let after = &trimmed[start + 7..];
        if let Some(end) = after.find("```") {
            return parse_document(after[..end].trim());
        }
    }

    if let Some(start) = trimmed.find("```") {
        let after = &trimmed[start + 3..];
        if let Some(end) = after.find("```") {
            let inner = after[..end].trim();
            if inner.starts_with('{') {
                return parse_document(inner);
            }
        }
    }

    None
}

/// The widest brace-delimited substring: first `{` to last `}`.
fn widest_braces(text: &str) -> Option<ExtractedDocument> {
    let trimmed = text.trim();
    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end > start {
        parse_document(&trimmed[start..=end])
    } else {
        None
    }
}

/// The text truncated at the last `}` seen, dropping dangling trailing
/// content after the final matched brace.
fn truncate_last_brace(text: &str) -> Option<ExtractedDocument> {
    let trimmed = text.trim();
    let end = trimmed.rfind('}')?;
    parse_document(&trimmed[..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(json: &str) -> ExtractedDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn well_formed_text_equals_direct_parse() {
        let raw = r#"{"difficulty": 3, "focus": "Legs"}"#;
        let extracted = extract(&RawAgentResponse::text(raw)).unwrap();
        assert_eq!(extracted, doc(raw));
    }

    #[test]
    fn prose_wrapped_object_recovers_inner_document() {
        let raw = "Here is your plan:\n{\"focus\": \"Core\", \"difficulty\": 2}\nEnjoy!";
        let extracted = extract(&RawAgentResponse::text(raw)).unwrap();
        assert_eq!(extracted, doc(r#"{"focus": "Core", "difficulty": 2}"#));
    }

    #[test]
    fn markdown_fence_recovers_document() {
        let raw = "```json\n{\"focus\": \"Push\"}\n```";
        let extracted = extract(&RawAgentResponse::text(raw)).unwrap();
        assert_eq!(extracted, doc(r#"{"focus": "Push"}"#));
    }

    #[test]
    fn trailing_garbage_after_last_brace_is_dropped() {
        let raw = "{\"focus\": \"Pull\"} and that's all you need for today";
        let extracted = extract(&RawAgentResponse::text(raw)).unwrap();
        assert_eq!(extracted, doc(r#"{"focus": "Pull"}"#));
    }

    #[test]
    fn non_json_text_fails_with_raw_preserved() {
        let raw = "Sorry, I can't generate a plan right now.";
        let err = extract(&RawAgentResponse::text(raw)).unwrap_err();
        assert_eq!(err.raw(), raw);
    }

    #[test]
    fn json_array_is_not_a_document() {
        let raw = r#"[{"focus": "Legs"}]"#;
        assert!(extract(&RawAgentResponse::text(raw)).is_err());
    }

    #[test]
    fn envelope_without_response_field_is_the_document() {
        let envelope: Map<String, Value> =
            serde_json::from_str(r#"{"focus": "Legs", "difficulty": 4}"#).unwrap();
        let extracted = extract(&RawAgentResponse::Envelope(envelope.clone())).unwrap();
        assert_eq!(extracted, envelope);
    }

    #[test]
    fn envelope_with_response_text_unwraps_and_cascades() {
        let envelope: Map<String, Value> = serde_json::from_str(
            r#"{"response": "Sure! {\"focus\": \"Full Body\"} hope that helps"}"#,
        )
        .unwrap();
        let extracted = extract(&RawAgentResponse::Envelope(envelope)).unwrap();
        assert_eq!(extracted, doc(r#"{"focus": "Full Body"}"#));
    }

    #[test]
    fn envelope_with_unparseable_response_text_fails() {
        let envelope: Map<String, Value> =
            serde_json::from_str(r#"{"response": "no structure here"}"#).unwrap();
        let err = extract(&RawAgentResponse::Envelope(envelope)).unwrap_err();
        assert_eq!(err.raw(), "no structure here");
    }

    #[test]
    fn truncated_mid_object_is_not_repaired() {
        // The cascade only narrows, it never closes braces for the model.
        let raw = r#"{"workouts": [{"name": "A"}], "note": "unfinis"#;
        assert!(extract(&RawAgentResponse::text(raw)).is_err());
    }

    #[test]
    fn untagged_deserialization_picks_envelope_for_objects() {
        let response: RawAgentResponse =
            serde_json::from_str(r#"{"focus": "Legs"}"#).unwrap();
        assert!(matches!(response, RawAgentResponse::Envelope(_)));

        let response: RawAgentResponse = serde_json::from_str(r#""plain text""#).unwrap();
        assert!(matches!(response, RawAgentResponse::Text(_)));
    }
}
