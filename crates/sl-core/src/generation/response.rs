//! Generation response envelope as returned by the content generation API.
//! 生成 API 返回的响应结构。
//!
//! Only the shape `candidates -> content -> parts -> {text | inlineData}` is
//! modelled. Anything else in the payload is ignored.

use base64::Engine;
use serde::Deserialize;

/// Top-level generation response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenerationResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single candidate completion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

/// Candidate content container.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// One part of a candidate. Exactly one payload field is populated.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ResponsePart {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData", alias = "inline_data")]
        inline_data: InlineImageData,
    },
    /// Parts this pipeline does not understand (function calls, thoughts, ...).
    Other(serde_json::Value),
}

/// Base64 image payload plus the declared encoding.
///
/// `data` is kept as received so that a malformed payload still marks the
/// part as an image. Decoding happens in [`InlineImageData::decode_data`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InlineImageData {
    #[serde(default, rename = "mimeType", alias = "mime_type")]
    pub mime_type: String,
    #[serde(default)]
    pub data: String,
}

impl InlineImageData {
    pub fn from_bytes(mime_type: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Decode the standard base64 payload into raw encoded image bytes.
    pub fn decode_data(&self) -> Result<Vec<u8>, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD.decode(self.data.as_bytes())
    }
}

/// Where the parts of a response come from, or why there are none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartsAvailability<'a> {
    NoCandidates,
    NoParts,
    Parts(&'a [ResponsePart]),
}

impl GenerationResponse {
    /// Build a single-candidate response from parts.
    pub fn from_parts(parts: Vec<ResponsePart>) -> Self {
        Self {
            candidates: vec![Candidate {
                content: Some(Content { parts }),
            }],
        }
    }

    /// Parts of the first candidate. Later candidates are never consulted.
    pub fn first_candidate_parts(&self) -> PartsAvailability<'_> {
        let Some(candidate) = self.candidates.first() else {
            return PartsAvailability::NoCandidates;
        };
        match candidate.content.as_ref() {
            Some(content) if !content.parts.is_empty() => PartsAvailability::Parts(&content.parts),
            _ => PartsAvailability::NoParts,
        }
    }
}

impl ResponsePart {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn inline_image(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::InlineData {
            inline_data: InlineImageData::from_bytes(mime_type, &bytes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserializes_camel_case_inline_data() {
        let value = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "A sunny beach" },
                        { "inlineData": { "mimeType": "image/png", "data": "AQID" } }
                    ]
                },
                "finishReason": "STOP"
            }]
        });

        let response: GenerationResponse = serde_json::from_value(value).unwrap();
        let PartsAvailability::Parts(parts) = response.first_candidate_parts() else {
            panic!("expected parts");
        };
        assert_eq!(parts[0], ResponsePart::text("A sunny beach"));
        assert_eq!(parts[1], ResponsePart::inline_image("image/png", vec![1, 2, 3]));
    }

    #[test]
    fn test_deserializes_snake_case_alias() {
        let value = json!({
            "candidates": [{
                "content": { "parts": [
                    { "inline_data": { "mime_type": "image/jpeg", "data": "AQID" } }
                ] }
            }]
        });

        let response: GenerationResponse = serde_json::from_value(value).unwrap();
        let PartsAvailability::Parts(parts) = response.first_candidate_parts() else {
            panic!("expected parts");
        };
        assert_eq!(parts[0], ResponsePart::inline_image("image/jpeg", vec![1, 2, 3]));
    }

    #[test]
    fn test_unknown_part_is_other() {
        let value = json!({
            "candidates": [{ "content": { "parts": [ { "functionCall": { "name": "x" } } ] } }]
        });

        let response: GenerationResponse = serde_json::from_value(value).unwrap();
        let PartsAvailability::Parts(parts) = response.first_candidate_parts() else {
            panic!("expected parts");
        };
        assert!(matches!(parts[0], ResponsePart::Other(_)));
    }

    #[test]
    fn test_malformed_base64_stays_an_image_part() {
        let value = json!({
            "candidates": [{ "content": { "parts": [
                { "inlineData": { "mimeType": "image/png", "data": "!!!not-base64!!!" } }
            ] } }]
        });

        let response: GenerationResponse = serde_json::from_value(value).unwrap();
        let PartsAvailability::Parts(parts) = response.first_candidate_parts() else {
            panic!("expected parts");
        };
        let ResponsePart::InlineData { inline_data } = &parts[0] else {
            panic!("expected inline data, got {:?}", parts[0]);
        };
        assert!(inline_data.decode_data().is_err());
    }

    #[test]
    fn test_decode_data_returns_raw_bytes() {
        let data = InlineImageData {
            mime_type: "image/png".to_string(),
            data: "AQID".to_string(),
        };
        assert_eq!(data.decode_data().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_parts_availability_compares_by_value() {
        let parts = vec![ResponsePart::text("a")];
        let response = GenerationResponse::from_parts(parts.clone());
        assert_eq!(
            response.first_candidate_parts(),
            PartsAvailability::Parts(&parts)
        );
    }

    #[test]
    fn test_empty_envelopes() {
        let empty: GenerationResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.first_candidate_parts(), PartsAvailability::NoCandidates);

        let no_content: GenerationResponse =
            serde_json::from_value(json!({ "candidates": [{}] })).unwrap();
        assert_eq!(no_content.first_candidate_parts(), PartsAvailability::NoParts);

        let no_parts = GenerationResponse::from_parts(vec![]);
        assert_eq!(no_parts.first_candidate_parts(), PartsAvailability::NoParts);
    }
}
