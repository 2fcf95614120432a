//! Wire types for the generateContent endpoint.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use profashion_imaging::EncodedImage;

/// Inline binary content, base64-encoded on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// One content part: text or inline media.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: Some(text.into()), inline_data: None }
    }

    /// Wrap an encoded image as an inline part, base64-encoding the bytes.
    pub fn image(image: &EncodedImage) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: image.mime_type.clone(),
                data: BASE64.encode(&image.data),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

#[derive(Debug, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl GenerateContentResponse {
    /// Parts of the first candidate, empty when the model returned none.
    pub fn into_parts(self) -> Vec<Part> {
        self.candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts)
            .unwrap_or_default()
    }

    /// Concatenated text of the first candidate's text parts.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// First inline image among the parts, base64-decoded.
pub fn first_image(parts: &[Part]) -> Option<EncodedImage> {
    parts.iter().find_map(|part| {
        let inline = part.inline_data.as_ref()?;
        let data = BASE64.decode(&inline.data).ok()?;
        Some(EncodedImage { mime_type: inline.mime_type.clone(), data })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_part_round_trips_bytes() {
        let encoded = EncodedImage::jpeg(vec![1, 2, 3, 4]);
        let part = Part::image(&encoded);
        let back = first_image(&[part]).expect("image part");
        assert_eq!(back, encoded);
    }

    #[test]
    fn first_image_skips_text_parts() {
        let parts = vec![
            Part::text("commentary"),
            Part::image(&EncodedImage::jpeg(vec![9])),
        ];
        assert_eq!(first_image(&parts).expect("image").data, vec![9]);
    }

    #[test]
    fn first_image_none_for_text_only() {
        assert!(first_image(&[Part::text("no image here")]).is_none());
    }

    #[test]
    fn inline_data_serializes_camel_case() {
        let part = Part::image(&EncodedImage::jpeg(vec![0xFF]));
        let json = serde_json::to_value(&part).expect("serialize");
        assert!(json["inlineData"]["mimeType"].is_string());
        assert!(json.get("text").is_none());
    }

    #[test]
    fn response_text_concatenates_parts() {
        let response = GenerateContentResponse {
            candidates: vec![Candidate {
                content: Content {
                    parts: vec![Part::text("{\"pass\":"), Part::text("true}")],
                },
            }],
        };
        assert_eq!(response.text().as_deref(), Some("{\"pass\":true}"));
    }
}
