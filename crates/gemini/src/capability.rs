//! Seam between the pipeline and the concrete Gemini client.

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::client::{GeminiClient, GeminiError};
use crate::types::Part;

/// Vision operations the pipeline needs.
///
/// One implementation talks to Gemini; tests provide mocks that record the
/// prompts they were given.
#[async_trait]
pub trait VisionCapability: Send + Sync {
    /// Render an image from the given parts. Returns the response parts of
    /// the first candidate; callers pick out the inline image.
    async fn generate_image(&self, parts: Vec<Part>) -> Result<Vec<Part>, GeminiError>;

    /// Run a structured-JSON analysis task against the cheap model.
    async fn analyze_json(&self, parts: Vec<Part>, schema: Value) -> Result<Value, GeminiError>;
}

#[async_trait]
impl VisionCapability for GeminiClient {
    async fn generate_image(&self, parts: Vec<Part>) -> Result<Vec<Part>, GeminiError> {
        let config = json!({
            "imageConfig": { "aspectRatio": "1:1", "imageSize": "4K" },
        });
        let model = self.image_model().to_string();
        let response = self.generate_content(&model, parts, Some(config)).await?;
        Ok(response.into_parts())
    }

    async fn analyze_json(&self, parts: Vec<Part>, schema: Value) -> Result<Value, GeminiError> {
        let config = json!({
            "responseMimeType": "application/json",
            "responseSchema": schema,
        });
        let model = self.analysis_model().to_string();
        let response = self.generate_content(&model, parts, Some(config)).await?;
        let text = response
            .text()
            .ok_or_else(|| GeminiError::Malformed("no text in analysis response".to_string()))?;
        serde_json::from_str(&text)
            .map_err(|err| GeminiError::Malformed(format!("analysis response is not JSON: {err}")))
    }
}
