//! REST client for the Gemini generateContent endpoints.

use serde_json::{json, Value};
use tracing::debug;

use crate::types::{GenerateContentResponse, Part};

/// Default public API endpoint.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Model used for image generation.
const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Cheaper model used for face detection and quality verdicts.
const DEFAULT_ANALYSIS_MODEL: &str = "gemini-3-flash-preview";

/// Connection settings for the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_model: String,
    pub analysis_model: String,
}

impl GeminiConfig {
    /// Load from environment variables.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `GEMINI_API_KEY` | required |
    /// | `GEMINI_BASE_URL` | `https://generativelanguage.googleapis.com` |
    /// | `GEMINI_IMAGE_MODEL` | `gemini-3-pro-image-preview` |
    /// | `GEMINI_ANALYSIS_MODEL` | `gemini-3-flash-preview` |
    pub fn from_env() -> Result<Self, GeminiError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY is not set".to_string()))?;
        Ok(Self {
            api_key,
            base_url: std::env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            image_model: std::env::var("GEMINI_IMAGE_MODEL")
                .unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string()),
            analysis_model: std::env::var("GEMINI_ANALYSIS_MODEL")
                .unwrap_or_else(|_| DEFAULT_ANALYSIS_MODEL.to_string()),
        })
    }
}

/// Errors from the Gemini API layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// Client misconfiguration, detected before any request is sent.
    #[error("Gemini configuration error: {0}")]
    Config(String),

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The response arrived but did not have the expected shape.
    #[error("Malformed Gemini response: {0}")]
    Malformed(String),
}

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, config: GeminiConfig) -> Self {
        Self { client, config }
    }

    pub fn image_model(&self) -> &str {
        &self.config.image_model
    }

    pub fn analysis_model(&self) -> &str {
        &self.config.analysis_model
    }

    /// Send one generateContent request.
    ///
    /// `generation_config` is passed through as the request's
    /// `generationConfig` object when present.
    pub async fn generate_content(
        &self,
        model: &str,
        parts: Vec<Part>,
        generation_config: Option<Value>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let mut body = json!({
            "contents": [{ "parts": parts }],
        });
        if let Some(config) = generation_config {
            body["generationConfig"] = config;
        }

        debug!(model, "sending generateContent request");
        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.config.base_url, model
            ))
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Deserialize a JSON response body, converting non-2xx statuses into
    /// [`GeminiError::Api`] with the raw body preserved.
    async fn parse_response(
        response: reqwest::Response,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(GeminiError::from)
    }
}
