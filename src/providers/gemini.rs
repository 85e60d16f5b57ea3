use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// Default public API endpoint for the Gemini service
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Gemini client for interacting with the Google generative language API
#[derive(Debug)]
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// Model name (e.g. "gemini-2.5-flash")
    model: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
}

/// Gemini content generation request
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    /// Conversation contents; a single user turn for title analysis
    contents: Vec<GeminiContent>,
}

/// A single content block in a Gemini request
#[derive(Debug, Serialize)]
pub struct GeminiContent {
    /// The parts making up this content block
    parts: Vec<GeminiPart>,
}

/// A text part of a content block
#[derive(Debug, Serialize)]
pub struct GeminiPart {
    /// The text payload
    text: String,
}

/// Gemini content generation response
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    /// Generated candidates; the first one carries the reply
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// A generated candidate in a Gemini response
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// The content of the candidate
    pub content: GeminiCandidateContent,
}

/// Content block of a response candidate
#[derive(Debug, Deserialize)]
pub struct GeminiCandidateContent {
    /// The text parts of the candidate
    #[serde(default)]
    pub parts: Vec<GeminiCandidatePart>,
}

/// A text part of a response candidate
#[derive(Debug, Deserialize)]
pub struct GeminiCandidatePart {
    /// The actual text content
    pub text: String,
}

impl GeminiRequest {
    /// Create a request carrying a single user prompt
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

impl GeminiResponse {
    /// Extract the reply text from the first candidate
    pub fn extract_text(&self) -> String {
        self.candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Gemini {
    /// Create a new Gemini client for the public API
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_endpoint(api_key, model, DEFAULT_ENDPOINT)
    }

    /// Create a new Gemini client with a custom endpoint
    pub fn with_endpoint(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Complete a content generation request
    pub async fn complete(&self, request: GeminiRequest) -> Result<GeminiResponse, ProviderError> {
        let api_url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        );

        let response = self
            .client
            .post(&api_url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ProviderError::RequestFailed(format!(
                    "Failed to send request to Gemini API: {}",
                    e
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);

            return Err(match status.as_u16() {
                429 => ProviderError::RateLimitExceeded(error_text),
                401 | 403 => ProviderError::AuthenticationError(error_text),
                code => ProviderError::ApiError {
                    status_code: code,
                    message: error_text,
                },
            });
        }

        let gemini_response = response.json::<GeminiResponse>().await.map_err(|e| {
            ProviderError::ParseError(format!("Failed to parse Gemini API response: {}", e))
        })?;

        Ok(gemini_response)
    }
}

#[async_trait]
impl Provider for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = GeminiRequest::from_prompt(prompt);
        let response = self.complete(request).await?;

        let text = response.extract_text();
        if text.is_empty() {
            return Err(ProviderError::ParseError(
                "Gemini API response contained no text".to_string(),
            ));
        }

        Ok(text)
    }
}
