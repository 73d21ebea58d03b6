use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::app_config::Config;
use crate::errors::ProviderError;
use crate::providers::{Provider, TranslationClient};

/// Gemini client for the `generateContent` endpoint
#[derive(Debug, Clone)]
pub struct GeminiClient {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API base URL, e.g. `https://generativelanguage.googleapis.com/v1beta`
    endpoint: String,
    /// Model id, e.g. `gemini-2.5-flash`
    model: String,
}

/// Gemini generate request
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    /// Conversation turns; we only ever send one
    pub contents: Vec<GeminiContent>,
}

/// One turn of a Gemini conversation
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    /// Text parts of the turn
    #[serde(default)]
    pub parts: Vec<GeminiPart>,

    /// Role of the sender, absent for single-turn requests
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
}

/// A text part
#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default)]
    pub text: String,
}

/// Gemini generate response
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    /// Generated candidates, missing when the prompt was blocked
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// A generated candidate
#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    /// Missing when generation stopped before producing content
    pub content: Option<GeminiContent>,

    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

impl GeminiRequest {
    /// Single user turn carrying the prompt
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt.into() }],
                role: None,
            }],
        }
    }
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// No request timeout is set; a call waits as long as the transport lets it.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    /// Create a client from the application configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_key, &config.model.endpoint, &config.model.name)
    }

    /// Model id this client targets
    pub fn model(&self) -> &str {
        &self.model
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    fn map_status(status: StatusCode, body: String) -> ProviderError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ProviderError::AuthenticationError(body)
            }
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded(body),
            _ => ProviderError::ApiError {
                status_code: status.as_u16(),
                message: body,
            },
        }
    }
}

#[async_trait]
impl Provider for GeminiClient {
    type Request = GeminiRequest;
    type Response = GeminiResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        if self.api_key.trim().is_empty() {
            return Err(ProviderError::AuthenticationError(
                "API_KEY is not set".to_string(),
            ));
        }

        let response = self
            .client
            .post(self.api_url())
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(Self::map_status(status, error_text));
        }

        response
            .json::<GeminiResponse>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let response = self.complete(GeminiRequest::from_prompt("Hello")).await?;
        if Self::extract_text(&response).is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(())
    }

    fn extract_text(response: &Self::Response) -> String {
        response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.iter().map(|p| p.text.as_str()).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TranslationClient for GeminiClient {
    async fn translate(&self, prompt: &str) -> Result<String, ProviderError> {
        debug!("Sending {} char prompt to {}", prompt.len(), self.model);

        let response = self.complete(GeminiRequest::from_prompt(prompt)).await?;
        let text = Self::extract_text(&response);
        if text.is_empty() {
            let reason = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.clone())
                .unwrap_or_else(|| "no candidates".to_string());
            error!("Gemini returned no text ({})", reason);
            return Err(ProviderError::EmptyResponse);
        }

        Ok(text)
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        self.test_connection().await
    }
}
