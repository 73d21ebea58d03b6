/*!
 * Mock provider for tests and offline runs.
 *
 * - `MockProvider::working()` - always answers in the to-dialect layout
 * - `MockProvider::fixed(text)` - always answers with `text`
 * - `MockProvider::failing()` - always fails with an API error
 * - `MockProvider::intermittent(n)` - fails every n-th request
 * - `MockProvider::empty()` - answers with no text
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::{Provider, TranslationClient};

/// Mock request: just the prompt
#[derive(Debug, Clone)]
pub struct MockRequest {
    pub prompt: String,
}

/// Mock response for testing
#[derive(Debug, Clone)]
pub struct MockResponse {
    /// The generated text
    pub text: String,
}

/// Behavior mode for the mock provider
#[derive(Debug, Clone, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with a three-field answer
    Working,
    /// Always succeeds with the given text
    Fixed(String),
    /// Fails intermittently (every Nth request)
    Intermittent { fail_every: usize },
    /// Always fails with an error
    Failing,
    /// Returns an empty response
    Empty,
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter, shared between clones
    request_count: Arc<AtomicUsize>,
    /// Prompts received, shared between clones
    prompts: Arc<Mutex<Vec<String>>>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
            custom_response: None,
        }
    }

    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    pub fn fixed(text: impl Into<String>) -> Self {
        Self::new(MockBehavior::Fixed(text.into()))
    }

    /// Fail every `fail_every`-th request; zero is treated as one
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent {
            fail_every: fail_every.max(1),
        })
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Set a custom response generator, used by `Working`
    pub fn with_custom_response(mut self, generator: fn(&str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of requests received so far
    pub fn request_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    /// A canned answer in the Words / Pronunciation / Usage layout
    pub fn three_field_answer(words: &str, pronunciation: &str, usage: &str) -> String {
        format!(
            "<b> Words </b>: {}<br><b> Pronunciation </b>: {}<br><b> Usage </b>: {}",
            words, pronunciation, usage
        )
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            request_count: Arc::clone(&self.request_count),
            prompts: Arc::clone(&self.prompts),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl Provider for MockProvider {
    type Request = MockRequest;
    type Response = MockResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(request.prompt.clone());
        }

        match &self.behavior {
            MockBehavior::Working => {
                let text = match self.custom_response {
                    Some(generator) => generator(&request.prompt),
                    None => Self::three_field_answer("[TRANSLATED]", "[PRONUNCIATION]", "[USAGE]"),
                };
                Ok(MockResponse { text })
            }

            MockBehavior::Fixed(text) => Ok(MockResponse { text: text.clone() }),

            MockBehavior::Intermittent { fail_every } => {
                let fail_every = (*fail_every).max(1);
                if count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        message: format!("Simulated intermittent failure (request #{})", count + 1),
                        status_code: 503,
                    })
                } else {
                    Ok(MockResponse {
                        text: format!("[TRANSLATED] request #{}", count + 1),
                    })
                }
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                message: "Simulated provider failure".to_string(),
                status_code: 500,
            }),

            MockBehavior::Empty => Ok(MockResponse {
                text: String::new(),
            }),
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        match self.behavior {
            MockBehavior::Failing => Err(ProviderError::ConnectionError(
                "Simulated connection failure".to_string(),
            )),
            _ => Ok(()),
        }
    }

    fn extract_text(response: &Self::Response) -> String {
        response.text.clone()
    }
}

#[async_trait]
impl TranslationClient for MockProvider {
    async fn translate(&self, prompt: &str) -> Result<String, ProviderError> {
        let response = self
            .complete(MockRequest {
                prompt: prompt.to_string(),
            })
            .await?;
        let text = Self::extract_text(&response);
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse);
        }
        Ok(text)
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        self.test_connection().await
    }
}
