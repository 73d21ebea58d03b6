/*!
 * Clients for the hosted language model.
 *
 * - `gemini`: Google Gemini `generateContent` API
 * - `mock`: deterministic offline client for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for LLM provider wire clients
///
/// Each provider speaks its own request and response types; this trait is the
/// raw request/response seam underneath `TranslationClient`.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// The request type for this provider
    type Request: Send + Sync;

    /// The response type for this provider
    type Response: Send + Sync;

    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<Self::Response, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self) -> Result<(), ProviderError>;

    /// Extract text from the provider response
    fn extract_text(response: &Self::Response) -> String;
}

/// One prompt in, the model's raw text out.
///
/// This is what the controller talks to. Exactly one outbound call per
/// invocation: no retry, no streaming.
#[async_trait]
pub trait TranslationClient: Send + Sync {
    /// Send `prompt` and return the response text unmodified.
    async fn translate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Check that the model answers at all.
    async fn health_check(&self) -> Result<(), ProviderError>;
}

pub mod gemini;
pub mod mock;

pub use gemini::GeminiClient;
pub use mock::MockProvider;
