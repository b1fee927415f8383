//! Higher-level chat-completion client
//!
//! First tier of the generation strategy chain: a typed client over the
//! service's chat protocol with a persistent connection pool and a bounded
//! timeout. Construction is fallible; a construction failure makes the
//! chain fall through to the raw wire tier.

use crate::{LlmError, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use fauxpaper_domain::traits::TextProvider;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One message in the chat protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("user", "assistant", ...)
    pub role: String,

    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Build a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for the chat-completion protocol
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

/// Response body for the chat-completion protocol
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageBody,
}

#[derive(Debug, Deserialize)]
struct ChatMessageBody {
    content: String,
}

/// Typed chat-completion client
///
/// # Examples
///
/// ```no_run
/// use fauxpaper_llm::ChatClient;
///
/// let client = ChatClient::new("sk-example").unwrap()
///     .with_params(100, 0.9);
/// ```
pub struct ChatClient {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    max_tokens: u32,
    temperature: f32,
}

impl ChatClient {
    /// Create a client for the default endpoint and model
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Construction`] if the underlying HTTP client
    /// cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Construction(e.to_string()))?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.into(),
            client,
            max_tokens: 500,
            temperature: 0.85,
        })
    }

    /// Override the service endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set sampling parameters for subsequent calls
    pub fn with_params(mut self, max_tokens: u32, temperature: f32) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    /// Send a chat completion and return the message content
    ///
    /// # Errors
    ///
    /// Returns error if the network call fails, the service responds with a
    /// non-success status, or the response carries no message content.
    pub async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, LlmError> {
        tracing::debug!(model = %self.model, max_tokens = self.max_tokens, "Chat completion request");

        let body = ChatRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!("HTTP {}: {}", status, text)));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| LlmError::InvalidResponse("Empty choices array".to_string()))
    }
}

impl TextProvider for ChatClient {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call
        tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Construction(e.to_string()))?
            .block_on(async { self.complete(vec![ChatMessage::user(prompt)]).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_client_creation() {
        let client = ChatClient::new("sk-test").unwrap();
        assert_eq!(client.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(client.model, DEFAULT_MODEL);
        assert_eq!(client.max_tokens, 500);
    }

    #[test]
    fn test_chat_client_with_params() {
        let client = ChatClient::new("sk-test").unwrap().with_params(100, 0.9);
        assert_eq!(client.max_tokens, 100);
        assert!((client.temperature - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn test_chat_message_user_role() {
        let message = ChatMessage::user("hello");
        assert_eq!(message.role, "user");
        assert_eq!(message.content, "hello");
    }

    #[tokio::test]
    async fn test_chat_client_unreachable_endpoint() {
        let client = ChatClient::new("sk-test")
            .unwrap()
            .with_endpoint("http://127.0.0.1:1/v1/chat/completions");

        let result = client.complete(vec![ChatMessage::user("test")]).await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
