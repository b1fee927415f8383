//! Direct wire call to the text-generation service
//!
//! Second tier of the generation strategy chain: issues an equivalent
//! chat-completion request over the raw protocol with a hand-built JSON
//! body and a one-shot connection. Used when the higher-level client is
//! unavailable or failed.

use crate::{LlmError, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS};
use fauxpaper_domain::traits::TextProvider;
use serde_json::{json, Value};
use std::time::Duration;

/// Raw-protocol fallback client
///
/// Unlike [`crate::ChatClient`], holds no connection pool and builds the
/// request body as untyped JSON; each call constructs a fresh HTTP client.
pub struct WireClient {
    endpoint: String,
    api_key: String,
    max_tokens: u32,
    temperature: f32,
}

impl WireClient {
    /// Create a wire client for the default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.into(),
            max_tokens: 500,
            temperature: 0.85,
        }
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

    /// Issue one chat-completion call over the raw protocol
    ///
    /// # Errors
    ///
    /// Returns error on network failure, non-success status, or a payload
    /// without a `choices[0].message.content` string.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        tracing::debug!(max_tokens = self.max_tokens, "Raw wire completion request");

        let body = json!({
            "model": DEFAULT_MODEL,
            "messages": [{"role": "user", "content": prompt}],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        });

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Construction(e.to_string()))?;

        let response = client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(LlmError::Communication(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(|content| content.trim().to_string())
            .ok_or_else(|| LlmError::InvalidResponse("Missing message content".to_string()))
    }
}

impl TextProvider for WireClient {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for the async call
        tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Construction(e.to_string()))?
            .block_on(async { self.complete(prompt).await })
    }
}
