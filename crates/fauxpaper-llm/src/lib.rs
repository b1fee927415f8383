//! Fauxpaper LLM Access Layer
//!
//! Implementations of the `TextProvider` trait from `fauxpaper-domain`.
//!
//! # Architecture
//!
//! The strategy chain in the engine needs two independent access paths to
//! the same HTTPS chat-completion protocol, tried in order:
//!
//! - [`ChatClient`]: higher-level client with typed request/response bodies
//!   and a persistent connection pool
//! - [`WireClient`]: direct wire call building the JSON body by hand with a
//!   one-shot connection
//!
//! Plus [`MockProvider`], a deterministic mock for testing that never
//! touches the network.
//!
//! # Examples
//!
//! ```
//! use fauxpaper_llm::MockProvider;
//! use fauxpaper_domain::traits::TextProvider;
//!
//! let provider = MockProvider::new("A Rigorous Investigation into Rice");
//! let title = provider.generate("write a parody title").unwrap();
//! assert_eq!(title, "A Rigorous Investigation into Rice");
//! ```

#![warn(missing_docs)]

pub mod chat;
pub mod wire;

use fauxpaper_domain::traits::TextProvider;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use chat::ChatClient;
pub use wire::WireClient;

/// Chat-completion endpoint of the text-generation service
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Model requested from the service
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Bounded timeout for a single network call (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors that can occur during text-generation calls
///
/// Every variant is recovered inside the strategy chain by falling through
/// to the next tier; none of them reach the caller of `generate`.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Client could not be constructed
    #[error("Client construction failed: {0}")]
    Construction(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response arrived but did not carry a message content string
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No credential configured for the service
    #[error("No credential configured")]
    MissingCredential,
}

/// Mock text provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use fauxpaper_llm::MockProvider;
/// use fauxpaper_domain::traits::TextProvider;
///
/// let mut provider = MockProvider::new("default");
/// provider.add_response("title prompt", "Spoons and Society");
/// assert_eq!(provider.generate("title prompt").unwrap(), "Spoons and Society");
/// assert_eq!(provider.generate("anything else").unwrap(), "default");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a mock with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Configure the mock to fail for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), ERROR_MARKER.to_string());
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

const ERROR_MARKER: &str = "\0ERROR";

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock completion")
    }
}

impl TextProvider for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            if response == ERROR_MARKER {
                return Err(LlmError::Communication("mock failure".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test completion");
        assert_eq!(provider.generate("any prompt").unwrap(), "Test completion");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");

        assert_eq!(provider.generate("hello").unwrap(), "world");
        assert_eq!(
            provider.generate("unknown").unwrap(),
            "Default mock completion"
        );
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");
        assert_eq!(provider.call_count(), 0);

        provider.generate("a").unwrap();
        provider.generate("b").unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.generate("bad prompt");
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }

    #[test]
    fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.generate("x").unwrap();
        assert_eq!(provider2.call_count(), 1);
    }
}
