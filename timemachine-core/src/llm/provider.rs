//! Backend client abstraction
//!
//! Every provider exposes one capability: turn a prompt plus one [`ModelBackendConfig`] into
//! raw generated text. Failures come back as [`LLMError`] values and never escape as panics
//! or propagate past the orchestrator; a failed backend only costs its own slot.
//!
//! | Error | Meaning |
//! |-------|---------|
//! | `Network`, `Provider`, `RateLimit`, `Timeout` | transport failure (connect, non-2xx, bad body, hang) |
//! | `EmptyContent` | the backend answered but carried no usable text |
//! | `Authentication`, `InvalidRequest` | the call could not be issued at all |

use crate::config::models::{ModelBackendConfig, Provider};
use async_trait::async_trait;
use std::time::Duration;

/// Universal backend client trait
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Provider served by this client
    fn provider(&self) -> Provider;

    /// Issue exactly one generation request; no retries
    async fn generate(&self, prompt: &str, config: &ModelBackendConfig)
    -> Result<String, LLMError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LLMError {
    #[error("Authentication failed: {0}")]
    Authentication(String),
    #[error("Rate limit exceeded")]
    RateLimit,
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Provider error: {0}")]
    Provider(String),
    #[error("Empty response: {0}")]
    EmptyContent(String),
    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

impl LLMError {
    /// The backend responded but without usable text
    pub fn is_content_error(&self) -> bool {
        matches!(self, LLMError::EmptyContent(_))
    }

    /// Short machine friendly tag for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            LLMError::Authentication(_) => "authentication",
            LLMError::RateLimit => "rate_limit",
            LLMError::InvalidRequest(_) => "invalid_request",
            LLMError::Network(_) => "network",
            LLMError::Provider(_) => "provider",
            LLMError::EmptyContent(_) => "empty_content",
            LLMError::Timeout(_) => "timeout",
        }
    }
}

/// Single input field used by completion-style requests
pub fn completion_input(system_prompt: &str, prompt: &str) -> String {
    if system_prompt.is_empty() {
        prompt.to_string()
    } else {
        format!("{system_prompt} {prompt}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_input() {
        assert_eq!(completion_input("", "Tell me a joke"), "Tell me a joke");
        assert_eq!(
            completion_input("Prompt:", "Tell me a joke"),
            "Prompt: Tell me a joke"
        );
    }

    #[test]
    fn test_error_kinds() {
        assert!(LLMError::EmptyContent("no choices".into()).is_content_error());
        assert!(!LLMError::RateLimit.is_content_error());
        assert_eq!(LLMError::Timeout(Duration::from_secs(1)).kind(), "timeout");
    }
}
