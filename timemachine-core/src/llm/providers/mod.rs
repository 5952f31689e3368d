pub mod huggingface;
pub mod openrouter;

pub use huggingface::HuggingFaceProvider;
pub use openrouter::OpenRouterProvider;

use crate::config::models::Provider;
use crate::llm::error_display;
use crate::llm::provider::LLMError;
use reqwest::RequestBuilder;
use serde_json::Value;

/// Send a prepared JSON request and decode the JSON body of a 2xx response
pub(crate) async fn send_json(request: RequestBuilder, provider: Provider) -> Result<Value, LLMError> {
    let response = request.send().await.map_err(|e| {
        let formatted_error = error_display::format_llm_error(provider, &format!("Network error: {e}"));
        LLMError::Network(formatted_error)
    })?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();

        if status.as_u16() == 429 || error_text.contains("quota") {
            return Err(LLMError::RateLimit);
        }

        let formatted_error =
            error_display::format_llm_error(provider, &format!("HTTP {status}: {error_text}"));
        return Err(LLMError::Provider(formatted_error));
    }

    response.json::<Value>().await.map_err(|e| {
        let formatted_error =
            error_display::format_llm_error(provider, &format!("Failed to parse response: {e}"));
        LLMError::Provider(formatted_error)
    })
}
