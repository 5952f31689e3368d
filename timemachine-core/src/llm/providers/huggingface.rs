//! HuggingFace inference client
//!
//! Three request shapes depending on the backend entry:
//!
//! - `url` set: POST straight to the dedicated endpoint with `{ inputs, parameters }`.
//! - `type = "completion"`: managed text generation at `{base}/models/{model_id}`.
//! - `type = "chat"`: managed chat completions at `{base}/models/{model_id}/v1/chat/completions`.
//!
//! Completion output has the echoed system prompt and user prompt stripped.

use crate::config::constants::{message_roles, urls};
use crate::config::models::{ModelBackendConfig, Provider, RequestMode};
use crate::llm::content;
use crate::llm::provider::{BackendClient, LLMError, completion_input};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::{Value, json};
use tracing::debug;

use super::send_json;

pub struct HuggingFaceProvider {
    token: Option<String>,
    http_client: HttpClient,
    base_url: String,
}

impl HuggingFaceProvider {
    pub fn new(token: Option<String>) -> Self {
        Self::with_http_client(token, HttpClient::new())
    }

    pub fn with_http_client(token: Option<String>, http_client: HttpClient) -> Self {
        Self {
            token,
            http_client,
            base_url: urls::HUGGINGFACE_INFERENCE_BASE.to_string(),
        }
    }

    pub fn from_config(
        token: Option<String>,
        base_url: Option<String>,
        http_client: HttpClient,
    ) -> Self {
        let mut provider = Self::with_http_client(token, http_client);
        if let Some(base) = base_url {
            provider.base_url = base.trim_end_matches('/').to_string();
        }
        provider
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post(&self, url: &str, body: &Value) -> reqwest::RequestBuilder {
        let request = self
            .http_client
            .post(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body);
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn text_generation_body(prompt: &str, config: &ModelBackendConfig) -> Value {
        json!({
            "inputs": completion_input(&config.system_prompt, prompt),
            "parameters": {
                "temperature": config.temperature(),
                "max_new_tokens": config.max_tokens(),
            }
        })
    }

    async fn text_generation(
        &self,
        prompt: &str,
        config: &ModelBackendConfig,
    ) -> Result<String, LLMError> {
        let url = match &config.endpoint_override {
            Some(endpoint) => endpoint.clone(),
            None => format!("{}/models/{}", self.base_url, config.model_id),
        };
        debug!(year = config.year, %url, "huggingface text generation");

        let body = Self::text_generation_body(prompt, config);
        let response = send_json(self.post(&url, &body), Provider::HuggingFace).await?;
        let generated = content::generated_text(&response, Provider::HuggingFace)?;

        Ok(content::strip_echo(&generated, &config.system_prompt, prompt))
    }

    async fn chat_completion(
        &self,
        prompt: &str,
        config: &ModelBackendConfig,
    ) -> Result<String, LLMError> {
        let url = format!(
            "{}/models/{}/v1/chat/completions",
            self.base_url, config.model_id
        );
        debug!(year = config.year, %url, "huggingface chat completion");

        let body = json!({
            "model": config.model_id,
            "messages": [
                {"role": message_roles::SYSTEM, "content": config.system_prompt},
                {"role": message_roles::USER, "content": prompt},
            ],
            "temperature": config.temperature(),
            "max_tokens": config.max_tokens(),
        });

        let response = send_json(self.post(&url, &body), Provider::HuggingFace).await?;
        content::chat_completion_text(&response, Provider::HuggingFace)
    }
}

#[async_trait]
impl BackendClient for HuggingFaceProvider {
    fn provider(&self) -> Provider {
        Provider::HuggingFace
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &ModelBackendConfig,
    ) -> Result<String, LLMError> {
        if config.endpoint_override.is_some() {
            return self.text_generation(prompt, config).await;
        }

        match config.request_mode {
            RequestMode::Completion => self.text_generation(prompt, config).await,
            RequestMode::Chat => self.chat_completion(prompt, config).await,
        }
    }
}
