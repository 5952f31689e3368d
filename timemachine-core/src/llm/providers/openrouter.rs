use crate::config::constants::{headers, message_roles, urls};
use crate::config::models::{ModelBackendConfig, Provider, RequestMode};
use crate::llm::content;
use crate::llm::error_display;
use crate::llm::provider::{BackendClient, LLMError, completion_input};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::{Value, json};
use tracing::debug;

use super::send_json;

pub struct OpenRouterProvider {
    api_key: Option<String>,
    http_client: HttpClient,
    base_url: String,
    app_url: String,
}

impl OpenRouterProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_http_client(api_key, HttpClient::new())
    }

    pub fn with_http_client(api_key: Option<String>, http_client: HttpClient) -> Self {
        Self {
            api_key,
            http_client,
            base_url: urls::OPENROUTER_API_BASE.to_string(),
            app_url: urls::DEFAULT_APP_URL.to_string(),
        }
    }

    pub fn from_config(
        api_key: Option<String>,
        base_url: Option<String>,
        app_url: String,
        http_client: HttpClient,
    ) -> Self {
        let mut provider = Self::with_http_client(api_key, http_client);
        if let Some(base) = base_url {
            provider.base_url = base.trim_end_matches('/').to_string();
        }
        provider.app_url = app_url;
        provider
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn completion_body(prompt: &str, config: &ModelBackendConfig) -> Value {
        json!({
            "model": config.model_id,
            "prompt": completion_input(&config.system_prompt, prompt),
            "temperature": config.temperature(),
            "max_tokens": config.max_tokens(),
        })
    }

    fn chat_body(prompt: &str, config: &ModelBackendConfig) -> Value {
        json!({
            "model": config.model_id,
            "messages": [
                {"role": message_roles::SYSTEM, "content": config.system_prompt},
                {"role": message_roles::USER, "content": prompt},
            ],
            "temperature": config.temperature(),
            "max_tokens": config.max_tokens(),
        })
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, LLMError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            LLMError::Authentication(error_display::format_llm_error(
                Provider::OpenRouter,
                "API key is not configured",
            ))
        })?;

        let url = format!("{}{}", self.base_url, path);
        let request = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .header(headers::REFERER, &self.app_url)
            .header(headers::TITLE, headers::APP_TITLE)
            .json(body);

        send_json(request, Provider::OpenRouter).await
    }
}

#[async_trait]
impl BackendClient for OpenRouterProvider {
    fn provider(&self) -> Provider {
        Provider::OpenRouter
    }

    async fn generate(
        &self,
        prompt: &str,
        config: &ModelBackendConfig,
    ) -> Result<String, LLMError> {
        debug!(
            year = config.year,
            model = %config.model_id,
            mode = %config.request_mode,
            "openrouter request"
        );

        match config.request_mode {
            RequestMode::Completion => {
                let response = self
                    .post("/completions", &Self::completion_body(prompt, config))
                    .await?;
                content::completion_text(&response, Provider::OpenRouter)
            }
            RequestMode::Chat => {
                let response = self
                    .post("/chat/completions", &Self::chat_body(prompt, config))
                    .await?;
                content::chat_completion_text(&response, Provider::OpenRouter)
            }
        }
    }
}
