//! Backend configuration model
//!
//! Every entry of the game's line-up is a [`ModelBackendConfig`]: which provider serves it,
//! how the prompt is assembled, and the decoding parameters used to make an older "year"
//! sound like one. The set is read-only once loaded and shared across requests.

use crate::config::constants::generation::{
    DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, MAX_TEMPERATURE,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Supported inference providers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// HuggingFace inference (managed routes or a dedicated endpoint URL)
    HuggingFace,
    /// OpenRouter REST API
    OpenRouter,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::HuggingFace => "huggingface",
            Provider::OpenRouter => "openrouter",
        }
    }

    /// Human readable label used in logs and error messages
    pub fn label(&self) -> &'static str {
        match self {
            Provider::HuggingFace => "HuggingFace",
            Provider::OpenRouter => "OpenRouter",
        }
    }

    pub fn all_providers() -> Vec<Provider> {
        vec![Provider::HuggingFace, Provider::OpenRouter]
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = ModelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "huggingface" | "hf" => Ok(Provider::HuggingFace),
            "openrouter" => Ok(Provider::OpenRouter),
            _ => Err(ModelParseError::InvalidProvider(s.to_string())),
        }
    }
}

/// Prompt assembly strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestMode {
    /// Raw text continuation, system prompt and prompt concatenated into one input
    Completion,
    /// Role structured exchange (`system` + `user`)
    #[default]
    Chat,
}

impl RequestMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMode::Completion => "completion",
            RequestMode::Chat => "chat",
        }
    }
}

impl fmt::Display for RequestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMode {
    type Err = ModelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "completion" => Ok(RequestMode::Completion),
            "chat" => Ok(RequestMode::Chat),
            _ => Err(ModelParseError::InvalidRequestMode(s.to_string())),
        }
    }
}

/// Error type for provider / mode parsing failures
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelParseError {
    #[error("Invalid provider: '{0}'. Supported providers: huggingface, openrouter")]
    InvalidProvider(String),
    #[error("Invalid request mode: '{0}'. Supported modes: completion, chat")]
    InvalidRequestMode(String),
}

/// One entry of the line-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelBackendConfig {
    /// Display label and ground-truth sort key, unique within a set
    pub year: i32,

    /// Name revealed to the player after the round
    #[serde(rename = "model")]
    pub display_name: String,

    pub provider: Provider,

    #[serde(rename = "type", default)]
    pub request_mode: RequestMode,

    /// Provider specific model name
    pub model_id: String,

    /// Dedicated endpoint; bypasses the provider's managed routing when set
    #[serde(rename = "url", default, skip_serializing_if = "Option::is_none")]
    pub endpoint_override: Option<String>,

    #[serde(default)]
    pub system_prompt: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ModelBackendConfig {
    pub fn new(
        year: i32,
        display_name: impl Into<String>,
        provider: Provider,
        request_mode: RequestMode,
        model_id: impl Into<String>,
    ) -> Self {
        Self {
            year,
            display_name: display_name.into(),
            provider,
            request_mode,
            model_id: model_id.into(),
            endpoint_override: None,
            system_prompt: String::new(),
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint_override = Some(url.into());
        self
    }

    pub fn with_sampling(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.temperature = Some(temperature);
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    /// Copy of this entry with absent decoding parameters filled in
    pub fn resolved(&self, default_temperature: f32, default_max_tokens: u32) -> Self {
        let mut resolved = self.clone();
        resolved.temperature.get_or_insert(default_temperature);
        resolved.max_tokens.get_or_insert(default_max_tokens);
        resolved
    }

    /// Text shown in this entry's slot when generation failed
    pub fn placeholder(&self) -> String {
        format!("[{} response]", self.display_name)
    }

    fn validate(&self) -> Result<(), BackendConfigError> {
        if self.model_id.trim().is_empty() {
            return Err(BackendConfigError::MissingModelId(self.year));
        }

        if let Some(temperature) = self.temperature {
            if !(0.0..=MAX_TEMPERATURE).contains(&temperature) {
                return Err(BackendConfigError::TemperatureOutOfRange {
                    year: self.year,
                    temperature,
                });
            }
        }

        if self.max_tokens == Some(0) {
            return Err(BackendConfigError::ZeroMaxTokens(self.year));
        }

        if let Some(url) = &self.endpoint_override {
            if url.trim().is_empty() {
                return Err(BackendConfigError::EmptyEndpoint(self.year));
            }
            // only HuggingFace serves dedicated endpoints
            if self.provider != Provider::HuggingFace {
                return Err(BackendConfigError::EndpointNotSupported {
                    year: self.year,
                    provider: self.provider,
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendConfigError {
    #[error("no backends configured")]
    Empty,
    #[error("year {0} is configured more than once")]
    DuplicateYear(i32),
    #[error("backend for year {0} has an empty model_id")]
    MissingModelId(i32),
    #[error("backend for year {year} has temperature {temperature} outside 0.0..=2.0")]
    TemperatureOutOfRange { year: i32, temperature: f32 },
    #[error("backend for year {0} has max_tokens = 0")]
    ZeroMaxTokens(i32),
    #[error("backend for year {0} has an empty url")]
    EmptyEndpoint(i32),
    #[error("backend for year {year} sets a url, which provider {provider} does not support")]
    EndpointNotSupported { year: i32, provider: Provider },
}

/// Check the set invariants: non-empty, unique years, sane per-entry values
pub fn validate_backends(backends: &[ModelBackendConfig]) -> Result<(), BackendConfigError> {
    if backends.is_empty() {
        return Err(BackendConfigError::Empty);
    }

    let mut seen = HashSet::with_capacity(backends.len());
    for backend in backends {
        if !seen.insert(backend.year) {
            return Err(BackendConfigError::DuplicateYear(backend.year));
        }
        backend.validate()?;
    }

    Ok(())
}

/// The built-in line-up used when no configuration file is present
pub fn default_backends() -> Vec<ModelBackendConfig> {
    const PLAIN_TEXT: &str = "Respond only with plain text, no markdown or other formatting.";

    vec![
        ModelBackendConfig::new(
            2018,
            "GPT-2",
            Provider::HuggingFace,
            RequestMode::Completion,
            "gpt-2",
        )
        .with_endpoint("https://f76lt51xliydk53k.us-east-1.aws.endpoints.huggingface.cloud"),
        ModelBackendConfig::new(
            2020,
            "GPT-3",
            Provider::HuggingFace,
            RequestMode::Completion,
            "unsloth/llama-2-13b",
        )
        .with_system_prompt("Prompt:"),
        ModelBackendConfig::new(
            2023,
            "GPT-4",
            Provider::OpenRouter,
            RequestMode::Chat,
            "openai/gpt-4-0314",
        )
        .with_system_prompt(PLAIN_TEXT),
        ModelBackendConfig::new(
            2025,
            "GPT-5",
            Provider::OpenRouter,
            RequestMode::Chat,
            "openai/gpt-5-chat",
        )
        .with_system_prompt(PLAIN_TEXT),
    ]
}
