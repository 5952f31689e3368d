//! Provider credential loading from environment variables and .env files.
//!
//! Secrets are read exactly once at process start into a [`ProviderCredentials`] value that is
//! then injected into the backend clients. No client touches the environment on its own.

use crate::config::constants::{env_vars, urls};
use anyhow::Result;
use std::env;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Opaque credentials and routing overrides for the inference providers
#[derive(Clone, Default)]
pub struct ProviderCredentials {
    /// HuggingFace access token
    pub huggingface_token: Option<String>,
    /// OpenRouter API key
    pub openrouter_api_key: Option<String>,
    /// Alternate base URL for HuggingFace managed inference
    pub huggingface_base_url: Option<String>,
    /// Alternate base URL for OpenRouter
    pub openrouter_base_url: Option<String>,
    /// Referrer sent to OpenRouter to identify the calling application
    pub app_url: String,
}

impl ProviderCredentials {
    /// Read credentials from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read credentials through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let huggingface_token = env_vars::HUGGINGFACE_TOKEN
            .iter()
            .find_map(|key| non_empty(*key));

        let credentials = Self {
            huggingface_token,
            openrouter_api_key: non_empty(env_vars::OPENROUTER_API_KEY),
            huggingface_base_url: non_empty(env_vars::HF_INFERENCE_BASE_URL),
            openrouter_base_url: non_empty(env_vars::OPENROUTER_BASE_URL),
            app_url: non_empty(env_vars::APP_URL)
                .unwrap_or_else(|| urls::DEFAULT_APP_URL.to_string()),
        };

        if credentials.huggingface_token.is_none() {
            warn!("no HuggingFace token found; dedicated endpoints will be called anonymously");
        }
        if credentials.openrouter_api_key.is_none() {
            warn!(
                "{} is not set; OpenRouter backends will fall back to placeholders",
                env_vars::OPENROUTER_API_KEY
            );
        }

        credentials
    }
}

impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |value: &Option<String>| value.as_ref().map(|_| "<redacted>");
        f.debug_struct("ProviderCredentials")
            .field("huggingface_token", &redact(&self.huggingface_token))
            .field("openrouter_api_key", &redact(&self.openrouter_api_key))
            .field("huggingface_base_url", &self.huggingface_base_url)
            .field("openrouter_base_url", &self.openrouter_base_url)
            .field("app_url", &self.app_url)
            .finish()
    }
}

/// Load environment variables from .env file
///
/// A missing file is fine; a file that exists but cannot be parsed is logged and ignored.
/// Call after the tracing subscriber is installed so the outcome is visible.
pub fn load_dotenv() -> Result<()> {
    match dotenv_outcome(dotenvy::dotenv()) {
        DotenvOutcome::Loaded(path) => {
            debug!("Loaded environment variables from: {}", path.display());
        }
        DotenvOutcome::Missing => {}
        DotenvOutcome::Invalid(reason) => {
            warn!("Failed to load .env file: {reason}");
        }
    }
    Ok(())
}

#[derive(Debug, PartialEq)]
enum DotenvOutcome {
    Loaded(PathBuf),
    Missing,
    Invalid(String),
}

fn dotenv_outcome(result: std::result::Result<PathBuf, dotenvy::Error>) -> DotenvOutcome {
    match result {
        Ok(path) => DotenvOutcome::Loaded(path),
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            DotenvOutcome::Missing
        }
        Err(e) => DotenvOutcome::Invalid(e.to_string()),
    }
}
