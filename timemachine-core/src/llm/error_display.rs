//! LLM error display utilities
//!
//! Provider errors are carried as plain text (they end up in structured logs); the styled
//! helpers are for terminal output only.

use crate::config::models::Provider;
use console::style;

/// Prefix an error message with the provider label
pub fn format_llm_error(provider: Provider, error: &str) -> String {
    format!("{}: {error}", provider.label())
}

/// Get a styled error message
pub fn style_llm_error(message: &str) -> String {
    style(message).red().to_string()
}

/// Get a styled warning message
pub fn style_llm_warning(message: &str) -> String {
    style(message).yellow().to_string()
}

/// Get a styled provider name, coloured per provider
pub fn style_provider_name(provider: Provider) -> String {
    let styled_name = match provider {
        Provider::HuggingFace => style(provider.label()).yellow(),
        Provider::OpenRouter => style(provider.label()).magenta(),
    };
    styled_name.to_string()
}
