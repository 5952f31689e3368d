//! # Backend Integration Layer
//!
//! One [`BackendClient`] per inference provider, selected through the [`BackendRegistry`]
//! lookup table keyed by [`Provider`](crate::config::Provider).
//!
//! | Provider | Modes | Transport |
//! |----------|-------|-----------|
//! | HuggingFace | completion, chat, dedicated endpoint | managed inference router or endpoint URL |
//! | OpenRouter | completion, chat | `/completions`, `/chat/completions` |
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use timemachine_core::config::{ModelBackendConfig, Provider, ProviderCredentials, RequestMode};
//! use timemachine_core::llm::BackendRegistry;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = BackendRegistry::from_credentials(&ProviderCredentials::from_env());
//! let backend = ModelBackendConfig::new(
//!     2025,
//!     "GPT-5",
//!     Provider::OpenRouter,
//!     RequestMode::Chat,
//!     "openai/gpt-5-chat",
//! );
//!
//! if let Some(client) = registry.client_for(backend.provider) {
//!     let text = client.generate("Write a haiku about the moon.", &backend).await?;
//!     println!("{text}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod content;
pub mod error_display;
pub mod factory;
pub mod provider;
pub mod providers;

pub use factory::BackendRegistry;
pub use provider::{BackendClient, LLMError};
pub use providers::{HuggingFaceProvider, OpenRouterProvider};
