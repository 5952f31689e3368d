//! # timemachine-core - Runtime for the Prompt Time Machine
//!
//! `timemachine-core` sends one prompt to a line-up of language models from different years
//! and returns their answers side by side, so a player can guess which answer came from which
//! generation.
//!
//! ## Highlights
//!
//! - **Backend Abstraction**: one [`BackendClient`](llm::BackendClient) per inference provider
//!   (HuggingFace, OpenRouter) with completion and chat request modes.
//! - **Concurrent Fan-Out**: every backend runs as its own task with a timeout; failures degrade
//!   to a deterministic placeholder instead of failing the request.
//! - **Output Normalization**: raw completions are cut at the last complete sentence so every
//!   generation is shown on equal footing.
//! - **Configuration-First**: the backend line-up, timeouts and server settings live in
//!   `timemachine.toml`; credentials come from the environment.
//!
//! ## Architecture Overview
//!
//! - `config/`: configuration loader, defaults, backend line-up and credentials.
//! - `llm/`: provider clients, request shaping and response extraction.
//! - `core/`: normalizer, fan-out orchestrator and round scoring.
//! - `server/`: axum router exposing generation and scoring over HTTP.
//!
//! ## Quickstart
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use timemachine_core::{
//!     BackendRegistry, ConfigManager, GenerationOrchestrator, OrchestratorSettings,
//!     ProviderCredentials,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), anyhow::Error> {
//!     let config = ConfigManager::load()?.into_config();
//!     let registry = BackendRegistry::from_credentials(&ProviderCredentials::from_env());
//!     let orchestrator = GenerationOrchestrator::new(
//!         Arc::new(registry),
//!         OrchestratorSettings::from(&config.generation),
//!     );
//!
//!     for result in orchestrator.orchestrate("Once upon a time", &config.backends).await? {
//!         println!("{} ({}): {}", result.model, result.year, result.output);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod llm;
pub mod server;

pub use config::{
    ConfigManager, ModelBackendConfig, Provider, ProviderCredentials, RequestMode,
    TimeMachineConfig,
};
pub use self::core::{
    GameScore, GenerationOrchestrator, GenerationResult, OrchestrationError,
    OrchestratorSettings, normalize, score_ordering,
};
pub use llm::{BackendClient, BackendRegistry, LLMError};
pub use server::{AppState, create_router};
