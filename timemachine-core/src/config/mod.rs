//! Configuration Module
//!
//! Loads `timemachine.toml` (server, generation settings and the backend line-up) and the
//! provider credentials read from the environment at startup.

pub mod api_keys;
pub mod constants;
pub mod loader;
pub mod models;

pub use api_keys::{ProviderCredentials, load_dotenv};
pub use loader::{ConfigManager, GenerationConfig, ServerConfig, TimeMachineConfig};
pub use models::{
    BackendConfigError, ModelBackendConfig, ModelParseError, Provider, RequestMode,
    default_backends, validate_backends,
};
