use crate::config::constants::{files, generation, server};
use crate::config::models::{ModelBackendConfig, default_backends, validate_backends};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// HTTP server settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_true")]
    pub cors_allow_any: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_allow_any: default_true(),
        }
    }
}

/// Fan-out settings shared by every backend
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Upper bound for a single backend call; a slower backend degrades to its placeholder
    #[serde(default = "default_backend_timeout_secs")]
    pub backend_timeout_secs: u64,

    #[serde(default = "default_temperature")]
    pub default_temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub default_max_tokens: u32,
}

impl GenerationConfig {
    pub fn backend_timeout(&self) -> Duration {
        Duration::from_secs(self.backend_timeout_secs)
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            backend_timeout_secs: default_backend_timeout_secs(),
            default_temperature: default_temperature(),
            default_max_tokens: default_max_tokens(),
        }
    }
}

fn default_host() -> String {
    server::DEFAULT_HOST.to_string()
}
fn default_port() -> u16 {
    server::DEFAULT_PORT
}
fn default_true() -> bool {
    true
}
fn default_backend_timeout_secs() -> u64 {
    generation::DEFAULT_BACKEND_TIMEOUT_SECS
}
fn default_temperature() -> f32 {
    generation::DEFAULT_TEMPERATURE
}
fn default_max_tokens() -> u32 {
    generation::DEFAULT_MAX_TOKENS
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimeMachineConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub generation: GenerationConfig,

    /// The line-up, in the order results are returned
    #[serde(default = "default_backends")]
    pub backends: Vec<ModelBackendConfig>,
}

impl Default for TimeMachineConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            generation: GenerationConfig::default(),
            backends: default_backends(),
        }
    }
}

impl TimeMachineConfig {
    /// Check the generation settings and the backend set invariants
    pub fn validate(&self) -> Result<()> {
        if self.generation.backend_timeout_secs == 0 {
            anyhow::bail!("generation.backend_timeout_secs must be greater than zero");
        }
        if !(0.0..=generation::MAX_TEMPERATURE).contains(&self.generation.default_temperature) {
            anyhow::bail!(
                "generation.default_temperature must be within 0.0..={}",
                generation::MAX_TEMPERATURE
            );
        }
        if self.generation.default_max_tokens == 0 {
            anyhow::bail!("generation.default_max_tokens must be greater than zero");
        }
        validate_backends(&self.backends).context("Invalid [[backends]] configuration")?;
        Ok(())
    }

    /// Write the default configuration to `output`
    pub fn create_sample_config<P: AsRef<Path>>(output: P) -> Result<()> {
        let output = output.as_ref();
        let config_content = toml::to_string_pretty(&TimeMachineConfig::default())
            .context("Failed to serialize default configuration")?;

        fs::write(output, config_content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;

        Ok(())
    }

    /// Create `timemachine.toml` in the workspace unless it exists (or `force` is set)
    pub fn bootstrap_project<P: AsRef<Path>>(workspace: P, force: bool) -> Result<Option<PathBuf>> {
        let config_path = workspace.as_ref().join(files::CONFIG_FILE);
        if config_path.exists() && !force {
            return Ok(None);
        }
        Self::create_sample_config(&config_path)?;
        Ok(Some(config_path))
    }
}

/// Configuration manager for loading and validating configurations
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: TimeMachineConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Load configuration from a specific workspace
    ///
    /// Looks for `timemachine.toml`, then `.timemachine/timemachine.toml`, and falls back to the
    /// built-in defaults.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let candidates = [
            workspace.join(files::CONFIG_FILE),
            workspace.join(files::CONFIG_DIR).join(files::CONFIG_FILE),
        ];
        for path in candidates {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self {
            config: TimeMachineConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: TimeMachineConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    pub fn config(&self) -> &TimeMachineConfig {
        &self.config
    }

    pub fn into_config(self) -> TimeMachineConfig {
        self.config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}
