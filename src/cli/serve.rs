use anyhow::Result;
use timemachine_core::config::{ProviderCredentials, TimeMachineConfig};
use timemachine_core::llm::BackendRegistry;
use timemachine_core::server::{self, AppState};

/// Handle the serve command
pub async fn handle_serve_command(
    mut config: TimeMachineConfig,
    credentials: &ProviderCredentials,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    let registry = BackendRegistry::from_credentials(credentials);
    tracing::info!(providers = ?registry.list_providers(), "backend registry ready");

    let state = AppState::from_config(&config, registry);
    server::serve(&config.server, state).await
}
