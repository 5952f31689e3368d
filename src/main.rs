//! Prompt Time Machine - command line entry point

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use timemachine_core::config::{ConfigManager, ProviderCredentials, load_dotenv};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "timemachine=info,timemachine_core=info,tower_http=warn";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.log_level.as_deref());
    load_dotenv()?;

    let workspace = match args.workspace {
        Some(path) => path,
        None => std::env::current_dir().context("cannot determine current dir")?,
    };

    let command = args.command.unwrap_or_default();
    if let Commands::Init { force } = command {
        return cli::handle_init_command(&workspace, force);
    }

    let manager = match &args.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => ConfigManager::load_from_workspace(&workspace)?,
    };
    match manager.config_path() {
        Some(path) => tracing::info!(path = %path.display(), "loaded configuration"),
        None => tracing::info!("no timemachine.toml found; using built-in defaults"),
    }
    let config = manager.into_config();

    match command {
        Commands::Serve { host, port } => {
            let credentials = ProviderCredentials::from_env();
            cli::handle_serve_command(config, &credentials, host, port).await
        }
        Commands::Ask { prompt, json } => {
            let credentials = ProviderCredentials::from_env();
            cli::handle_ask_command(&config, &credentials, &prompt.join(" "), json).await
        }
        Commands::Models => cli::handle_models_command(&config),
        Commands::Init { .. } => Ok(()),
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_LOG_FILTER)));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
