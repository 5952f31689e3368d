use anyhow::Result;
use console::style;
use timemachine_core::config::{ModelBackendConfig, TimeMachineConfig};
use timemachine_core::llm::error_display::style_provider_name;

/// Handle the models command
pub fn handle_models_command(config: &TimeMachineConfig) -> Result<()> {
    println!("{}", style("Configured backends").blue().bold());
    println!(
        "Timeout: {}s per backend",
        config.generation.backend_timeout_secs
    );
    println!();

    for backend in &config.backends {
        println!("{}", describe(backend));
    }

    Ok(())
}

fn describe(backend: &ModelBackendConfig) -> String {
    let mut line = format!(
        "{}  {:<6} {} [{}] {}",
        backend.year,
        backend.display_name,
        style_provider_name(backend.provider),
        backend.request_mode,
        backend.model_id,
    );
    if let Some(url) = &backend.endpoint_override {
        line.push_str(&format!(" via {url}"));
    }
    line
}
