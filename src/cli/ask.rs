use anyhow::{Context, Result};
use console::style;
use std::sync::Arc;
use timemachine_core::config::{ProviderCredentials, TimeMachineConfig};
use timemachine_core::core::{GenerationOrchestrator, GenerationResult, OrchestratorSettings};
use timemachine_core::llm::BackendRegistry;
use timemachine_core::llm::error_display::{style_llm_error, style_llm_warning};

/// Handle the ask command - one prompt, every backend
pub async fn handle_ask_command(
    config: &TimeMachineConfig,
    credentials: &ProviderCredentials,
    prompt: &str,
    json: bool,
) -> Result<()> {
    if prompt.trim().is_empty() {
        anyhow::bail!("No prompt provided. Use: timemachine ask \"Once upon a time\"");
    }

    let orchestrator = GenerationOrchestrator::new(
        Arc::new(BackendRegistry::from_credentials(credentials)),
        OrchestratorSettings::from(&config.generation),
    );

    if !json {
        println!("{}", style("Prompt Time Machine").blue().bold());
        println!("Prompt: {prompt}");
        println!();
    }

    let mut results = orchestrator
        .orchestrate(prompt, &config.backends)
        .await
        .context("Generation failed")?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        println!("{rendered}");
        return Ok(());
    }

    results.sort_by_key(|result| result.year);
    for result in &results {
        print_result(result);
    }

    if let Some(summary) = degraded_summary(&results) {
        println!("{}", style_llm_warning(&summary));
    }

    Ok(())
}

/// One line noting how many slots carry placeholders, if any
fn degraded_summary(results: &[GenerationResult]) -> Option<String> {
    let degraded = results.iter().filter(|result| result.is_placeholder()).count();
    (degraded > 0).then(|| {
        format!(
            "{degraded} of {} backends did not answer; run with RUST_LOG=timemachine_core=warn for details",
            results.len()
        )
    })
}

fn print_result(result: &GenerationResult) {
    let header = format!("{} ({})", result.model, result.year);
    println!("{}", style(header).cyan().bold());
    if result.is_placeholder() {
        println!("{}", style_llm_error(&result.output));
    } else {
        println!("{}", result.output);
    }
    println!();
}
