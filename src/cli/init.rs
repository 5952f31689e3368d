use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use timemachine_core::config::TimeMachineConfig;

/// Handle the init command
pub fn handle_init_command(workspace: &Path, force: bool) -> Result<()> {
    println!(
        "{}",
        style("Initialize Prompt Time Machine configuration").blue().bold()
    );
    println!("Workspace: {}", workspace.display());

    match TimeMachineConfig::bootstrap_project(workspace, force)
        .context("failed to initialize configuration files")?
    {
        Some(path) => println!("Created {}", path.display()),
        None => println!(
            "{}",
            style("timemachine.toml already exists; pass --force to overwrite").yellow()
        ),
    }

    Ok(())
}
