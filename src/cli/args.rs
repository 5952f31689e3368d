//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for timemachine
#[derive(Parser, Debug)]
#[command(
    name = "timemachine",
    version,
    about = "Send one prompt to models from 2018 to today and compare the answers"
)]
pub struct Cli {
    /// Workspace root directory; defaults to current directory
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Configuration file path; overrides workspace discovery
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve {
        /// Address to bind; overrides [server].host
        #[arg(long)]
        host: Option<String>,

        /// Port to bind; overrides [server].port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Send a single prompt to every backend and print the answers
    Ask {
        /// The prompt to send
        prompt: Vec<String>,

        /// Print the results as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the configured backend line-up
    Models,

    /// Write a default timemachine.toml into the workspace
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Serve {
            host: None,
            port: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["timemachine"]);
        assert!(cli.command.is_none());
        assert!(cli.workspace.is_none());
    }

    #[test]
    fn test_ask_joins_words() {
        let cli = Cli::parse_from(["timemachine", "ask", "Once", "upon", "a", "time"]);
        match cli.command {
            Some(Commands::Ask { prompt, json }) => {
                assert_eq!(prompt.join(" "), "Once upon a time");
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_serve_overrides_and_global_flags() {
        let cli = Cli::parse_from([
            "timemachine",
            "serve",
            "--port",
            "8080",
            "--workspace",
            "/tmp/game",
        ]);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/game")));
        match cli.command {
            Some(Commands::Serve { host, port }) => {
                assert_eq!(host, None);
                assert_eq!(port, Some(8080));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
