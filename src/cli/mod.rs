//! Command-line interface module
//!
//! Argument parsing plus one handler per subcommand.

pub mod args;
pub mod ask;
pub mod init;
pub mod models;
pub mod serve;

pub use args::{Cli, Commands};
pub use ask::handle_ask_command;
pub use init::handle_init_command;
pub use models::handle_models_command;
pub use serve::handle_serve_command;
