/// CLI argument parsing and command handling - Gateway
mod args;
mod commands;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::{format_cards, handle_command, show_version};
