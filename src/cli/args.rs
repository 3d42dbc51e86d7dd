use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flashdeck")]
#[command(version)]
#[command(about = "Page through, flip, add and delete flashcards in the terminal", long_about = None)]
pub struct Cli {
    /// Path to configuration file (replaces global and local config)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs to this file
    #[arg(long, env = "FLASHDECK_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Color theme (dark, light, high_contrast)
    #[arg(long)]
    pub theme: Option<String>,

    /// Milliseconds between turning a card face down and moving on
    #[arg(long)]
    pub flip_delay_ms: Option<u64>,

    /// Don't capture the mouse (keeps terminal text selection working)
    #[arg(long)]
    pub no_mouse: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Study the deck (default)
    Study,
    /// Initialize configuration
    Init,
    /// Print the starting deck
    Cards {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Text,
    /// JSON structured output
    Json,
    /// Markdown formatted output
    Markdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_overrides_and_subcommand() {
        let cli = Cli::parse_from([
            "flashdeck",
            "--theme",
            "light",
            "--flip-delay-ms",
            "0",
            "--no-mouse",
            "cards",
            "--format",
            "json",
        ]);
        assert_eq!(cli.theme.as_deref(), Some("light"));
        assert_eq!(cli.flip_delay_ms, Some(0));
        assert!(cli.no_mouse);
        assert_eq!(
            cli.command,
            Some(Commands::Cards {
                format: OutputFormat::Json
            })
        );
    }

    #[test]
    fn test_no_subcommand_means_study() {
        let cli = Cli::parse_from(["flashdeck"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }
}
