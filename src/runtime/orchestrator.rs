use anyhow::Result;
use tracing::{info, warn};

use crate::{
    app::{load_config, load_config_file, Config},
    cli::{handle_command, Cli},
    deck::DeckController,
    tui::{run_ui, App},
};

/// Main runtime orchestrator
pub struct Orchestrator {
    cli: Cli,
    config: Config,
}

impl Orchestrator {
    /// Create a new orchestrator from CLI args
    pub fn new(cli: Cli) -> Result<Self> {
        let config = if let Some(config_path) = &cli.config {
            // An explicit file must load; no silent fallback
            load_config_file(config_path)?
        } else {
            match load_config() {
                Ok(cfg) => cfg,
                Err(e) => {
                    warn!("Failed to load config: {:#}. Using defaults.", e);
                    eprintln!("Failed to load config: {:#}. Using defaults.", e);
                    Config::default()
                }
            }
        };

        let config = apply_overrides(config, &cli)?;

        Ok(Self { cli, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the starting deck from configuration
    pub fn build_deck(&self) -> DeckController {
        DeckController::from_seed(&self.config.deck.seed)
    }

    /// Run the orchestrator
    pub async fn run(self) -> Result<()> {
        let deck = self.build_deck();

        // Handle subcommands
        if let Some(command) = &self.cli.command {
            if handle_command(command, deck.cards())? {
                return Ok(()); // Command handled, exit
            }
        }

        info!(
            cards = deck.total(),
            theme = %self.config.ui.theme,
            flip_delay_ms = self.config.ui.flip_delay_ms,
            "Starting study session"
        );

        let app = App::new(deck, &self.config.ui);
        run_ui(app).await
    }
}

/// Command line flags win over every config source
fn apply_overrides(mut config: Config, cli: &Cli) -> Result<Config> {
    if let Some(theme) = &cli.theme {
        config.ui.theme = theme.clone();
    }
    if let Some(delay) = cli.flip_delay_ms {
        config.ui.flip_delay_ms = delay;
    }
    if cli.no_mouse {
        config.ui.mouse = false;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from(["flashdeck", "--theme", "high_contrast", "--no-mouse"]);
        let config = apply_overrides(Config::default(), &cli).unwrap();
        assert_eq!(config.ui.theme, "high_contrast");
        assert!(!config.ui.mouse);
        assert_eq!(config.ui.flip_delay_ms, 300);
    }

    #[test]
    fn test_invalid_override_rejected() {
        let cli = Cli::parse_from(["flashdeck", "--theme", "neon"]);
        assert!(apply_overrides(Config::default(), &cli).is_err());
    }

    #[test]
    fn test_explicit_config_file_builds_deck() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.toml");
        std::fs::write(
            &path,
            "[[deck.seed]]\nquestion = \"2 + 2?\"\nanswer = \"4\"\n",
        )
        .unwrap();

        let cli = Cli::parse_from(["flashdeck", "--config", path.to_str().unwrap()]);
        let orchestrator = Orchestrator::new(cli).unwrap();
        let deck = orchestrator.build_deck();
        assert_eq!(deck.total(), 1);
        assert_eq!(deck.current_card().unwrap().answer, "4");
        assert_eq!(orchestrator.config().ui.theme, "dark");
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["flashdeck", "--config", "/nonexistent/flashdeck.toml"]);
        assert!(Orchestrator::new(cli).is_err());
    }
}
