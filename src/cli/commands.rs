use anyhow::Result;
use colored::Colorize;

use crate::{app::init_config, deck::Card};

use super::{Commands, OutputFormat};

/// Handle CLI subcommands
///
/// Returns `true` when the command was fully handled and the TUI should not start.
pub fn handle_command(command: &Commands, cards: &[Card]) -> Result<bool> {
    match command {
        Commands::Init => {
            println!("Initializing Flashdeck configuration...");
            for path in init_config()? {
                println!("  {} {}", "created".green(), path.display());
            }
            println!("Configuration initialized successfully!");
            Ok(true)
        }
        Commands::Cards { format } => {
            println!("{}", format_cards(cards, *format)?);
            Ok(true)
        }
        Commands::Version => {
            show_version();
            Ok(true)
        }
        Commands::Study => Ok(false), // Continue to the study screen
    }
}

/// Render a deck for printing
pub fn format_cards(cards: &[Card], format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(cards)?,
        OutputFormat::Markdown => cards
            .iter()
            .map(|card| format!("## {}\n\n{}\n", card.question, card.answer))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Text => {
            if cards.is_empty() {
                return Ok("No flashcards yet".to_string());
            }
            cards
                .iter()
                .enumerate()
                .map(|(i, card)| format!("{:>3}. {}\n     {}", i + 1, card.question, card.answer))
                .collect::<Vec<_>>()
                .join("\n")
        }
    };
    Ok(out)
}

/// Show version information
pub fn show_version() {
    println!("Flashdeck v{}", env!("CARGO_PKG_VERSION"));
    println!("   {}", env!("CARGO_PKG_DESCRIPTION"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::default_seed;
    use crate::deck::DeckController;
    use pretty_assertions::assert_eq;

    fn seed_cards() -> Vec<Card> {
        DeckController::from_seed(&default_seed()).cards().to_vec()
    }

    #[test]
    fn test_text_format() {
        let out = format_cards(&seed_cards()[..1], OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "  1. What is React?\n     A JavaScript library for building user interfaces"
        );
        assert_eq!(
            format_cards(&[], OutputFormat::Text).unwrap(),
            "No flashcards yet"
        );
    }

    #[test]
    fn test_json_format_round_trips() {
        let cards = seed_cards();
        let out = format_cards(&cards, OutputFormat::Json).unwrap();
        let parsed: Vec<Card> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, cards);
        assert!(out.contains("\"id\": 1"));
    }

    #[test]
    fn test_markdown_format() {
        let out = format_cards(&seed_cards()[1..2], OutputFormat::Markdown).unwrap();
        assert!(out.starts_with("## What is JSX?\n\n"));
    }

    #[test]
    fn test_study_is_not_handled_here() {
        assert!(!handle_command(&Commands::Study, &[]).unwrap());
    }
}
