//! Constants module to avoid magic numbers in the codebase
use crate::deck::SeedCard;

// Timing
pub const UI_REFRESH_INTERVAL_MS: u64 = 50;
pub const DEFAULT_FLIP_DELAY_MS: u64 = 300; // lets the flip-back show before the card changes
pub const MAX_FLIP_DELAY_MS: u64 = 5000;

// Layout
pub const CARD_MAX_WIDTH: u16 = 72;
pub const CARD_HEIGHT: u16 = 12;
pub const DIALOG_WIDTH: u16 = 60;
pub const DIALOG_HEIGHT: u16 = 12;

// Config
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOCAL_CONFIG_DIR: &str = ".flashdeck";
pub const ENV_PREFIX: &str = "FLASHDECK_";

/// The deck every session starts with unless configuration replaces it
pub fn default_seed() -> Vec<SeedCard> {
    vec![
        SeedCard::new(
            "What is React?",
            "A JavaScript library for building user interfaces",
        ),
        SeedCard::new(
            "What is JSX?",
            "A syntax extension for JavaScript that allows you to write HTML-like code in JavaScript",
        ),
        SeedCard::new(
            "What is a Component?",
            "A reusable piece of UI that can contain its own content, logic, and styling",
        ),
    ]
}

// Themes, in cycling order
pub const THEME_NAMES: &[&str] = &["dark", "light", "high_contrast"];
