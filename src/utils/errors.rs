use thiserror::Error;

/// Main error type for Flashdeck
#[derive(Error, Debug)]
pub enum FlashdeckError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Config parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Flashdeck requires an interactive terminal")]
    NoTerminal,
}
