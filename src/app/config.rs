use anyhow::{Context, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{
    default_seed, CONFIG_FILE_NAME, DEFAULT_FLIP_DELAY_MS, ENV_PREFIX, LOCAL_CONFIG_DIR,
    MAX_FLIP_DELAY_MS, THEME_NAMES,
};
use crate::deck::SeedCard;
use crate::utils::FlashdeckError;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// UI configuration
    #[serde(default)]
    pub ui: UIConfig,

    /// Starting deck
    #[serde(default)]
    pub deck: DeckConfig,
}

/// UI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UIConfig {
    /// Color theme
    pub theme: String,
    /// Delay between turning a card face down and moving to the next one
    pub flip_delay_ms: u64,
    /// Capture the mouse so the card can be clicked
    pub mouse: bool,
    /// Show the key reference under the controls
    pub show_help: bool,
}

impl Default for UIConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            flip_delay_ms: DEFAULT_FLIP_DELAY_MS,
            mouse: true,
            show_help: true,
        }
    }
}

/// Deck configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Cards present when a session starts
    #[serde(default = "default_seed")]
    pub seed: Vec<SeedCard>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

impl Config {
    /// Check values that parse fine but make no sense
    pub fn validate(&self) -> Result<(), FlashdeckError> {
        if !THEME_NAMES.contains(&self.ui.theme.as_str()) {
            return Err(FlashdeckError::ConfigError(format!(
                "unknown theme '{}' (expected one of: {})",
                self.ui.theme,
                THEME_NAMES.join(", ")
            )));
        }
        if self.ui.flip_delay_ms > MAX_FLIP_DELAY_MS {
            return Err(FlashdeckError::ConfigError(format!(
                "flip_delay_ms must be at most {}, got {}",
                MAX_FLIP_DELAY_MS, self.ui.flip_delay_ms
            )));
        }
        Ok(())
    }
}

/// Load configuration from multiple sources
pub fn load_config() -> Result<Config> {
    let global_config = get_config_dir()?.join(CONFIG_FILE_NAME);
    let local_config = PathBuf::from(LOCAL_CONFIG_DIR).join(CONFIG_FILE_NAME);
    load_config_from(Some(&global_config), &local_config)
}

/// Layer defaults, the global file, the local file and the environment
pub fn load_config_from(global_config: Option<&Path>, local_config: &Path) -> Result<Config> {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if let Some(global) = global_config.filter(|p| p.exists()) {
        figment = figment.merge(Toml::file(global));
    }

    if local_config.exists() {
        figment = figment.merge(Toml::file(local_config));
    }

    // FLASHDECK_UI__THEME=light sets ui.theme
    figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment
        .extract()
        .context("Failed to load configuration")?;
    config.validate()?;
    Ok(config)
}

/// Read exactly one config file, ignoring every other source
pub fn load_config_file(path: &Path) -> Result<Config> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config: Config = toml::from_str(&toml_str).map_err(FlashdeckError::from)?;
    config.validate()?;
    Ok(config)
}

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "flashdeck") {
        let config_dir = proj_dirs.config_dir();
        std::fs::create_dir_all(config_dir)?;
        Ok(config_dir.to_path_buf())
    } else {
        // Fallback to home directory
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .context("Could not determine home directory")?;
        let config_dir = PathBuf::from(home).join(".config").join("flashdeck");
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }
}

/// Save configuration to file
pub fn save_config(config: &Config, path: Option<PathBuf>) -> Result<()> {
    let path = if let Some(p) = path {
        p
    } else {
        get_config_dir()?.join(CONFIG_FILE_NAME)
    };

    let toml_string = toml::to_string_pretty(config)?;
    std::fs::write(&path, toml_string)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

const EXAMPLE_LOCAL_CONFIG: &str = r#"# Flashdeck Project Configuration
# This file overrides global settings for this directory

[ui]
theme = "dark"          # dark, light or high_contrast
flip_delay_ms = 300
mouse = true
show_help = true

[[deck.seed]]
question = "What does `cargo check` do?"
answer = "Type-checks the crate without producing a binary"

[[deck.seed]]
question = "What is a lifetime?"
answer = "The region of code for which a reference is valid"
"#;

/// Create the default global config and an example local config
pub fn init_config() -> Result<Vec<PathBuf>> {
    let config_file = get_config_dir()?.join(CONFIG_FILE_NAME);
    let local_example = PathBuf::from(LOCAL_CONFIG_DIR).join("config.toml.example");
    init_config_at(&config_file, &local_example)
}

/// Write whichever of the two files is missing and return the ones written
pub fn init_config_at(config_file: &Path, local_example: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if !config_file.exists() {
        save_config(&Config::default(), Some(config_file.to_path_buf()))?;
        written.push(config_file.to_path_buf());
    }

    if !local_example.exists() {
        if let Some(parent) = local_example.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(local_example, EXAMPLE_LOCAL_CONFIG)?;
        written.push(local_example.to_path_buf());
    }

    Ok(written)
}
