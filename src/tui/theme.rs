use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use crate::constants::THEME_NAMES;

/// Theme configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    /// Config name (`dark`, `light`, `high_contrast`)
    pub key: String,
    /// Name shown to the user
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeColors {
    // Primary colors
    pub background: ColorValue,
    pub foreground: ColorValue,

    // UI elements
    pub border: ColorValue,
    pub border_focused: ColorValue,
    pub header: ColorValue,
    pub status_bar: ColorValue,

    // Text colors
    pub text_primary: ColorValue,
    pub text_secondary: ColorValue,
    pub text_highlight: ColorValue,

    // Card faces
    pub question_face: ColorValue,
    pub answer_face: ColorValue,
    pub card_background: ColorValue,

    // Status colors
    pub error: ColorValue,
    pub info: ColorValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorValue {
    Rgb { r: u8, g: u8, b: u8 },
    Named(String),
}

impl ColorValue {
    pub fn to_color(&self) -> Color {
        match self {
            ColorValue::Rgb { r, g, b } => Color::Rgb(*r, *g, *b),
            ColorValue::Named(name) => match name.as_str() {
                "black" => Color::Black,
                "red" => Color::Red,
                "green" => Color::Green,
                "yellow" => Color::Yellow,
                "blue" => Color::Blue,
                "magenta" => Color::Magenta,
                "cyan" => Color::Cyan,
                "white" => Color::White,
                "gray" | "grey" => Color::Gray,
                "dark_gray" | "dark_grey" => Color::DarkGray,
                _ => Color::White,
            },
        }
    }
}

fn named(name: &str) -> ColorValue {
    ColorValue::Named(name.to_string())
}

fn rgb(r: u8, g: u8, b: u8) -> ColorValue {
    ColorValue::Rgb { r, g, b }
}

impl Theme {
    /// Create the default dark theme
    pub fn dark() -> Self {
        Self {
            key: "dark".to_string(),
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: rgb(20, 20, 20),
                foreground: rgb(230, 230, 230),

                border: named("dark_gray"),
                border_focused: named("cyan"),
                header: named("cyan"),
                status_bar: named("black"),

                text_primary: named("white"),
                text_secondary: named("gray"),
                text_highlight: named("yellow"),

                question_face: named("cyan"),
                answer_face: named("green"),
                card_background: rgb(32, 32, 36),

                error: named("red"),
                info: named("cyan"),
            },
        }
    }

    /// Create a light theme
    pub fn light() -> Self {
        Self {
            key: "light".to_string(),
            name: "Light".to_string(),
            colors: ThemeColors {
                background: rgb(250, 250, 250),
                foreground: rgb(30, 30, 30),

                border: rgb(200, 200, 200),
                border_focused: rgb(0, 100, 200),
                header: rgb(0, 100, 200),
                status_bar: rgb(240, 240, 240),

                text_primary: named("black"),
                text_secondary: rgb(100, 100, 100),
                text_highlight: rgb(200, 100, 0),

                question_face: rgb(0, 50, 200),
                answer_face: rgb(0, 150, 50),
                card_background: rgb(255, 255, 255),

                error: rgb(200, 0, 0),
                info: rgb(0, 150, 200),
            },
        }
    }

    /// Create a high-contrast theme
    pub fn high_contrast() -> Self {
        Self {
            key: "high_contrast".to_string(),
            name: "High Contrast".to_string(),
            colors: ThemeColors {
                background: named("black"),
                foreground: named("white"),

                border: named("white"),
                border_focused: named("yellow"),
                header: named("yellow"),
                status_bar: named("black"),

                text_primary: named("white"),
                text_secondary: named("cyan"),
                text_highlight: named("yellow"),

                question_face: named("yellow"),
                answer_face: named("magenta"),
                card_background: named("black"),

                error: named("red"),
                info: named("cyan"),
            },
        }
    }

    /// Look a theme up by its config name
    pub fn by_key(key: &str) -> Option<Self> {
        match key {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "high_contrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }

    pub fn base(&self) -> Style {
        Style::default()
            .fg(self.colors.foreground.to_color())
            .bg(self.colors.background.to_color())
    }

    pub fn border(&self, focused: bool) -> Style {
        let color = if focused {
            &self.colors.border_focused
        } else {
            &self.colors.border
        };
        Style::default().fg(color.to_color())
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.colors.header.to_color())
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.colors.text_secondary.to_color())
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.colors.text_highlight.to_color())
            .add_modifier(Modifier::BOLD)
    }
}

/// Theme manager for handling theme switching
pub struct ThemeManager {
    current_theme: Theme,
    available_themes: Vec<Theme>,
}

impl ThemeManager {
    pub fn new() -> Self {
        Self {
            current_theme: Theme::dark(),
            available_themes: THEME_NAMES.iter().filter_map(|k| Theme::by_key(k)).collect(),
        }
    }

    /// Start on the named theme, falling back to dark
    pub fn with_theme(key: &str) -> Self {
        let mut manager = Self::new();
        manager.set_theme(key);
        manager
    }

    pub fn current(&self) -> &Theme {
        &self.current_theme
    }

    pub fn set_theme(&mut self, key: &str) {
        if let Some(theme) = self.available_themes.iter().find(|t| t.key == key) {
            self.current_theme = theme.clone();
        }
    }

    pub fn cycle_theme(&mut self) {
        let current_index = self
            .available_themes
            .iter()
            .position(|t| t.key == self.current_theme.key)
            .unwrap_or(0);

        let next_index = (current_index + 1) % self.available_themes.len();
        self.current_theme = self.available_themes[next_index].clone();
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
