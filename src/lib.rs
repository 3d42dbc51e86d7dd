pub mod app;
pub mod cli;
pub mod constants;
pub mod deck;
pub mod runtime;
pub mod tui;
pub mod utils;

pub use app::{load_config, Config};
pub use deck::{Card, CardId, DeckController, DeckEvent, DeckView, Face};
pub use tui::run_ui;
pub use utils::FlashdeckError;
