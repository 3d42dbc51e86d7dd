// Gateway module for TUI - follows the Train Station Pattern
// All external access must go through this gateway

// Private submodules - not directly accessible from outside
mod app;
mod form;
mod input;
mod layout;
mod render;
mod theme;
mod ui;
mod widgets;

// Public re-exports - the ONLY way to access TUI functionality
pub use app::{App, Step};
pub use form::{AddCardForm, FormField};
pub use input::{InputAction, InputHandler};
pub use layout::AppLayout;
pub use render::render_ui;
pub use theme::{Theme, ThemeManager};
pub use ui::run_ui;
