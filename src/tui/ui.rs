use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::constants::UI_REFRESH_INTERVAL_MS;
use crate::tui::app::App;
use crate::tui::input::InputHandler;
use crate::tui::layout::AppLayout;
use crate::tui::render::render_ui;
use crate::utils::FlashdeckError;

/// Raw mode, alternate screen and optional mouse capture for the lifetime
/// of the view. Dropping it puts the terminal back.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse: bool,
}

impl TerminalGuard {
    fn acquire(mouse: bool) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        } else {
            execute!(stdout, EnterAlternateScreen)?;
        }
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(Self { terminal, mouse })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        if self.mouse {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the terminal UI
pub async fn run_ui(mut app: App) -> Result<()> {
    // Check if we have an interactive terminal
    if !crossterm::tty::IsTty::is_tty(&io::stdout()) {
        eprintln!("Flashdeck needs an interactive terminal; try `flashdeck cards` instead.");
        return Err(FlashdeckError::NoTerminal.into());
    }

    let mut guard = TerminalGuard::acquire(app.mouse_enabled)?;
    let res = run_app(&mut guard.terminal, &mut app);
    drop(guard);

    if let Err(err) = &res {
        warn!("UI loop ended with error: {:?}", err);
    }

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let input = InputHandler::new();
    let poll_interval = Duration::from_millis(UI_REFRESH_INTERVAL_MS);

    while app.running {
        // Draw UI
        terminal.draw(|f| render_ui(f, app))?;

        // Handle input events
        if event::poll(poll_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let action = input.handle_key(key, app.deck.is_dialog_open());
                    debug!(?action, "Key action");
                    app.handle_action(action, Instant::now());
                }
                Event::Mouse(mouse) if app.mouse_enabled => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        let size = terminal.size()?;
                        let layout =
                            AppLayout::new(Rect::new(0, 0, size.width, size.height), app.show_help);
                        if layout.card_contains(mouse.column, mouse.row) {
                            app.click_card();
                        }
                    }
                }
                _ => {}
            }
        }

        // Settle navigations whose flip-back has finished
        app.tick(Instant::now());
    }

    Ok(())
}
