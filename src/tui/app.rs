use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::app::UIConfig;
use crate::deck::{AddOutcome, DeckController};
use crate::tui::form::AddCardForm;
use crate::tui::input::InputAction;
use crate::tui::theme::{Theme, ThemeManager};

/// Direction of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

/// A card change waiting for the flip-back to finish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingNavigation {
    step: Step,
    due: Instant,
}

/// Application state
pub struct App {
    /// The deck and everything derived from it
    pub deck: DeckController,
    /// Inputs of the add-card dialog
    pub form: AddCardForm,
    /// Is the app running?
    pub running: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Show the key reference line
    pub show_help: bool,
    /// Mouse capture requested by configuration
    pub mouse_enabled: bool,
    themes: ThemeManager,
    flip_delay: Duration,
    pending: VecDeque<PendingNavigation>,
}

impl App {
    /// Create a new app instance
    pub fn new(deck: DeckController, ui: &UIConfig) -> Self {
        let themes = ThemeManager::with_theme(&ui.theme);
        let form = AddCardForm::new(themes.current());
        Self {
            deck,
            form,
            running: true,
            status_message: None,
            show_help: ui.show_help,
            mouse_enabled: ui.mouse,
            themes,
            flip_delay: Duration::from_millis(ui.flip_delay_ms),
            pending: VecDeque::new(),
        }
    }

    pub fn theme(&self) -> &Theme {
        self.themes.current()
    }

    /// Navigations queued but not yet applied
    pub fn pending_navigations(&self) -> usize {
        self.pending.len()
    }

    /// Apply one input action at time `now`
    pub fn handle_action(&mut self, action: InputAction, now: Instant) {
        if action != InputAction::None {
            self.clear_status();
        }
        match action {
            InputAction::Next => self.request_navigation(Step::Next, now),
            InputAction::Previous => self.request_navigation(Step::Previous, now),
            InputAction::Flip => self.deck.flip(),
            InputAction::Delete => {
                if let Some(card) = self.deck.delete_card() {
                    self.set_status(format!("Deleted card {}", card.id));
                }
            }
            InputAction::OpenAddDialog => {
                self.form.reset(self.themes.current());
                self.deck.open_dialog();
            }
            InputAction::CycleTheme => {
                self.themes.cycle_theme();
                self.form.apply_theme(self.themes.current());
                self.set_status(format!("Theme: {}", self.themes.current().name));
            }
            InputAction::ToggleHelp => self.show_help = !self.show_help,
            InputAction::Quit => self.quit(),
            InputAction::Submit => self.submit_card(),
            InputAction::Cancel => {
                self.deck.close_dialog();
                self.form.reset(self.themes.current());
            }
            InputAction::SwitchField => self.form.switch_field(self.themes.current()),
            InputAction::Edit(key) => {
                if let Some(event) = self.form.input(key) {
                    self.deck.dispatch(event);
                }
            }
            InputAction::None => {}
        }
    }

    /// A click on the card area flips it, unless the dialog covers it
    pub fn click_card(&mut self) {
        if !self.deck.is_dialog_open() {
            self.deck.flip();
        }
    }

    /// Turn the card face down now and move once the delay has passed.
    ///
    /// Requests queue up and settle in the order they were made.
    pub fn request_navigation(&mut self, step: Step, now: Instant) {
        if self.deck.is_empty() {
            return;
        }
        self.deck.unflip();
        if self.flip_delay.is_zero() && self.pending.is_empty() {
            self.apply_step(step);
            return;
        }
        self.pending.push_back(PendingNavigation {
            step,
            due: now + self.flip_delay,
        });
        debug!(?step, queued = self.pending.len(), "Navigation queued");
    }

    /// Apply every queued navigation that is due by `now`
    pub fn tick(&mut self, now: Instant) {
        while let Some(next) = self.pending.front() {
            if next.due > now {
                break;
            }
            let step = next.step;
            self.pending.pop_front();
            self.apply_step(step);
        }
    }

    fn apply_step(&mut self, step: Step) {
        match step {
            Step::Next => self.deck.next(),
            Step::Previous => self.deck.previous(),
        }
    }

    fn submit_card(&mut self) {
        // Blank fields leave the dialog open without comment
        if let AddOutcome::Added(id) = self.deck.submit_draft() {
            info!(%id, total = self.deck.total(), "Card added");
            self.form.reset(self.themes.current());
            self.set_status(format!("Added card {}", id));
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }
}
