use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::constants::{CARD_HEIGHT, CARD_MAX_WIDTH, DIALOG_HEIGHT, DIALOG_WIDTH};

/// Screen regions, shared by rendering and mouse hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    /// The clickable card itself, centred in its region
    pub card: Rect,
    pub controls: Rect,
    pub help: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, show_help: bool) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),                 // Header
                Constraint::Min(5),                    // Card
                Constraint::Length(3),                 // Controls
                Constraint::Length(show_help.into()),  // Key reference
                Constraint::Length(1),                 // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            card: centered(chunks[1], CARD_MAX_WIDTH, CARD_HEIGHT),
            controls: chunks[2],
            help: chunks[3],
            status: chunks[4],
        }
    }

    pub fn card_contains(&self, column: u16, row: u16) -> bool {
        self.card.contains(Position::new(column, row))
    }
}

/// Area of the add-card dialog
pub fn dialog_area(area: Rect) -> Rect {
    centered(area, DIALOG_WIDTH, DIALOG_HEIGHT)
}

/// A rect of at most `width` x `height`, centred in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
