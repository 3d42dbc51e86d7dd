use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::{dialog_area, AppLayout};
use crate::tui::widgets::{CardWidget, EmptyDeckWidget};

/// Render the main UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let layout = AppLayout::new(frame.area(), app.show_help);

    frame.render_widget(Block::default().style(theme.base()), frame.area());

    render_header(frame, layout.header, app);

    let view = app.deck.view();
    if view.is_empty() {
        frame.render_widget(EmptyDeckWidget { theme }, layout.card);
    } else {
        frame.render_widget(CardWidget { view, theme }, layout.card);
    }

    render_controls(frame, layout.controls, app);

    if app.show_help {
        render_help(frame, layout.help, app);
    }

    render_status_bar(frame, layout.status, app);

    if view.dialog_open {
        render_add_dialog(frame, frame.area(), app);
    }
}

/// Render the header
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let header_text = vec![
        Line::from(Span::styled("Flashcards", theme.title())),
        Line::from(Span::styled(
            "Press space or click the card to flip",
            theme.muted(),
        )),
    ];

    let header = Paragraph::new(header_text).alignment(Alignment::Center);

    frame.render_widget(header, area);
}

/// Render navigation buttons and the position counter
fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let view = app.deck.view();

    let spans = if view.is_empty() {
        vec![
            Span::styled("[a]", theme.key_hint()),
            Span::raw(" Add Your First Card"),
        ]
    } else {
        vec![
            Span::styled("[←]", theme.key_hint()),
            Span::raw(" Previous   "),
            Span::styled(
                format!("{} / {}", view.position, view.total),
                Style::default()
                    .fg(theme.colors.text_primary.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   Next "),
            Span::styled("[→]", theme.key_hint()),
            Span::raw("   "),
            Span::styled("[space]", theme.key_hint()),
            Span::raw(" Flip   "),
            Span::styled("[d]", theme.key_hint()),
            Span::styled(" Delete", Style::default().fg(theme.colors.error.to_color())),
            Span::raw("   "),
            Span::styled("[a]", theme.key_hint()),
            Span::raw(" Add New Card"),
        ]
    };

    let controls = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(theme.border(false)),
        );

    frame.render_widget(controls, area);
}

/// Render the key reference
fn render_help(frame: &mut Frame, area: Rect, app: &App) {
    let help = Paragraph::new(
        "h/l or ←/→ move • space/f flip • d delete • a add • t theme • ? help • q quit",
    )
    .style(app.theme().muted())
    .alignment(Alignment::Center);

    frame.render_widget(help, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let mode = if app.deck.is_dialog_open() {
        " ADD "
    } else {
        " STUDY "
    };

    let status_text = app.status_message.as_deref().unwrap_or("Ready");

    let spans = vec![
        Span::styled(
            mode,
            Style::default()
                .bg(theme.colors.info.to_color())
                .fg(theme.colors.status_bar.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::raw(status_text.to_string()),
        Span::raw(" | "),
        Span::styled(format!("Theme: {}", theme.name), theme.muted()),
        Span::raw(" | "),
        Span::styled("Ctrl+C: quit", theme.muted()),
    ];

    let status_bar = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme.colors.status_bar.to_color()))
        .block(Block::default()); // clears the whole line

    frame.render_widget(status_bar, area);
}

/// Render the add-card dialog over everything else
fn render_add_dialog(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let dialog = dialog_area(area);

    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(" Add New Flashcard ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme.border(true))
        .style(theme.base());
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Question
            Constraint::Length(3), // Answer
            Constraint::Min(1),    // Hints
        ])
        .split(inner);

    frame.render_widget(app.form.question_input(), chunks[0]);
    frame.render_widget(app.form.answer_input(), chunks[1]);

    let hints = Line::from(vec![
        Span::styled("[Enter]", theme.key_hint()),
        Span::raw(" Add Card  "),
        Span::styled("[Tab]", theme.key_hint()),
        Span::raw(" Switch field  "),
        Span::styled("[Esc]", theme.key_hint()),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        chunks[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::UIConfig;
    use crate::constants::default_seed;
    use crate::deck::DeckController;
    use crate::tui::input::InputAction;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(
            DeckController::from_seed(&default_seed()),
            &UIConfig::default(),
        )
    }

    #[test]
    fn test_renders_position_and_question() {
        let screen = draw(&app());
        assert!(screen.contains("Flashcards"));
        assert!(screen.contains("1 / 3"));
        assert!(screen.contains("What is React?"));
        assert!(screen.contains("Ready"));
    }

    #[test]
    fn test_renders_empty_state() {
        let app = App::new(DeckController::new(Vec::new()), &UIConfig::default());
        let screen = draw(&app);
        assert!(screen.contains("No flashcards yet"));
        assert!(!screen.contains(" / "));
    }

    #[test]
    fn test_renders_add_dialog() {
        let mut app = app();
        app.handle_action(InputAction::OpenAddDialog, Instant::now());
        let screen = draw(&app);
        assert!(screen.contains("Add New Flashcard"));
        assert!(screen.contains("Enter question"));
        assert!(screen.contains("Enter answer"));
        assert!(screen.contains(" ADD "));
    }
}
