use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::deck::{DeckView, Face};
use crate::tui::theme::Theme;

/// The focused card, showing whichever face is up
pub struct CardWidget<'a> {
    pub view: DeckView<'a>,
    pub theme: &'a Theme,
}

impl<'a> Widget for CardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let face_color = match self.view.face {
            Face::Question => colors.question_face.to_color(),
            Face::Answer => colors.answer_face.to_color(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(face_color))
            .title_top(
                Line::from(Span::styled(
                    format!(" {} ", self.view.face.label()),
                    self.theme.muted(),
                ))
                .alignment(Alignment::Right),
            )
            .style(Style::default().bg(colors.card_background.to_color()));

        let inner = block.inner(area);
        block.render(area, buf);

        let text = self.view.visible_text().unwrap_or_default();
        let mut text_style = Style::default().fg(colors.text_primary.to_color());
        if self.view.face == Face::Question {
            text_style = text_style.add_modifier(Modifier::BOLD);
        }

        // Vertically centre the wrapped text
        let width = inner.width.max(1) as usize;
        let line_count = (text.chars().count() / width + 1) as u16;
        let top = inner.height.saturating_sub(line_count) / 2;
        let text_area = Rect {
            y: inner.y + top,
            height: inner.height - top,
            ..inner
        };

        Paragraph::new(Span::styled(text, text_style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text_area, buf);
    }
}

/// Shown in place of the card when the deck has nothing in it
pub struct EmptyDeckWidget<'a> {
    pub theme: &'a Theme,
}

impl<'a> Widget for EmptyDeckWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("No flashcards yet", self.theme.title())),
            Line::from(""),
            Line::from(vec![
                Span::styled("[a] ", self.theme.key_hint()),
                Span::raw("Add Your First Card"),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(self.theme.border(false)),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::default_seed;
    use crate::deck::DeckController;

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_card_shows_visible_face() {
        let mut deck = DeckController::from_seed(&default_seed());
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 60, 8);

        let mut buf = Buffer::empty(area);
        CardWidget { view: deck.view(), theme: &theme }.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("What is React?"));
        assert!(text.contains("Question"));

        deck.flip();
        let mut buf = Buffer::empty(area);
        CardWidget { view: deck.view(), theme: &theme }.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("Answer"));
        assert!(!text.contains("What is React?"));
    }

    #[test]
    fn test_empty_deck_offers_add() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        EmptyDeckWidget { theme: &theme }.render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("No flashcards yet"));
        assert!(text.contains("Add Your First Card"));
    }
}
