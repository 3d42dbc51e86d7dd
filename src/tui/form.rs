use crossterm::event::KeyEvent;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::TextArea;

use crate::deck::DeckEvent;
use crate::tui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Question,
    Answer,
}

impl FormField {
    fn other(self) -> Self {
        match self {
            Self::Question => Self::Answer,
            Self::Answer => Self::Question,
        }
    }
}

/// Text inputs backing the add-card dialog.
///
/// The deck controller owns the draft; every edit here is reported back as a
/// draft change event.
pub struct AddCardForm {
    question: TextArea<'static>,
    answer: TextArea<'static>,
    focus: FormField,
}

impl AddCardForm {
    pub fn new(theme: &Theme) -> Self {
        let mut form = Self {
            question: input_area("Enter question"),
            answer: input_area("Enter answer"),
            focus: FormField::Question,
        };
        form.apply_theme(theme);
        form
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn question_input(&self) -> &TextArea<'static> {
        &self.question
    }

    pub fn answer_input(&self) -> &TextArea<'static> {
        &self.answer
    }

    pub fn switch_field(&mut self, theme: &Theme) {
        self.focus = self.focus.other();
        self.apply_theme(theme);
    }

    /// Feed a key to the focused input and report the new text if it changed
    pub fn input(&mut self, key: KeyEvent) -> Option<DeckEvent> {
        let (area, field) = match self.focus {
            FormField::Question => (&mut self.question, FormField::Question),
            FormField::Answer => (&mut self.answer, FormField::Answer),
        };
        if !area.input(key) {
            return None;
        }
        let text = area.lines().join("\n");
        Some(match field {
            FormField::Question => DeckEvent::DraftQuestionChanged(text),
            FormField::Answer => DeckEvent::DraftAnswerChanged(text),
        })
    }

    /// Empty both inputs and focus the question again
    pub fn reset(&mut self, theme: &Theme) {
        self.question = input_area("Enter question");
        self.answer = input_area("Enter answer");
        self.focus = FormField::Question;
        self.apply_theme(theme);
    }

    pub fn apply_theme(&mut self, theme: &Theme) {
        let focus = self.focus;
        for (area, field, label) in [
            (&mut self.question, FormField::Question, " Question "),
            (&mut self.answer, FormField::Answer, " Answer "),
        ] {
            let focused = field == focus;
            area.set_block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border(focused))
                    .title(label),
            );
            area.set_style(theme.base());
            area.set_placeholder_style(theme.muted());
            area.set_cursor_line_style(Style::default());
            area.set_cursor_style(if focused {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            });
        }
    }
}

fn input_area(placeholder: &str) -> TextArea<'static> {
    let mut area = TextArea::default();
    area.set_placeholder_text(placeholder);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn type_text(form: &mut AddCardForm, text: &str) -> Option<DeckEvent> {
        let mut last = None;
        for c in text.chars() {
            last = form.input(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        last
    }

    #[test]
    fn test_typing_reports_focused_field() {
        let theme = Theme::dark();
        let mut form = AddCardForm::new(&theme);

        let event = type_text(&mut form, "Why?");
        assert_eq!(event, Some(DeckEvent::DraftQuestionChanged("Why?".into())));

        form.switch_field(&theme);
        assert_eq!(form.focus(), FormField::Answer);
        let event = type_text(&mut form, "Because");
        assert_eq!(event, Some(DeckEvent::DraftAnswerChanged("Because".into())));
    }

    #[test]
    fn test_backspace_reports_shorter_text() {
        let theme = Theme::dark();
        let mut form = AddCardForm::new(&theme);
        type_text(&mut form, "ab");

        let event = form.input(KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert_eq!(event, Some(DeckEvent::DraftQuestionChanged("a".into())));
    }

    #[test]
    fn test_reset_clears_inputs() {
        let theme = Theme::dark();
        let mut form = AddCardForm::new(&theme);
        type_text(&mut form, "q");
        form.switch_field(&theme);
        type_text(&mut form, "a");

        form.reset(&theme);

        assert_eq!(form.focus(), FormField::Question);
        assert_eq!(form.question_input().lines(), [String::new()]);
        assert_eq!(form.answer_input().lines(), [String::new()]);
    }
}
