use std::collections::HashSet;

use tracing::{debug, warn};

use super::card::{Card, CardId, IdGenerator, SeedCard};
use super::draft::Draft;
use super::face::Face;

/// Input events the presentation layer feeds into the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckEvent {
    NextClicked,
    PreviousClicked,
    FlipClicked,
    CardAreaClicked,
    AddCardSubmitted { question: String, answer: String },
    DeleteClicked,
    DraftQuestionChanged(String),
    DraftAnswerChanged(String),
    AddDialogOpened,
    AddDialogClosed,
}

/// Result of an add attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added(CardId),
    /// Question or answer was blank; nothing changed
    Skipped,
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct DeckView<'a> {
    pub card: Option<&'a Card>,
    pub face: Face,
    pub position: usize,
    pub total: usize,
    pub draft: &'a Draft,
    pub dialog_open: bool,
}

impl<'a> DeckView<'a> {
    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }

    pub fn is_flipped(&self) -> bool {
        self.face.is_flipped()
    }

    /// Text on the visible face of the focused card
    pub fn visible_text(&self) -> Option<&'a str> {
        self.card.map(|card| match self.face {
            Face::Question => card.question.as_str(),
            Face::Answer => card.answer.as_str(),
        })
    }
}

/// Owns the deck, cursor, face, draft and dialog flag.
///
/// The cursor is always a valid index while the deck is non-empty, and the
/// face is reset to [`Face::Question`] whenever the cursor moves.
#[derive(Debug, Clone)]
pub struct DeckController {
    cards: Vec<Card>,
    cursor: usize,
    face: Face,
    draft: Draft,
    dialog_open: bool,
    ids: IdGenerator,
}

impl DeckController {
    /// Create a controller over existing cards, focused on the first one.
    ///
    /// Text is re-trimmed; cards with a blank side or an id already taken
    /// by an earlier card are dropped with a warning.
    pub fn new(cards: Vec<Card>) -> Self {
        let mut seen = HashSet::with_capacity(cards.len());
        let cards: Vec<Card> = cards
            .into_iter()
            .filter_map(|card| {
                let Some(card) = Card::new(card.id, &card.question, &card.answer) else {
                    warn!(id = %card.id, "Dropping card with blank question or answer");
                    return None;
                };
                if !seen.insert(card.id) {
                    warn!(id = %card.id, "Dropping card with duplicate id");
                    return None;
                }
                Some(card)
            })
            .collect();
        let ids = IdGenerator::after(&cards);
        Self {
            cards,
            cursor: 0,
            face: Face::Question,
            draft: Draft::default(),
            dialog_open: false,
            ids,
        }
    }

    /// Build the starting deck from seed text, numbering cards from 1.
    ///
    /// Entries with a blank question or answer are skipped.
    pub fn from_seed(seed: &[SeedCard]) -> Self {
        let cards = seed
            .iter()
            .filter(|entry| {
                let blank = entry.question.trim().is_empty() || entry.answer.trim().is_empty();
                if blank {
                    warn!(question = %entry.question, "Skipping blank seed card");
                }
                !blank
            })
            .zip(1..)
            .filter_map(|(entry, n)| Card::new(CardId(n), &entry.question, &entry.answer))
            .collect();
        Self::new(cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn total(&self) -> usize {
        self.cards.len()
    }

    /// Index of the focused card, `None` on an empty deck
    pub fn current_index(&self) -> Option<usize> {
        (!self.cards.is_empty()).then_some(self.cursor)
    }

    /// One-based position of the focused card, 0 on an empty deck
    pub fn position(&self) -> usize {
        self.current_index().map_or(0, |i| i + 1)
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn is_flipped(&self) -> bool {
        self.face.is_flipped()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn view(&self) -> DeckView<'_> {
        DeckView {
            card: self.current_card(),
            face: self.face,
            position: self.position(),
            total: self.total(),
            draft: &self.draft,
            dialog_open: self.dialog_open,
        }
    }

    /// Focus the following card, wrapping from last to first
    pub fn next(&mut self) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        self.focus((self.cursor + 1) % len);
    }

    /// Focus the preceding card, wrapping from first to last
    pub fn previous(&mut self) {
        let len = self.cards.len();
        if len == 0 {
            return;
        }
        self.focus((self.cursor + len - 1) % len);
    }

    pub fn flip(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.face = self.face.flipped();
        debug!(index = self.cursor, face = ?self.face, "Flipped card");
    }

    /// Show the question side without moving the cursor
    pub fn unflip(&mut self) {
        self.face = Face::Question;
    }

    /// Append a card built from trimmed text.
    ///
    /// Blank input leaves every piece of state untouched. On success the
    /// draft is cleared and the dialog closed; the cursor stays where it is.
    pub fn add_card(&mut self, question: &str, answer: &str) -> AddOutcome {
        let Some(id) = self.ids.peek() else {
            warn!("Card ids exhausted, not adding");
            return AddOutcome::Skipped;
        };
        let Some(card) = Card::new(id, question, answer) else {
            debug!("Ignoring add with blank question or answer");
            return AddOutcome::Skipped;
        };
        self.ids.next_id();
        debug!(%id, total = self.cards.len() + 1, "Added card");
        self.cards.push(card);
        self.draft.clear();
        self.dialog_open = false;
        AddOutcome::Added(id)
    }

    /// Submit whatever is in the draft
    pub fn submit_draft(&mut self) -> AddOutcome {
        if !self.draft.is_submittable() {
            debug!("Draft not ready to submit");
            return AddOutcome::Skipped;
        }
        let Draft { question, answer } = self.draft.clone();
        self.add_card(&question, &answer)
    }

    /// Remove the focused card and return it.
    ///
    /// The card after it slides into the same slot; removing the last card
    /// moves the cursor back by one.
    pub fn delete_card(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        let removed = self.cards.remove(self.cursor);
        if self.cursor >= self.cards.len() {
            self.cursor = self.cards.len().saturating_sub(1);
        }
        self.face = Face::Question;
        debug!(id = %removed.id, remaining = self.cards.len(), "Deleted card");
        Some(removed)
    }

    pub fn open_dialog(&mut self) {
        self.dialog_open = true;
    }

    /// Close the add dialog, discarding the draft
    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.draft.clear();
    }

    pub fn set_draft_question(&mut self, text: impl Into<String>) {
        self.draft.question = text.into();
    }

    pub fn set_draft_answer(&mut self, text: impl Into<String>) {
        self.draft.answer = text.into();
    }

    /// Apply one presentation event
    pub fn dispatch(&mut self, event: DeckEvent) {
        match event {
            DeckEvent::NextClicked => self.next(),
            DeckEvent::PreviousClicked => self.previous(),
            DeckEvent::FlipClicked | DeckEvent::CardAreaClicked => self.flip(),
            DeckEvent::AddCardSubmitted { question, answer } => {
                self.add_card(&question, &answer);
            }
            DeckEvent::DeleteClicked => {
                self.delete_card();
            }
            DeckEvent::DraftQuestionChanged(text) => self.set_draft_question(text),
            DeckEvent::DraftAnswerChanged(text) => self.set_draft_answer(text),
            DeckEvent::AddDialogOpened => self.open_dialog(),
            DeckEvent::AddDialogClosed => self.close_dialog(),
        }
    }

    fn focus(&mut self, index: usize) {
        self.cursor = index;
        self.face = Face::Question;
        debug!(index, total = self.cards.len(), "Focused card");
    }
}
