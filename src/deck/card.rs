use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a card, unique for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub question: String,
    pub answer: String,
}

impl Card {
    /// Build a card from raw text, trimming both sides.
    ///
    /// Returns `None` when either side is blank after trimming.
    pub fn new(id: CardId, question: &str, answer: &str) -> Option<Self> {
        let question = question.trim();
        let answer = answer.trim();
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(Self {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
        })
    }
}

/// Hands out card ids from a counter that never goes backwards.
///
/// Deleting cards does not free their ids. Once `u64::MAX` has been handed
/// out the generator is exhausted and yields nothing.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: Option<u64>,
}

impl IdGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Some(first.max(1)),
        }
    }

    /// Start right after the largest id already in use
    pub fn after<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Self {
        let max = cards.into_iter().map(|c| c.id.0).max().unwrap_or(0);
        Self {
            next: max.checked_add(1),
        }
    }

    pub fn peek(&self) -> Option<CardId> {
        self.next.map(CardId)
    }

    pub fn next_id(&mut self) -> Option<CardId> {
        let id = self.next?;
        self.next = id.checked_add(1);
        Some(CardId(id))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Seed card text as it appears in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCard {
    pub question: String,
    pub answer: String,
}

impl SeedCard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_card_trims_text() {
        let card = Card::new(CardId(7), "  What?  ", "\tThat.\n").unwrap();
        assert_eq!(card.question, "What?");
        assert_eq!(card.answer, "That.");
        assert_eq!(card.id, CardId(7));
    }

    #[test]
    fn test_card_rejects_blank_sides() {
        assert!(Card::new(CardId(1), "", "answer").is_none());
        assert!(Card::new(CardId(1), "question", "").is_none());
        assert!(Card::new(CardId(1), "   ", "   ").is_none());
    }

    #[test]
    fn test_id_generator_is_monotonic() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_id(), Some(CardId(1)));
        assert_eq!(ids.next_id(), Some(CardId(2)));
        assert_eq!(ids.peek(), Some(CardId(3)));
    }

    #[test]
    fn test_id_generator_after_existing_cards() {
        let cards = vec![
            Card::new(CardId(4), "a", "b").unwrap(),
            Card::new(CardId(9), "c", "d").unwrap(),
        ];
        let mut ids = IdGenerator::after(&cards);
        assert_eq!(ids.next_id(), Some(CardId(10)));

        let mut empty = IdGenerator::after(&[]);
        assert_eq!(empty.next_id(), Some(CardId(1)));
    }

    #[test]
    fn test_id_generator_exhausts_at_max() {
        let cards = vec![Card::new(CardId(u64::MAX), "a", "b").unwrap()];
        let mut ids = IdGenerator::after(&cards);
        assert_eq!(ids.peek(), None);
        assert_eq!(ids.next_id(), None);

        let mut last = IdGenerator::starting_at(u64::MAX);
        assert_eq!(last.next_id(), Some(CardId(u64::MAX)));
        assert_eq!(last.next_id(), None);
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(CardId(12).to_string(), "#12");
    }
}
