use flashdeck::constants::default_seed;
use flashdeck::deck::{AddOutcome, CardId, DeckController, DeckEvent, Face};
use pretty_assertions::assert_eq;

#[test]
fn test_study_session_walkthrough() {
    let mut deck = DeckController::from_seed(&default_seed());
    assert_eq!(deck.total(), 3);
    assert_eq!(deck.current_index(), Some(0));
    assert_eq!(deck.face(), Face::Question);

    deck.dispatch(DeckEvent::FlipClicked);
    assert_eq!(
        deck.view().visible_text(),
        Some("A JavaScript library for building user interfaces")
    );

    deck.dispatch(DeckEvent::NextClicked);
    assert_eq!(deck.current_index(), Some(1));
    assert_eq!(deck.face(), Face::Question);
    assert_eq!(deck.view().visible_text(), Some("What is JSX?"));

    assert_eq!(deck.add_card("X?", "Y."), AddOutcome::Added(CardId(4)));
    assert_eq!(deck.total(), 4);
    assert_eq!(deck.current_index(), Some(1));

    deck.dispatch(DeckEvent::DeleteClicked);
    assert_eq!(deck.total(), 3);
    assert_eq!(deck.current_index(), Some(1));
    assert_eq!(deck.view().visible_text(), Some("What is a Component?"));
    assert!(!deck.is_flipped());
}

#[test]
fn test_form_driven_add_and_delete_to_empty() {
    let mut deck = DeckController::from_seed(&default_seed());

    for _ in 0..3 {
        deck.dispatch(DeckEvent::DeleteClicked);
    }
    assert!(deck.is_empty());
    assert_eq!(deck.current_index(), None);
    assert_eq!(deck.view().position, 0);

    deck.dispatch(DeckEvent::AddDialogOpened);
    deck.dispatch(DeckEvent::DraftQuestionChanged("  Capital of France?  ".into()));
    deck.dispatch(DeckEvent::DraftAnswerChanged("Paris".into()));
    assert!(deck.view().dialog_open);
    assert_eq!(deck.submit_draft(), AddOutcome::Added(CardId(4)));

    let view = deck.view();
    assert!(!view.dialog_open);
    assert_eq!(view.position, 1);
    assert_eq!(view.total, 1);
    assert_eq!(view.visible_text(), Some("Capital of France?"));
    assert!(view.draft.is_empty());
}
