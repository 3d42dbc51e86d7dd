// Gateway module for the deck - follows the Train Station Pattern
// All external access must go through this gateway

mod card;
mod controller;
mod draft;
mod face;

pub use card::{Card, CardId, IdGenerator, SeedCard};
pub use controller::{AddOutcome, DeckController, DeckEvent, DeckView};
pub use draft::Draft;
pub use face::Face;
