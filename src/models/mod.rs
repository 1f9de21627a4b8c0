pub mod card;
pub mod card_form;
pub mod deck;
pub mod viewer;

pub use card::{Card, CardImage, CardPatch};
pub use card_form::{CardForm, Draft, FormMode, SaveOutcome};
pub use deck::DeckStore;
pub use viewer::{CardViewer, Face, FlipState};
