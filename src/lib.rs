pub mod config;
pub mod database;
pub mod error;
pub mod export;
pub mod models;

pub use error::{DeckError, StorageError};
pub use models::{Card, CardForm, CardImage, CardPatch, CardViewer, DeckStore};
