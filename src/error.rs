//! Error types shared by the persistence layer and the deck store.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// The stored blob exists but does not match the card schema.
    #[error("stored deck is unreadable: {0}")]
    Read(#[source] serde_json::Error),

    #[error("failed to serialize deck: {0}")]
    Write(#[source] serde_json::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("simulated write failure")]
    Simulated,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DeckError {
    #[error("card index {index} is out of range for a deck of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, StorageError>;
