//! JSON import/export for the deck.
//! Writes the cards to a standalone file and reads them back.

use crate::error::Result;
use crate::models::Card;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Exports the cards to a pretty-printed JSON file at `path`.
pub fn export_json_to_path(cards: &[Card], path: &Path) -> Result<()> {
    let json_string = serde_json::to_string_pretty(cards)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;
    log::info!("exported {} cards to {}", cards.len(), path.display());
    Ok(())
}

/// Reads cards from a JSON file written by [`export_json_to_path`].
pub fn import_json(path: &Path) -> Result<Vec<Card>> {
    let file = File::open(path)?;
    let cards: Vec<Card> = serde_json::from_reader(BufReader::new(file))?;
    log::info!("read {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

/// Default export file name, e.g. `flashcards-2026-10-17.json`.
pub fn default_export_name(date: chrono::NaiveDate) -> String {
    format!("flashcards-{}.json", date.format("%Y-%m-%d"))
}
