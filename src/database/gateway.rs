//! Reads and writes the whole deck as one JSON blob under a fixed key.

use super::kv::KeyValueStore;
use crate::error::{Result, StorageError};
use crate::models::Card;

pub const STORAGE_KEY: &str = "@flashcards";

pub struct DeckGateway<S> {
    store: S,
}

impl<S: KeyValueStore> DeckGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads the stored deck.
    ///
    /// `Ok(None)` means nothing was ever saved. A blob that does not parse
    /// into cards is reported as `StorageError::Read`.
    pub fn load(&self) -> Result<Option<Vec<Card>>> {
        let Some(raw) = self.store.get(STORAGE_KEY)? else {
            return Ok(None);
        };
        let cards = serde_json::from_str(&raw).map_err(StorageError::Read)?;
        Ok(Some(cards))
    }

    /// Serializes the full deck and overwrites the stored value.
    pub fn save(&self, cards: &[Card]) -> Result<()> {
        let raw = serde_json::to_string(cards).map_err(StorageError::Write)?;
        self.store.set(STORAGE_KEY, &raw)?;
        log::debug!("saved {} cards under {}", cards.len(), STORAGE_KEY);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::db;
    use crate::database::kv::{MemoryStore, SqliteStore};

    #[test]
    fn test_load_absent() {
        let gateway = DeckGateway::new(MemoryStore::new());
        assert_eq!(gateway.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let gateway = DeckGateway::new(MemoryStore::new());
        let cards = vec![Card::new("alcantarilla", "Sewer"), Card::new("avaro", "Greedy")];

        gateway.save(&cards).unwrap();

        assert_eq!(gateway.load().unwrap(), Some(cards));
    }

    #[test]
    fn test_empty_deck_is_not_absent() {
        let gateway = DeckGateway::new(MemoryStore::new());
        gateway.save(&[]).unwrap();
        assert_eq!(gateway.load().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_corrupt_blob_is_read_error() {
        let gateway = DeckGateway::new(MemoryStore::with_value(STORAGE_KEY, "{not json"));
        assert!(matches!(gateway.load(), Err(StorageError::Read(_))));
    }

    #[test]
    fn test_wrong_shape_is_read_error() {
        let gateway = DeckGateway::new(MemoryStore::with_value(
            STORAGE_KEY,
            r#"{"front":"a","back":"b"}"#,
        ));
        assert!(matches!(gateway.load(), Err(StorageError::Read(_))));
    }

    #[test]
    fn test_write_failure_leaves_previous_deck() {
        let gateway = DeckGateway::new(MemoryStore::new());
        let first = vec![Card::new("ileso", "Unharmed")];
        gateway.save(&first).unwrap();

        gateway.store().set_simulate_write_error(true);
        assert!(gateway.save(&[]).is_err());

        assert_eq!(gateway.load().unwrap(), Some(first));
    }

    #[test]
    fn test_sqlite_backed_gateway() {
        let conn = db::init_in_memory().unwrap();
        let gateway = DeckGateway::new(SqliteStore::from_connection(conn));
        let cards = vec![Card::new("atinar", "To hit the target")];

        gateway.save(&cards).unwrap();

        assert_eq!(gateway.load().unwrap(), Some(cards));
    }
}
