//! Deck is the ordered set of cards, kept in memory and written through to storage
//!
//! Every successful mutation is immediately followed by a full save. A failed
//! save is logged and otherwise ignored: the in-memory deck stays the source of
//! truth for the rest of the session.

use super::{Card, CardPatch};
use crate::database::{DeckGateway, KeyValueStore};
use crate::error::DeckError;

pub struct DeckStore<S> {
    cards: Vec<Card>,
    gateway: DeckGateway<S>,
    initialized: bool,
}

impl<S: KeyValueStore> DeckStore<S> {
    /// Empty deck. Call [`DeckStore::initialize`] once to load the stored cards.
    pub fn new(store: S) -> Self {
        Self {
            cards: Vec::new(),
            gateway: DeckGateway::new(store),
            initialized: false,
        }
    }

    /// Loads the stored deck. Runs at most once; later calls do nothing.
    ///
    /// A missing or unreadable blob leaves the deck empty.
    pub fn initialize(&mut self) {
        if self.initialized {
            log::debug!("deck already initialized, skipping load");
            return;
        }
        self.initialized = true;

        match self.gateway.load() {
            Ok(Some(cards)) => {
                log::info!("loaded {} cards from storage", cards.len());
                self.cards = cards;
            }
            Ok(None) => log::info!("no stored deck, starting empty"),
            Err(e) => log::warn!("failed to load flashcards from storage: {}", e),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn gateway(&self) -> &DeckGateway<S> {
        &self.gateway
    }

    /// Appends `card` and saves the deck.
    ///
    /// Returns `false` without touching the deck or storage if either side
    /// is blank after trimming.
    pub fn append(&mut self, card: Card) -> bool {
        if !card.is_complete() {
            log::debug!("rejected blank card");
            return false;
        }
        self.cards.push(card);
        self.persist();
        true
    }

    /// Merges `patch` onto the card at `index` and saves the deck.
    ///
    /// Returns `Ok(false)` without saving if the patch would blank a side.
    pub fn replace_at(&mut self, index: usize, patch: CardPatch) -> Result<bool, DeckError> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(DeckError::IndexOutOfRange { index, len })?;

        if !patch.is_valid() {
            log::debug!("rejected blank edit of card {}", index);
            return Ok(false);
        }
        card.merge(patch);
        self.persist();
        Ok(true)
    }

    /// Appends `samples` if the deck is empty. Returns how many were added.
    pub fn seed_if_empty(&mut self, samples: &[(&str, &str)]) -> usize {
        if !self.cards.is_empty() {
            return 0;
        }
        let mut added = 0;
        for (front, back) in samples {
            if self.append(Card::new(front, back)) {
                added += 1;
            }
        }
        log::info!("seeded deck with {} sample cards", added);
        added
    }

    fn persist(&self) {
        if let Err(e) = self.gateway.save(&self.cards) {
            log::error!("failed to save flashcards to storage: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{MemoryStore, STORAGE_KEY};
    use crate::models::CardImage;

    fn stored(store: &DeckStore<MemoryStore>) -> Vec<Card> {
        store.gateway().load().unwrap().unwrap_or_default()
    }

    #[test]
    fn test_initialize_without_stored_deck() {
        let mut deck = DeckStore::new(MemoryStore::new());
        deck.initialize();

        assert!(deck.is_initialized());
        assert!(deck.is_empty());
        assert_eq!(deck.gateway().store().write_count(), 0);
    }

    #[test]
    fn test_initialize_loads_stored_deck() {
        let store = MemoryStore::with_value(
            STORAGE_KEY,
            r#"[{"front":"avaro","back":"Greedy","image":"flowers"}]"#,
        );
        let mut deck = DeckStore::new(store);
        deck.initialize();

        assert_eq!(deck.cards(), &[Card::new("avaro", "Greedy")]);
    }

    #[test]
    fn test_initialize_recovers_from_corrupt_deck() {
        let mut deck = DeckStore::new(MemoryStore::with_value(STORAGE_KEY, "garbage"));
        deck.initialize();

        assert!(deck.is_empty());
    }

    #[test]
    fn test_initialize_runs_once() {
        let mut deck = DeckStore::new(MemoryStore::new());
        deck.initialize();
        deck.append(Card::new("ileso", "Unharmed"));

        deck.gateway().store().set("@flashcards", "[]").unwrap();
        deck.initialize();

        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_append_persists_full_deck() {
        let mut deck = DeckStore::new(MemoryStore::new());
        deck.initialize();

        assert!(deck.append(Card::new("alcantarilla", "Sewer")));
        assert!(deck.append(Card::new("avaro", "Greedy")));

        assert_eq!(deck.gateway().store().write_count(), 2);
        assert_eq!(stored(&deck), deck.cards());
        assert_eq!(stored(&deck).last().unwrap().front, "avaro");
    }

    #[test]
    fn test_append_then_reload_keeps_last_card() {
        let pairs = [("a", "b"), ("ñandú", "Rhea"), ("  x ", "y  ")];
        for (front, back) in pairs {
            let mut deck = DeckStore::new(MemoryStore::new());
            deck.initialize();
            deck.append(Card::new(front, back));

            let raw = deck.gateway().store().raw(STORAGE_KEY).unwrap();
            let mut reloaded = DeckStore::new(MemoryStore::with_value(STORAGE_KEY, &raw));
            reloaded.initialize();

            let last = reloaded.cards().last().unwrap();
            assert_eq!(last.front, front.trim());
            assert_eq!(last.back, back.trim());
        }
    }

    #[test]
    fn test_append_blank_is_noop() {
        let mut deck = DeckStore::new(MemoryStore::new());
        deck.initialize();

        let blank = Card {
            front: "   ".to_string(),
            back: "Sewer".to_string(),
            image: CardImage::Flowers,
        };
        assert!(!deck.append(blank));

        assert!(deck.is_empty());
        assert_eq!(deck.gateway().store().write_count(), 0);
    }

    #[test]
    fn test_replace_at_preserves_other_fields_and_cards() {
        let mut deck = DeckStore::new(MemoryStore::new());
        deck.initialize();
        deck.append(Card::new("alcantarilla", "Sewer"));
        deck.append(Card::new("avaro", "Greedy"));
        deck.append(Card::new("ileso", "Unharmed"));

        let patch = CardPatch {
            back: Some("Stingy".to_string()),
            ..CardPatch::default()
        };
        assert_eq!(deck.replace_at(1, patch), Ok(true));

        assert_eq!(deck.get(0), Some(&Card::new("alcantarilla", "Sewer")));
        assert_eq!(deck.get(1), Some(&Card::new("avaro", "Stingy")));
        assert_eq!(deck.get(2), Some(&Card::new("ileso", "Unharmed")));
        assert_eq!(stored(&deck), deck.cards());
        assert_eq!(deck.gateway().store().write_count(), 4);
    }

    #[test]
    fn test_replace_at_out_of_range() {
        let mut deck = DeckStore::new(MemoryStore::new());
        deck.initialize();
        deck.append(Card::new("avaro", "Greedy"));

        assert_eq!(
            deck.replace_at(1, CardPatch::text("x", "y")),
            Err(DeckError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(deck.gateway().store().write_count(), 1);
    }

    #[test]
    fn test_replace_at_blank_is_noop() {
        let mut deck = DeckStore::new(MemoryStore::new());
        deck.initialize();
        deck.append(Card::new("avaro", "Greedy"));

        assert_eq!(deck.replace_at(0, CardPatch::text("avaro", "  ")), Ok(false));
        assert_eq!(deck.get(0), Some(&Card::new("avaro", "Greedy")));
        assert_eq!(deck.gateway().store().write_count(), 1);
    }

    #[test]
    fn test_seed_only_when_empty() {
        let mut deck = DeckStore::new(MemoryStore::new());
        deck.initialize();

        assert_eq!(deck.seed_if_empty(&[("avaro", "Greedy"), ("", "skip")]), 1);
        assert_eq!(deck.seed_if_empty(&[("ileso", "Unharmed")]), 0);
        assert_eq!(stored(&deck), vec![Card::new("avaro", "Greedy")]);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut deck = DeckStore::new(MemoryStore::new());
        deck.initialize();
        deck.gateway().store().set_simulate_write_error(true);

        assert!(deck.append(Card::new("atinar", "To hit the target")));

        assert_eq!(deck.len(), 1);
        assert_eq!(deck.gateway().load().unwrap(), None);
    }
}
