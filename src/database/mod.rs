pub mod db;
pub mod gateway;
pub mod kv;

pub use gateway::{DeckGateway, STORAGE_KEY};
pub use kv::{KeyValueStore, MemoryStore, SqliteStore};
