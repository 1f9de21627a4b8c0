use super::db;
use crate::error::{Result, StorageError};
use rusqlite::Connection;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::Path;

/// String key/value storage the deck is persisted into.
///
/// Methods take `&self`; the app is single-threaded, so backends use
/// interior mutability where they need it.
pub trait KeyValueStore {
    /// Returns `Ok(None)` if nothing was ever stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the whole value under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Store backed by the SQLite `app_state` table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            conn: db::init_database(path)?,
        })
    }

    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(db::get_value(key, &self.conn)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Ok(db::set_value(key, value, &self.conn)?)
    }
}

/// In-memory store for tests. Counts writes and can be told to fail them.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with a raw value, e.g. a corrupted blob.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }

    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful `set` calls.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(StorageError::Simulated);
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
