//! Runtime configuration, read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `FLIPCARDS_DB` | `<data dir>/flipcards.sqlite3` | SQLite file holding the deck |
//! | `FLIPCARDS_SEED_SAMPLE` | off | Add sample cards when the deck starts empty |

use directories::ProjectDirs;
use std::path::PathBuf;

const DB_FILE_NAME: &str = "flipcards.sqlite3";
const FALLBACK_DB_PATH: &str = "db.sqlite3";

/// Cards added on first run when seeding is enabled.
pub const SAMPLE_CARDS: [(&str, &str); 4] = [
    ("alcantarilla", "Sewer"),
    ("avaro", "Greedy"),
    ("ileso", "Unharmed"),
    ("atinar", "To hit the target"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub seed_sample_deck: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = var("FLIPCARDS_DB")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);
        let seed_sample_deck = var("FLIPCARDS_SEED_SAMPLE")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            db_path,
            seed_sample_deck,
        }
    }
}

fn default_db_path() -> PathBuf {
    ProjectDirs::from("", "", "flipcards")
        .map(|dirs| dirs.data_dir().join(DB_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DB_PATH))
}
