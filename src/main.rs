mod app;
use flipcards::*;

use app::FlipcardsApp;
use config::{AppConfig, SAMPLE_CARDS};
use database::{SqliteStore, db};

fn open_store(config: &AppConfig) -> eframe::Result<SqliteStore> {
    if let Some(parent) = config.db_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::warn!("could not create {}: {}", parent.display(), e);
        }
    }

    match SqliteStore::open(&config.db_path) {
        Ok(store) => Ok(store),
        Err(e) => {
            log::error!(
                "failed to open {}: {}; cards will not survive a restart",
                config.db_path.display(),
                e
            );
            let conn = db::init_in_memory().map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;
            Ok(SqliteStore::from_connection(conn))
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    log::info!("using deck database at {}", config.db_path.display());

    let mut deck = DeckStore::new(open_store(&config)?);
    deck.initialize();
    if config.seed_sample_deck {
        deck.seed_if_empty(&SAMPLE_CARDS);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashcards",
        options,
        Box::new(|_cc| Ok(Box::new(FlipcardsApp::new(deck)))),
    )
}
