//! Local HTTP server for the shift ledger.
//!
//! Usage: `hourtrackr [CONFIG]`. The configuration path may also be given in
//! `HOURTRACKR_CONFIG`; without either, built-in defaults are used.

use std::error::Error;
use std::sync::Arc;

use hourtrackr::api::{AppState, create_router};
use hourtrackr::config::{AppConfig, ConfigLoader};
use hourtrackr::ledger::Ledger;
use hourtrackr::logging;
use hourtrackr::storage::FileStore;
use tracing::info;

const CONFIG_ENV: &str = "HOURTRACKR_CONFIG";

fn load_config() -> Result<AppConfig, Box<dyn Error + Send + Sync>> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok());

    match path {
        Some(path) => Ok(ConfigLoader::load(path)?.into_config()),
        None => Ok(AppConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = load_config()?;
    logging::init(&config.logging)?;

    let store = FileStore::open(&config.storage.data_dir)?;
    let ledger = Ledger::new(Arc::new(store), config.overtime.clone());
    let router = create_router(AppState::new(ledger));

    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;
    info!(
        address = %config.server.bind_address,
        data_dir = %config.storage.data_dir.display(),
        "Shift ledger listening"
    );

    axum::serve(listener, router).await?;
    Ok(())
}
