use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use tracing::info;

pub mod schema;
pub mod store;

pub use store::{Store, StoreError};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens the pool (creating the database file if needed) and ensures the tables exist.
pub async fn init_db(database_url: &str) -> Result<Store, StoreError> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        // readers keep going while one writer holds the lock
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    let store = Store::new(pool);
    store.init_schema().await?;

    info!(database_url, "Database ready");
    Ok(store)
}
