//! Shared application state.
//!
//! One `AppState` is built at startup and cloned into every handler by axum.
//! Cloning is cheap: `SqlitePool` is a handle to a shared connection pool and
//! the config sits behind an `Arc`.

use crate::config::Config;
use anyhow::Result;
use sqlx::sqlite::SqlitePool;
use std::sync::Arc;

/// Shared application state: the database pool and the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool shared by user persistence and the session store.
    pub db: SqlitePool,

    /// Explicitly constructed configuration (no ambient globals).
    pub config: Arc<Config>,
}

impl AppState {
    /// Connect to the database, run migrations, and build the state.
    ///
    /// The `sqlx::migrate!` macro embeds the `./migrations` directory at
    /// compile time; the users table is created here. The session table is
    /// provisioned separately by the session store at startup.
    pub async fn new(config: Config) -> Result<Self> {
        let db = SqlitePool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&db).await?;

        Ok(AppState {
            db,
            config: Arc::new(config),
        })
    }
}
