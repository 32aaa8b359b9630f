//! Authentication gateway entry point.
//!
//! Bootstraps the server:
//! 1. Initialize tracing
//! 2. Load configuration from the environment
//! 3. Connect to SQLite and run migrations
//! 4. Provision the session store and start the expired-session sweep
//! 5. Build the router with session, CORS, and trace layers
//! 6. Serve

use auth_gateway::{config::Config, routes, state::AppState};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tower_sessions::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,auth_gateway=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded: {:?}", config);

    // Database pool + users table migration.
    let state = AppState::new(config.clone()).await?;

    // Session store shares the pool and provisions its own table.
    let session_store = SqliteStore::new(state.db.clone());
    session_store.migrate().await?;

    // Background sweep: periodically deletes expired session rows only.
    // Runs independently of request handling. The sweep future only
    // returns on error, which would end sweeping for good — log it.
    let sweep_period = tokio::time::Duration::from_secs(config.session_sweep_secs);
    let sweep_store = session_store.clone();
    tokio::task::spawn(async move {
        if let Err(e) = sweep_store.continuously_delete_expired(sweep_period).await {
            tracing::error!("Expired-session sweep stopped: {:?}", e);
        }
    });

    // Permissive CORS, matching the service this replaces. Restrict the
    // origin list when deploying the API behind a separate frontend origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::app(state)
        .layer(routes::session_layer(session_store, &config))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let bind_addr = config.bind_address();
    tracing::info!("Listening on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
