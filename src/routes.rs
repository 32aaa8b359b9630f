//! Router assembly.
//!
//! Builds the API router and the session layer. Kept separate from `main` so
//! integration tests can assemble the exact same application against their
//! own database.

use crate::config::Config;
use crate::handlers::{auth, health, users};
use crate::middleware::auth::require_auth;
use crate::state::AppState;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use time::Duration;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

/// Build the session middleware layer.
///
/// The session id is generated by tower-sessions from a CSPRNG, so ids are
/// unguessable and fixation-resistant. The cookie is httpOnly always; Secure
/// is deployment-dependent. Expiry is a fixed TTL renewed on activity — the
/// store record and cookie are refreshed together on every save.
pub fn session_layer(store: SqliteStore, config: &Config) -> SessionManagerLayer<SqliteStore> {
    SessionManagerLayer::new(store)
        .with_name(config.session_cookie_name.clone())
        .with_secure(config.session_secure)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::minutes(
            config.session_ttl_minutes,
        )))
}

/// Build the API router.
///
/// The session layer is applied by the caller so it wraps the whole router,
/// restricted routes included.
pub fn app(state: AppState) -> Router {
    // Restricted routes sit behind the access guard; unauthenticated
    // requests are answered 401 before any handler runs.
    let restricted = Router::new()
        .route("/api/users", post(users::list_users))
        .layer(axum_middleware::from_fn(require_auth))
        .with_state(state.clone());

    Router::new()
        .route("/", get(health::liveness))
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/logout", get(auth::logout))
        .merge(restricted)
        .with_state(state)
}
