//! Access guard for restricted routes.
//!
//! A session that carries a `user` value is authenticated; one that doesn't
//! (or no session at all) is anonymous. The guard reads the already-attached
//! session and short-circuits with 401 before the downstream handler runs.

use crate::db::models::PublicUser;
use crate::error::AppError;
use axum::{extract::Request, middleware::Next, response::Response};
use tower_sessions::Session;

/// Session key under which the logged-in user is stored.
pub const SESSION_USER_KEY: &str = "user";

/// Permit the request only if the session has a user attached.
pub async fn require_auth(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user: Option<PublicUser> = session.get(SESSION_USER_KEY).await?;

    match user {
        Some(_) => Ok(next.run(request).await),
        None => Err(AppError::Unauthorized("You shall not pass!".to_string())),
    }
}
