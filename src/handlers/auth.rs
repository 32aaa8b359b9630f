//! Registration, login, and logout.
//!
//! The session middleware persists any session mutation made here before the
//! response goes out, so a client holds a valid cookie as soon as register
//! or login returns.

use crate::db::models::PublicUser;
use crate::db::users;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::SESSION_USER_KEY;
use crate::password;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_sessions::Session;

/// Request body for register and login.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// POST /api/register
///
/// Hashes the password, creates the user, and logs the new user in by
/// attaching them to the session. Returns 201 with the created user; the
/// password hash is stripped from both the response body and the session.
/// A duplicate username surfaces as a 500 (see `AppError::Conflict`).
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<Credentials>,
) -> AppResult<impl IntoResponse> {
    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::BadRequest(
            "username and password are required".to_string(),
        ));
    }

    let hashed = password::hash(&req.password, state.config.bcrypt_cost).await?;
    let user = users::create_user(&state.db, &req.username, &hashed).await?;

    // No separate login needed after registering.
    let public = PublicUser::from(&user);
    session.insert(SESSION_USER_KEY, &public).await?;

    Ok((StatusCode::CREATED, Json(public)))
}

/// POST /api/login
///
/// An unknown username and a wrong password both answer 401 with the same
/// fixed message, so the response never reveals which usernames exist.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<Credentials>,
) -> AppResult<Json<Value>> {
    let user = users::find_by_username(&state.db, &req.username).await?;

    let verified = match &user {
        Some(user) => password::verify(&req.password, &user.password_hash).await?,
        None => false,
    };

    match user {
        Some(user) if verified => {
            session
                .insert(SESSION_USER_KEY, &PublicUser::from(&user))
                .await?;

            Ok(Json(json!({
                "message": format!("Welcome {}!, have a cookie.", user.username),
            })))
        }
        _ => Err(AppError::Unauthorized("Invalid Credentials".to_string())),
    }
}

/// GET /api/logout
///
/// Flushes the session: the stored record is deleted and the cookie cleared,
/// so the old session id is useless afterwards. Responds in plain text —
/// including the failure case, which the rest of the API reports as JSON.
/// That inconsistency is part of the contract being preserved.
pub async fn logout(session: Session) -> Response {
    match session.flush().await {
        Ok(()) => "Goodbye".into_response(),
        Err(e) => {
            tracing::error!("Failed to destroy session: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error logging out.").into_response()
        }
    }
}
