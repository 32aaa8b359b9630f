//! User listing.

use crate::db::models::PublicUser;
use crate::db::users;
use crate::error::AppResult;
use crate::state::AppState;
use axum::{extract::State, Json};

/// POST /api/users (restricted)
///
/// Returns all users. Reachable only through the access guard, so an
/// unauthenticated caller gets 401 before this runs. Password hashes are
/// stripped from the listing.
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<PublicUser>>> {
    let users = users::list_users(&state.db).await?;

    Ok(Json(users.iter().map(PublicUser::from).collect()))
}
