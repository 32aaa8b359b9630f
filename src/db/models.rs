//! Database models.
//!
//! `User` maps 1:1 to a row in the users table and carries the password
//! hash; it never leaves the server. `PublicUser` is the projection used for
//! API responses and for the value stored on the session — the hash is
//! stripped before either.
//!
//! Timestamps are stored as RFC3339 strings, which is how SQLite represents
//! them natively and keeps JSON serialization trivial.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user row, including the bcrypt password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Unique username, used for login lookup.
    pub username: String,

    /// bcrypt hash of the password. Never plaintext, never serialized.
    pub password_hash: String,

    /// When the account was created (RFC3339 timestamp).
    pub created_at: String,
}

impl User {
    /// Create a new user with a generated id and timestamp.
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            username,
            password_hash,
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// The client-facing view of a user. This is what registration returns,
/// what the user list contains, and what gets stored on the session.
/// The password hash is stripped by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub created_at: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            created_at: user.created_at.clone(),
        }
    }
}
