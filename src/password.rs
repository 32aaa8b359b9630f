//! Credential hashing.
//!
//! Thin async wrapper over bcrypt. Each hash embeds its own random salt and
//! cost factor, so verification needs nothing beyond the stored string.
//! bcrypt is deliberately slow; both operations run on tokio's blocking
//! thread pool so a hash computation never stalls the async runtime.

use crate::error::{AppError, AppResult};

/// Hash a plaintext password with the given bcrypt cost factor.
///
/// The output string embeds the salt and cost, e.g. `$2b$12$...`.
pub async fn hash(plaintext: &str, cost: u32) -> AppResult<String> {
    let plaintext = plaintext.to_string();

    tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, cost))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
        .map_err(AppError::from)
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(false)` on mismatch — a wrong password is a normal outcome,
/// not an error. `Err` only occurs when the stored hash is malformed.
/// The underlying comparison is constant-time.
pub async fn verify(plaintext: &str, hashed: &str) -> AppResult<bool> {
    let plaintext = plaintext.to_string();
    let hashed = hashed.to_string();

    tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hashed))
        .await
        .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))?
        .map_err(AppError::from)
}
