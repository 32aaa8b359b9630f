//! HTTP request handlers.
//!
//! - `health`: liveness endpoint
//! - `auth`: register, login, logout
//! - `users`: user listing (restricted)

pub mod auth;
pub mod health;
pub mod users;
