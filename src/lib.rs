//! Minimal session-based authentication gateway.
//!
//! Register, login, logout, and a restricted-route guard, backed by
//! server-side sessions persisted in SQLite. The interesting pieces:
//!
//! - `password`: bcrypt hashing/verification of credentials
//! - `middleware::auth`: the access guard for restricted routes
//! - `handlers::auth`: register/login/logout
//! - `routes`: wires everything into an axum `Router`
//!
//! Session persistence itself is delegated to `tower-sessions` with a
//! SQLite store; see `main.rs` for the store setup and the background
//! sweep of expired session rows.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod password;
pub mod routes;
pub mod state;
