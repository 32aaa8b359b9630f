//! Database access.
//!
//! - `models`: row types and their client-facing projections
//! - `users`: CRUD operations for the users table
//!
//! Session rows live in their own table owned entirely by the session store
//! (`tower-sessions-sqlx-store`); nothing here touches them.

pub mod models;
pub mod users;
