//! Request middleware.
//!
//! - `auth`: the access guard for restricted routes

pub mod auth;
