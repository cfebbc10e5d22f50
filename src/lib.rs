//! User Directory - a minimal authenticated user CRUD service
//!
//! This library provides the HTTP routes, bearer-token auth gate and
//! relational storage behind the `user_directory` server binary.

pub mod auth;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod security;
pub mod storage;

// Re-export main components
pub use config::*;
pub use constants::*;
pub use routes::routes;
