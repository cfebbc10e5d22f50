//! Core functionality of the user directory service

pub mod context;
pub mod directory;
pub mod user;

pub use context::AppContext;
pub use directory::UserDirectory;
pub use user::{NewUser, User};
