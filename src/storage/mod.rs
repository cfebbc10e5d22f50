//! Storage mechanisms for persisting and retrieving users

pub mod sqlite;
pub mod traits;

pub use sqlite::SqliteUserStorage;
pub use traits::UserStorage;
