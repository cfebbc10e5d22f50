use serde::{Deserialize, Serialize};

use crate::constants::{MAX_EMAIL_LEN, MAX_USERNAME_LEN};
use crate::error::{Result, UserDirectoryError};

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Storage-assigned primary key
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// Fields of a user that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    username: String,
    email: String,
}

impl NewUser {
    /// Validates the fields of a user about to be created
    pub fn new(username: String, email: String) -> Result<Self> {
        check_field("username", &username, MAX_USERNAME_LEN)?;
        check_field("email", &email, MAX_EMAIL_LEN)?;
        Ok(Self { username, email })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

fn check_field(name: &str, value: &str, max_len: usize) -> Result<()> {
    if value.is_empty() {
        return Err(UserDirectoryError::Validation(format!("{} is required", name)));
    }
    if value.chars().count() > max_len {
        return Err(UserDirectoryError::Validation(format!(
            "{} must be at most {} characters",
            name, max_len
        )));
    }
    Ok(())
}
