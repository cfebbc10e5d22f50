//! Request and response bodies of the HTTP API
//!
//! Request schemas hold optional fields so that a missing field surfaces as a
//! validation error from `validate()` rather than a generic decode failure.

use serde::{Deserialize, Serialize};

use crate::auth::Credentials;
use crate::core::NewUser;
use crate::error::Result;

/// Body of `POST /login`
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn validate(self) -> Result<Credentials> {
        Credentials::new(
            self.username.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}

/// Body returned by `POST /login`
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Body of `POST /users/`
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl CreateUserRequest {
    pub fn validate(self) -> Result<NewUser> {
        NewUser::new(
            self.username.unwrap_or_default(),
            self.email.unwrap_or_default(),
        )
    }
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}
