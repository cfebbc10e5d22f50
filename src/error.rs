use std::error::Error;
use std::fmt;

use warp::http::StatusCode;

/// Reasons a bearer token is refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header or no token in it
    Missing,
    /// Not a bearer header, malformed token or bad signature
    Invalid(String),
    /// Token is past its `exp` claim
    Expired,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "Missing authorization token"),
            Self::Invalid(msg) => write!(f, "Invalid token: {}", msg),
            Self::Expired => write!(f, "Token has expired"),
        }
    }
}

impl Error for AuthError {}

#[derive(Debug)]
pub enum UserDirectoryError {
    // Request errors
    Validation(String),

    // Auth errors
    Auth(AuthError),

    // Directory errors
    NotFound(i64),
    Conflict(String),

    // Storage errors
    Storage(String),

    // Configuration errors
    Config(String),
}

impl UserDirectoryError {
    /// HTTP status reported to the client for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Storage(_) | Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return in a response body. Storage details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Storage(_) | Self::Config(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for UserDirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "Validation error: {}", msg),
            Self::Auth(err) => write!(f, "Authentication error: {}", err),
            Self::NotFound(id) => write!(f, "User {} not found", id),
            Self::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Self::Storage(msg) => write!(f, "Storage error: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl Error for UserDirectoryError {}

impl warp::reject::Reject for UserDirectoryError {}

impl From<AuthError> for UserDirectoryError {
    fn from(err: AuthError) -> Self {
        UserDirectoryError::Auth(err)
    }
}

impl From<sqlx::Error> for UserDirectoryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                // SQLite reports "UNIQUE constraint failed: users.<column>"
                let message = db_err.message();
                let field = if message.contains("email") {
                    "email"
                } else {
                    "username"
                };
                UserDirectoryError::Conflict(format!("A user with this {} already exists", field))
            }
            _ => UserDirectoryError::Storage(err.to_string()),
        }
    }
}

// Generic result type for the user directory
pub type Result<T> = std::result::Result<T, UserDirectoryError>;
