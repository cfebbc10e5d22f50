use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::credentials::Credentials;
use crate::error::{AuthError, Result, UserDirectoryError};

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username the token was issued to)
    pub sub: String,
    /// Expiration time (as UTC timestamp)
    pub exp: usize,
    /// Issued at (as UTC timestamp)
    pub iat: usize,
    /// Not before (as UTC timestamp)
    pub nbf: usize,
}

impl Claims {
    /// Creates claims for a subject valid for `ttl` from now
    pub fn new(subject: String, ttl: Duration) -> Self {
        let now = Utc::now().timestamp().max(0) as usize;
        let ttl_secs = usize::try_from(ttl.as_secs()).unwrap_or(usize::MAX);

        Self {
            sub: subject,
            exp: now.saturating_add(ttl_secs),
            iat: now,
            nbf: now,
        }
    }
}

/// Identity decoded from a valid token, handed to protected handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
}

/// Manages JWT token operations
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenManager {
    /// Creates a new token manager with a secret and token lifetime
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::default();
        validation.leeway = 0;
        validation.validate_nbf = true;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Lifetime applied to newly issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issues an access token for the given credentials.
    ///
    /// The password is NOT verified against anything: any non-empty pair gets
    /// a token. This mirrors the service's documented login stub.
    pub fn issue_token(&self, credentials: &Credentials) -> Result<String> {
        let claims = Claims::new(credentials.username().to_string(), self.ttl);
        self.generate_token(&claims)
    }

    /// Generates a JWT token for the given claims
    pub fn generate_token(&self, claims: &Claims) -> Result<String> {
        encode(&Header::default(), claims, &self.encoding_key).map_err(|e| {
            UserDirectoryError::Auth(AuthError::Invalid(format!(
                "Failed to generate token: {}",
                e
            )))
        })
    }

    /// Validates and decodes a JWT token, checking signature and expiry
    pub fn validate_token(&self, token: &str) -> std::result::Result<TokenData<Claims>, AuthError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => AuthError::Invalid(e.to_string()),
            }
        })
    }

    /// Validates a token and returns the identity it carries
    pub fn identity(&self, token: &str) -> std::result::Result<Identity, AuthError> {
        let claims = self.validate_token(token)?.claims;

        if claims.sub.is_empty() {
            return Err(AuthError::Invalid("Token has an empty subject".to_string()));
        }

        Ok(Identity {
            username: claims.sub,
        })
    }
}

/// True when the header names the bearer scheme, with or without a token
pub fn is_bearer_scheme(auth_header: &str) -> bool {
    auth_header
        .split_whitespace()
        .next()
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("bearer"))
}

/// Extracts bearer token from Authorization header
pub fn extract_bearer_token(auth_header: &str) -> Option<&str> {
    let (scheme, token) = auth_header.trim().split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") {
        let token = token.trim();
        (!token.is_empty()).then_some(token)
    } else {
        None
    }
}
