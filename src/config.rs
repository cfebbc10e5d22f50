//! Server configuration module
//! Handles runtime configuration parameters for the user directory service

use crate::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_TOKEN_TTL_HOURS, MAX_TOKEN_TTL_HOURS,
};
use crate::error::{Result, UserDirectoryError};
use std::env;
use std::time::Duration;

/// Server configuration parameters
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// sqlx connection URL, e.g. `sqlite://users.db` or `sqlite::memory:`
    pub database_url: String,
    pub db_max_connections: u32,
    /// JWT secret for token signing/validation
    pub jwt_secret: String,
    /// Lifetime of issued access tokens
    pub token_ttl: Duration,
    /// TLS configuration
    pub tls_cert_path: Option<String>,
    pub tls_key_path: Option<String>,
    /// Enable TLS
    pub enable_tls: bool,
}

impl ServerConfig {
    /// Create a test configuration - DANGEROUS: Only for testing!
    #[cfg(test)]
    pub fn for_testing() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            database_url: "sqlite::memory:".to_string(),
            db_max_connections: 1,
            jwt_secret: "test-jwt-key-only-for-unit-tests-never-use-in-production-9".to_string(),
            token_ttl: Duration::from_secs(DEFAULT_TOKEN_TTL_HOURS * 3600),
            tls_cert_path: None,
            tls_key_path: None,
            enable_tls: false,
        }
    }

    /// Validate that the signing secret meets security requirements
    fn validate_jwt_secret(secret: &str) -> Result<()> {
        if secret.len() < 32 {
            return Err(UserDirectoryError::Config(
                "JWT secret must be at least 32 characters long".to_string(),
            ));
        }

        // Check for insecure default or example values
        let insecure_patterns = [
            "your-secret-key",
            "change-this",
            "changeme",
            "super-secret",
            "default",
            "password",
            "12345",
        ];

        for pattern in &insecure_patterns {
            if secret.to_lowercase().contains(pattern) {
                return Err(UserDirectoryError::Config(format!(
                    "JWT secret contains insecure pattern '{}'. Please use a secure random secret generated with: openssl rand -base64 32",
                    pattern
                )));
            }
        }

        if secret.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(UserDirectoryError::Config(
                "JWT secret should contain mixed characters (letters, numbers, symbols)"
                    .to_string(),
            ));
        }

        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> Result<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                UserDirectoryError::Config(format!(
                    "Invalid bind address {}:{}: {}",
                    self.host, self.port, e
                ))
            })
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let host = env::var("USER_DIRECTORY_HOST").unwrap_or(DEFAULT_HOST.to_string());
        let port = match env::var("USER_DIRECTORY_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                UserDirectoryError::Config(format!(
                    "USER_DIRECTORY_PORT must be a port number, got '{}'",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let database_url = env::var("USER_DIRECTORY_DATABASE_URL")
            .or_else(|_| env::var("DATABASE_URL"))
            .unwrap_or(DEFAULT_DATABASE_URL.to_string());

        let db_max_connections = match env::var("USER_DIRECTORY_DB_MAX_CONNECTIONS") {
            Ok(raw) => match raw.parse::<u32>() {
                Ok(count) if count > 0 => count,
                _ => {
                    return Err(UserDirectoryError::Config(format!(
                        "USER_DIRECTORY_DB_MAX_CONNECTIONS must be a positive integer, got '{}'",
                        raw
                    )))
                }
            },
            Err(_) => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let jwt_secret = env::var("USER_DIRECTORY_JWT_SECRET")
            .or_else(|_| env::var("JWT_SECRET_KEY"))
            .map_err(|_| {
                UserDirectoryError::Config(
                    "JWT_SECRET_KEY environment variable is required. \
                     Generate one with: openssl rand -base64 32"
                        .to_string(),
                )
            })?;

        let token_ttl_hours = match env::var("USER_DIRECTORY_TOKEN_TTL_HOURS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(hours) if hours > 0 && hours <= MAX_TOKEN_TTL_HOURS => hours,
                _ => {
                    return Err(UserDirectoryError::Config(format!(
                        "USER_DIRECTORY_TOKEN_TTL_HOURS must be between 1 and {}, got '{}'",
                        MAX_TOKEN_TTL_HOURS, raw
                    )))
                }
            },
            Err(_) => DEFAULT_TOKEN_TTL_HOURS,
        };
        let token_ttl_secs = token_ttl_hours.checked_mul(3600).ok_or_else(|| {
            UserDirectoryError::Config("USER_DIRECTORY_TOKEN_TTL_HOURS is out of range".to_string())
        })?;

        // TLS configuration
        let enable_tls = env::var("USER_DIRECTORY_ENABLE_TLS")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        let tls_cert_path = env::var("USER_DIRECTORY_TLS_CERT_PATH").ok();
        let tls_key_path = env::var("USER_DIRECTORY_TLS_KEY_PATH").ok();

        if enable_tls {
            match (&tls_cert_path, &tls_key_path) {
                (Some(cert_path), Some(key_path)) => {
                    if !std::path::Path::new(cert_path).exists() {
                        return Err(UserDirectoryError::Config(format!(
                            "TLS certificate file does not exist: {}",
                            cert_path
                        )));
                    }
                    if !std::path::Path::new(key_path).exists() {
                        return Err(UserDirectoryError::Config(format!(
                            "TLS private key file does not exist: {}",
                            key_path
                        )));
                    }
                }
                _ => {
                    return Err(UserDirectoryError::Config(
                        "TLS is enabled but USER_DIRECTORY_TLS_CERT_PATH or USER_DIRECTORY_TLS_KEY_PATH is not set".to_string(),
                    ))
                }
            }
        }

        Self::validate_jwt_secret(&jwt_secret)?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            jwt_secret,
            token_ttl: Duration::from_secs(token_ttl_secs),
            tls_cert_path,
            tls_key_path,
            enable_tls,
        })
    }
}
