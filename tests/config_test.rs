//! Environment-driven configuration tests.
//!
//! Environment variables are process-global, so every scenario runs inside a
//! single test to keep them from racing each other.

use std::env;
use std::time::Duration;

use user_directory::config::ServerConfig;

const VARS: [&str; 11] = [
    "USER_DIRECTORY_HOST",
    "USER_DIRECTORY_PORT",
    "USER_DIRECTORY_DATABASE_URL",
    "DATABASE_URL",
    "USER_DIRECTORY_DB_MAX_CONNECTIONS",
    "USER_DIRECTORY_JWT_SECRET",
    "JWT_SECRET_KEY",
    "USER_DIRECTORY_TOKEN_TTL_HOURS",
    "USER_DIRECTORY_ENABLE_TLS",
    "USER_DIRECTORY_TLS_CERT_PATH",
    "USER_DIRECTORY_TLS_KEY_PATH",
];

const SECRET: &str = "cfg-test-key-9876-zyxwvu-abcdefghij";

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_from_env_scenarios() {
    clear_env();

    // Secret is mandatory
    let err = ServerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("JWT_SECRET_KEY"));

    // Defaults with only the secret set
    env::set_var("JWT_SECRET_KEY", SECRET);
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 5000);
    assert_eq!(config.database_url, "sqlite://users.db");
    assert_eq!(config.token_ttl, Duration::from_secs(24 * 3600));
    assert!(!config.enable_tls);

    // Prefixed variables win over the generic ones
    env::set_var("DATABASE_URL", "sqlite://generic.db");
    env::set_var("USER_DIRECTORY_DATABASE_URL", "sqlite::memory:");
    env::set_var("USER_DIRECTORY_PORT", "8081");
    env::set_var("USER_DIRECTORY_TOKEN_TTL_HOURS", "2");
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.port, 8081);
    assert_eq!(config.token_ttl, Duration::from_secs(2 * 3600));

    // Zero and out-of-range TTLs are rejected
    for hours in ["0", "87601", "5124095576030431", "18446744073709551615", "soon"] {
        env::set_var("USER_DIRECTORY_TOKEN_TTL_HOURS", hours);
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("USER_DIRECTORY_TOKEN_TTL_HOURS"), "{}", hours);
    }
    env::set_var("USER_DIRECTORY_TOKEN_TTL_HOURS", "87600");
    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.token_ttl, Duration::from_secs(87600 * 3600));
    env::remove_var("USER_DIRECTORY_TOKEN_TTL_HOURS");

    // Malformed numbers are errors, not silent defaults
    env::set_var("USER_DIRECTORY_PORT", "http");
    let err = ServerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("USER_DIRECTORY_PORT"));
    env::set_var("USER_DIRECTORY_PORT", "70000");
    assert!(ServerConfig::from_env().is_err());
    env::remove_var("USER_DIRECTORY_PORT");

    for count in ["0", "many"] {
        env::set_var("USER_DIRECTORY_DB_MAX_CONNECTIONS", count);
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("USER_DIRECTORY_DB_MAX_CONNECTIONS"), "{}", count);
    }
    env::set_var("USER_DIRECTORY_DB_MAX_CONNECTIONS", "3");
    assert_eq!(ServerConfig::from_env().unwrap().db_max_connections, 3);
    env::remove_var("USER_DIRECTORY_DB_MAX_CONNECTIONS");

    // Weak secrets are rejected
    env::set_var("JWT_SECRET_KEY", "short");
    assert!(ServerConfig::from_env().is_err());
    env::set_var("JWT_SECRET_KEY", SECRET);

    // TLS needs both paths, and they must exist
    env::set_var("USER_DIRECTORY_ENABLE_TLS", "true");
    let err = ServerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("TLS is enabled"));

    env::set_var("USER_DIRECTORY_TLS_CERT_PATH", "/nonexistent/cert.pem");
    env::set_var("USER_DIRECTORY_TLS_KEY_PATH", "/nonexistent/key.pem");
    let err = ServerConfig::from_env().unwrap_err();
    assert!(err.to_string().contains("does not exist"));

    clear_env();
}
