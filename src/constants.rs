// Fundamental configuration constants
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

// Token lifetime
pub const DEFAULT_TOKEN_TTL_HOURS: u64 = 24;
pub const MAX_TOKEN_TTL_HOURS: u64 = 10 * 365 * 24;

// Route segments
pub const LOGIN_PATH: &str = "login";
pub const USERS_PATH: &str = "users";
pub const HEALTH_PATH: &str = "health";
pub const API_DOC_PATH: &str = "swagger.json";

// Request and column limits
pub const MAX_BODY_BYTES: u64 = 16 * 1024;
pub const MAX_USERNAME_LEN: usize = 80;
pub const MAX_EMAIL_LEN: usize = 120;
