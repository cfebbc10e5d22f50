//! Authentication module
//!
//! Issues and validates bearer tokens. Login is a stub: any non-empty
//! username/password pair receives a token and every valid token carries the
//! same privileges.

pub mod credentials;
pub mod filter;
pub mod token;

// Re-export main components
pub use credentials::Credentials;
pub use filter::{authenticate, with_auth};
pub use token::{Claims, Identity, TokenManager};
