//! Response hardening

pub mod headers;

pub use headers::api_security_headers;
