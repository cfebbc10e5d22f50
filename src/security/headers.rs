//! Security headers for HTTP responses
//!
//! Every reply of the JSON API carries a strict header set: nothing served
//! here is meant to be framed, sniffed, cached or rendered as a page.

use warp::http::header::{HeaderMap, HeaderValue};
use warp::reply::with::WithHeaders;

/// Strict Content Security Policy for API endpoints
const STRICT_CSP: &str = "default-src 'none'; connect-src 'self'; frame-ancestors 'none';";

const PERMISSIONS_POLICY: &str = "geolocation=(), microphone=(), camera=(), payment=(), usb=(), magnetometer=(), gyroscope=(), accelerometer=()";

/// Strict security headers for API endpoints, applied with `Filter::with`
pub fn api_security_headers() -> WithHeaders {
    let mut headers = HeaderMap::new();

    // Prevent clickjacking
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));

    // Prevent MIME type sniffing
    headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));

    headers.insert("referrer-policy", HeaderValue::from_static("no-referrer"));
    headers.insert("content-security-policy", HeaderValue::from_static(STRICT_CSP));

    // Responses carry user records and tokens
    headers.insert("cache-control", HeaderValue::from_static("no-store"));

    headers.insert("permissions-policy", HeaderValue::from_static(PERMISSIONS_POLICY));

    warp::reply::with::headers(headers)
}
