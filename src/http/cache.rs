//! HTTP cache control module
//!
//! Provides `ETag` generation and conditional request evaluation
//! (`If-None-Match`, `If-Modified-Since`).

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Generate `ETag` using fast hashing
///
/// # Arguments
/// * `content` - Response body
///
/// # Returns
/// Quoted `ETag` string, e.g., `"abc123def"`
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Check if client's `If-None-Match` header matches the server's `ETag`
///
/// Supports:
/// - Single `ETag`: `"abc123"`
/// - Multiple `ETags`: `"abc123", "def456"`
/// - Weak validators: `W/"abc123"`
/// - Wildcard: `*`
///
/// # Returns
/// Returns true if matched (should return 304), false otherwise
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag.split(',').map(str::trim).any(|e| {
            let e = e.strip_prefix("W/").unwrap_or(e);
            e == etag || e == "*"
        })
    })
}

/// Truncate a timestamp to whole seconds, the resolution of HTTP dates
///
/// Returns `None` for times at or before the Unix epoch, which stand for
/// "no modification time known".
pub fn http_time(modified: SystemTime) -> Option<SystemTime> {
    let secs = modified.duration_since(UNIX_EPOCH).ok()?.as_secs();
    if secs == 0 {
        return None;
    }
    Some(UNIX_EPOCH + Duration::from_secs(secs))
}

/// Format a `Last-Modified` value, or `None` when the time is unknown
pub fn format_last_modified(modified: SystemTime) -> Option<String> {
    http_time(modified).map(httpdate::fmt_http_date)
}

/// Check whether the resource is unchanged since the client's `If-Modified-Since`
///
/// Unparseable dates and unknown modification times never match.
pub fn check_not_modified_since(if_modified_since: Option<&str>, modified: SystemTime) -> bool {
    let Some(header) = if_modified_since else {
        return false;
    };
    let Some(modified) = http_time(modified) else {
        return false;
    };
    httpdate::parse_http_date(header.trim()).is_ok_and(|since| modified <= since)
}
