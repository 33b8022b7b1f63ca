// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::collections::HashMap;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    /// Mixed responses, one per request path
    #[serde(default)]
    pub mounts: Vec<MountConfig>,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Minimum level written: error, warn, info or debug
    pub level: String,
    pub access_log: bool,
    /// Access log format (combined, common, json, or custom pattern)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub enable_cors: bool,
    /// `Cache-Control` value added to every mixed response
    #[serde(default)]
    pub cache_control: Option<String>,
}

/// A request path served by mixing the files its patterns match
#[derive(Debug, Deserialize, Clone)]
pub struct MountConfig {
    /// Exact request path, e.g. `/assets/all.js`
    pub path: String,
    /// Glob patterns, resolved once at startup in this order
    pub patterns: Vec<String>,
    /// Emit `X-Mix-Patterns` / `X-Mix-Files`
    #[serde(default = "default_diagnostic_headers")]
    pub diagnostic_headers: bool,
    /// Extra response headers
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_diagnostic_headers() -> bool {
    true
}
