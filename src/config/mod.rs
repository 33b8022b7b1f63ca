// Configuration module entry point
// Loads configuration from file and environment, and builds the runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, HttpConfig, LoggingConfig, MountConfig, PerformanceConfig, ServerConfig,
};

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("MIX").separator("__"));

        Self::build(builder)
    }

    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from TOML text, defaults applied
    pub fn from_toml(toml: &str) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml));

        Self::build(builder)
    }

    fn build(builder: Builder) -> Result<Self, config::ConfigError> {
        let settings = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "mixserve")?
            .set_default("http.enable_cors", false)?
            .set_default("http.cache_control", "no-cache")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.performance.keep_alive_timeout, 75);
        assert_eq!(cfg.http.cache_control.as_deref(), Some("no-cache"));
        assert!(cfg.mounts.is_empty());
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "127.0.0.1:8080".parse().unwrap()
        );
    }

    #[test]
    fn test_mounts() {
        let cfg = Config::from_toml(
            r#"
            [server]
            port = 9000

            [[mounts]]
            path = "/assets/all.js"
            patterns = ["./static/one.js", "./static/*.js"]

            [[mounts]]
            path = "/assets/all.css"
            patterns = ["./static/**/*.css"]
            diagnostic_headers = false
            headers = { "X-Frame-Options" = "DENY" }
            "#,
        )
        .unwrap();

        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.mounts.len(), 2);
        assert_eq!(cfg.mounts[0].patterns, vec!["./static/one.js", "./static/*.js"]);
        assert!(cfg.mounts[0].diagnostic_headers);
        assert!(!cfg.mounts[1].diagnostic_headers);
        // Keys may come back lowercased; header names are case-insensitive anyway
        assert!(cfg.mounts[1]
            .headers
            .iter()
            .any(|(k, v)| k.eq_ignore_ascii_case("x-frame-options") && v == "DENY"));
    }

    #[test]
    fn test_invalid_address() {
        let cfg = Config::from_toml("[server]\nhost = \"not an ip\"").unwrap();
        assert!(cfg.get_socket_addr().is_err());
    }
}
