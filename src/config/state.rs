// Application state module
// Holds the configuration and the mix handlers built from it

use std::collections::HashMap;

use hyper::header::{HeaderName, HeaderValue, CACHE_CONTROL, SERVER};

use super::types::{Config, MountConfig};
use crate::logger;
use crate::mix::MixHandler;

/// Application state, immutable once built and shared by all connections
pub struct AppState {
    pub config: Config,
    /// Mix handlers keyed by exact request path
    pub mounts: HashMap<String, MixHandler>,
}

impl AppState {
    /// Build the state, resolving every mount's patterns now
    pub fn new(config: Config) -> Self {
        let mut mounts = HashMap::new();

        for mount in &config.mounts {
            let handler = build_handler(mount, &config);
            logger::log_mount(&mount.path, &handler);
            if mounts.insert(mount.path.clone(), handler).is_some() {
                logger::log_warning(&format!(
                    "Mount '{}' defined more than once, last definition wins",
                    mount.path
                ));
            }
        }

        Self { config, mounts }
    }

    pub fn mount(&self, path: &str) -> Option<&MixHandler> {
        self.mounts.get(path)
    }
}

fn build_handler(mount: &MountConfig, config: &Config) -> MixHandler {
    let mut handler = MixHandler::new(&mount.patterns);
    if !mount.diagnostic_headers {
        handler.clear_headers();
    }

    let headers = handler.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&config.http.server_name) {
        headers.insert(SERVER, value);
    }
    if let Some(cache_control) = &config.http.cache_control {
        match HeaderValue::from_str(cache_control) {
            Ok(value) => {
                headers.insert(CACHE_CONTROL, value);
            }
            Err(e) => logger::log_warning(&format!("Invalid cache_control '{cache_control}': {e}")),
        }
    }

    for (name, value) in &mount.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => logger::log_warning(&format!(
                "Ignoring invalid header '{name}: {value}' on mount '{}'",
                mount.path
            )),
        }
    }

    handler
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_for(dir: &std::path::Path, extra: &str) -> Config {
        Config::from_toml(&format!(
            r#"
            [[mounts]]
            path = "/all.js"
            patterns = ["{dir}/*.js"]
            {extra}

            [[mounts]]
            path = "/broken.js"
            patterns = ["["]
            "#,
            dir = dir.display()
        ))
        .unwrap()
    }

    #[test]
    fn test_mounts_resolved_eagerly() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.js"), "a").unwrap();
        fs::write(dir.path().join("b.js"), "b").unwrap();

        let state = AppState::new(config_for(dir.path(), ""));
        let all = state.mount("/all.js").unwrap();
        assert_eq!(all.files().len(), 2);
        assert!(all.headers().contains_key("x-mix-files"));
        assert_eq!(all.headers()[CACHE_CONTROL], "no-cache");
        assert_eq!(all.headers()[SERVER], "mixserve");

        let broken = state.mount("/broken.js").unwrap();
        assert!(broken.error().is_some());
        assert!(state.mount("/other.js").is_none());
    }

    #[test]
    fn test_mount_header_options() {
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new(config_for(
            dir.path(),
            "diagnostic_headers = false\n            headers = { \"x-frame-options\" = \"DENY\" }",
        ));

        let all = state.mount("/all.js").unwrap();
        assert!(!all.headers().contains_key("x-mix-files"));
        assert_eq!(all.headers()["x-frame-options"], "DENY");
    }
}
