use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TODOIST_URL: &str = "https://api.todoist.com/rest/v2";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

// ─── GatewayConfig ────────────────────────────────────────────────────────────

/// Runtime configuration for the gateway process.
///
/// Assembled once at startup and shared read-only for the process lifetime.
/// Nothing in here is per-request state: the Todoist credential always
/// arrives in the request body and is never configured.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// HTTP listen port (default: 8000).
    pub port: u16,
    /// Bind address (default: "127.0.0.1"; use "0.0.0.0" to serve beyond loopback).
    pub bind_address: String,
    /// Base URL of the Todoist REST API. Overridable for tests and proxies.
    pub api_base_url: String,
    /// Timeout applied to each outbound Todoist call, in seconds (default: 30).
    pub request_timeout_secs: u64,
}

/// Optional overrides loaded from a TOML file — all fields may be omitted.
/// Priority: CLI / env var > TOML > built-in default.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// HTTP listen port (default: 8000).
    port: Option<u16>,
    /// Bind address (default: "127.0.0.1").
    bind_address: Option<String>,
    /// Override the Todoist REST base URL (default: https://api.todoist.com/rest/v2).
    api_base_url: Option<String>,
    /// Outbound request timeout in seconds (default: 30).
    request_timeout_secs: Option<u64>,
}

fn load_toml(path: &Path) -> Option<TomlConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config file — using defaults");
            None
        }
    }
}

impl GatewayConfig {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. TOML file (`--config`, default `taskgate.toml` in the working directory)
    ///   3. Built-in defaults
    pub fn new(
        port: Option<u16>,
        bind_address: Option<String>,
        config_file: Option<PathBuf>,
    ) -> Self {
        let path = config_file.unwrap_or_else(|| PathBuf::from("taskgate.toml"));

        // Load TOML as the lowest-priority override layer
        let toml = load_toml(&path).unwrap_or_default();

        let port = port.or(toml.port).unwrap_or(DEFAULT_PORT);

        let bind_address = bind_address
            .or(toml.bind_address)
            .unwrap_or_else(default_bind_address);

        let api_base_url = std::env::var("TASKGATE_TODOIST_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.api_base_url)
            .unwrap_or_else(|| DEFAULT_TODOIST_URL.to_string());

        let request_timeout_secs = toml
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            port,
            bind_address,
            api_base_url,
            request_timeout_secs,
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_file_missing() {
        let cfg =
            GatewayConfig::new(None, None, Some(PathBuf::from("/nonexistent/taskgate.toml")));
        assert_eq!(cfg.port, DEFAULT_PORT);
        assert_eq!(cfg.bind_address, "127.0.0.1");
        assert_eq!(cfg.api_base_url, DEFAULT_TODOIST_URL);
        assert_eq!(cfg.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn toml_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taskgate.toml");
        std::fs::write(
            &path,
            "port = 9100\nbind_address = \"0.0.0.0\"\napi_base_url = \"http://localhost:9999\"\nrequest_timeout_secs = 5\n",
        )
        .unwrap();

        let cfg = GatewayConfig::new(None, None, Some(path));
        assert_eq!(cfg.port, 9100);
        assert_eq!(cfg.bind_address, "0.0.0.0");
        assert_eq!(cfg.api_base_url, "http://localhost:9999");
        assert_eq!(cfg.request_timeout_secs, 5);
    }

    #[test]
    fn cli_beats_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taskgate.toml");
        std::fs::write(&path, "port = 9100\nbind_address = \"0.0.0.0\"\n").unwrap();

        let cfg = GatewayConfig::new(Some(4444), Some("10.0.0.1".to_string()), Some(path));
        assert_eq!(cfg.port, 4444);
        assert_eq!(cfg.bind_address, "10.0.0.1");
    }

    #[test]
    fn malformed_toml_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taskgate.toml");
        std::fs::write(&path, "port = \"not a number\"\n").unwrap();

        let cfg = GatewayConfig::new(None, None, Some(path));
        assert_eq!(cfg.port, DEFAULT_PORT);
    }
}
