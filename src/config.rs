use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Shortest poll interval accepted from the config file or CLI
pub const MIN_POLL_INTERVAL_MS: u64 = 100;

/// Shortest per-request timeout; zero would fail every request at once
pub const MIN_REQUEST_TIMEOUT_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_poll_interval_ms() -> u64 {
    2000
}

fn default_request_timeout_ms() -> u64 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_interval_ms: default_poll_interval_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file is valid and means "all defaults"
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Invalid config file")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
    }

    /// Apply command-line overrides on top of file values
    pub fn with_overrides(mut self, url: Option<String>, interval_ms: Option<u64>) -> Self {
        if let Some(url) = url {
            self.base_url = url;
        }
        if let Some(interval_ms) = interval_ms {
            self.poll_interval_ms = interval_ms;
        }
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(MIN_POLL_INTERVAL_MS))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.max(MIN_REQUEST_TIMEOUT_MS))
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit path must exist. Otherwise `<config_dir>/syncpanel/config.yaml`
/// and then `./config.yaml` are tried; `None` means run on defaults.
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(Some(path));
        }
        anyhow::bail!("Config file not found at specified path: {}", path.display());
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("syncpanel").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.poll_interval(), Duration::from_millis(2000));
        assert_eq!(config.request_timeout(), Duration::from_millis(5000));
    }

    #[test]
    fn test_empty_file_is_defaults() {
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config = Config::from_yaml("base_url: http://sync.lan:9000\n").unwrap();
        assert_eq!(config.base_url, "http://sync.lan:9000");
        assert_eq!(config.poll_interval_ms, 2000);
    }

    #[test]
    fn test_overrides_win() {
        let config = Config::from_yaml("base_url: http://a\npoll_interval_ms: 750\n")
            .unwrap()
            .with_overrides(Some("http://b".to_string()), Some(500));
        assert_eq!(config.base_url, "http://b");
        assert_eq!(config.poll_interval_ms, 500);
    }

    #[test]
    fn test_interval_has_floor() {
        let config = Config::default().with_overrides(None, Some(5));
        assert_eq!(config.poll_interval(), Duration::from_millis(MIN_POLL_INTERVAL_MS));
    }

    #[test]
    fn test_request_timeout_has_floor() {
        let config = Config::from_yaml("request_timeout_ms: 0\n").unwrap();
        assert_eq!(config.request_timeout(), Duration::from_millis(MIN_REQUEST_TIMEOUT_MS));
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(Config::from_yaml("poll_interval_ms: soon").is_err());
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        assert!(find_config_path(Some("/definitely/not/here/config.yaml")).is_err());
    }
}
