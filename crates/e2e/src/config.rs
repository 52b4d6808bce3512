//! Harness configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{E2eError, E2eResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/api";

/// Harness configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Base URL every request path is appended to
    pub base_url: String,

    /// Per-request timeout in seconds
    pub request_timeout: u64,

    /// Poll the server for this many seconds before running (None = assume it is up)
    pub wait_ready: Option<u64>,

    /// Output directory for results
    pub output_dir: PathBuf,

    /// Extra YAML test cases, run after the built-in suite
    pub cases_dir: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: 30,
            wait_ready: None,
            output_dir: PathBuf::from("test-results"),
            cases_dir: None,
        }
    }
}

impl HarnessConfig {
    /// Load from a YAML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> E2eResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> E2eResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validated()
    }

    /// Check invariants and normalize the base URL
    pub fn validated(mut self) -> E2eResult<Self> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(E2eError::InvalidConfig(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        self.base_url = trimmed.to_string();

        if self.request_timeout == 0 {
            return Err(E2eError::InvalidConfig(
                "request_timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarnessConfig::default().validated().unwrap();
        assert_eq!(config.base_url, "http://localhost:4000/api");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.wait_ready.is_none());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
base_url: http://127.0.0.1:8080/api/
wait_ready: 10
"#;
        let config = HarnessConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8080/api");
        assert_eq!(config.wait_ready, Some(10));
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.output_dir, PathBuf::from("test-results"));
    }

    #[test]
    fn test_rejects_bad_url() {
        let err = HarnessConfig::from_yaml("base_url: localhost:4000").unwrap_err();
        assert!(matches!(err, E2eError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let err = HarnessConfig::from_yaml("request_timeout: 0").unwrap_err();
        assert!(matches!(err, E2eError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("harness.yaml");
        std::fs::write(&path, "output_dir: out\n").unwrap();
        let config = HarnessConfig::from_file(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }
}
