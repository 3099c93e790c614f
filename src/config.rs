//! Configuration for gamelift-kit
//!
//! Settings come from three layers, later layers winning:
//! 1. a YAML file (`--config`)
//! 2. environment variables (`GAMELIFT_BACKEND`, `GAMELIFT_ENDPOINT`,
//!    `GAMELIFT_TIMEOUT_SECS`)
//! 3. command-line flags, applied by the runner
//!
//! The `local` backend talks unsigned JSON 1.1 to `endpoint` (GameLift
//! Local). The `sdk` backend signs calls with the AWS SDK; region and
//! credentials come from `aws` and then the usual AWS environment.
//!
//! ```yaml
//! backend: local
//! endpoint: http://localhost:8080
//! aws:
//!   region: us-west-2
//!   profile: games
//! http:
//!   timeout_seconds: 10
//!   rate_limit:
//!     requests_per_second: 5
//!     burst_size: 5
//! pagination:
//!   page_size: 50
//!   max_pages: 1000
//! ```

use crate::error::{Error, Result};
use crate::http::{parse_endpoint, ClientConfig, RateLimiterConfig, SdkSettings, DEFAULT_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Environment variable selecting the backend
pub const ENV_BACKEND: &str = "GAMELIFT_BACKEND";

/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "GAMELIFT_ENDPOINT";

/// Environment variable overriding the request timeout (seconds)
pub const ENV_TIMEOUT: &str = "GAMELIFT_TIMEOUT_SECS";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete kit configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitConfig {
    /// Which client carries calls
    #[serde(default)]
    pub backend: Backend,

    /// GameLift Local endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// AWS SDK settings
    #[serde(default)]
    pub aws: AwsConfig,

    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,

    /// Pagination defaults
    #[serde(default)]
    pub pagination: PaginationDefaults,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for KitConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            endpoint: default_endpoint(),
            aws: AwsConfig::default(),
            http: HttpConfig::default(),
            pagination: PaginationDefaults::default(),
        }
    }
}

// ============================================================================
// Backend
// ============================================================================

/// Client that carries operation calls
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Unsigned JSON 1.1 over reqwest, for GameLift Local
    #[default]
    Local,
    /// Signed calls through the AWS SDK
    Sdk,
}

impl std::str::FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "sdk" | "aws" => Ok(Self::Sdk),
            other => Err(Error::invalid_value(
                "backend",
                format!("unknown backend '{other}' (expected local or sdk)"),
            )),
        }
    }
}

/// AWS settings used by the SDK backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsConfig {
    /// Region; falls back to the AWS environment and profile
    #[serde(default)]
    pub region: Option<String>,

    /// Named profile from the shared config files
    #[serde(default)]
    pub profile: Option<String>,

    /// Endpoint override; the SDK resolves the regional endpoint when unset
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

// ============================================================================
// HTTP Config
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Rate limiting; omit to disable
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            rate_limit: default_rate_limit(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

// ============================================================================
// Pagination Defaults
// ============================================================================

/// Defaults for paginated operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginationDefaults {
    /// Page-size hint sent when the caller gives none
    #[serde(default)]
    pub page_size: Option<i32>,

    /// Safety cap on pages per invocation
    #[serde(default)]
    pub max_pages: Option<u32>,
}

// ============================================================================
// Loading
// ============================================================================

impl KitConfig {
    /// Load a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {e}",
                    path.display()
                ))
            }
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Self::from_yaml(&content)
    }

    /// Parse config from YAML
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_BACKEND).filter(|v| !v.trim().is_empty()) {
            self.backend = raw.parse()?;
        }

        if let Some(endpoint) = lookup(ENV_ENDPOINT).filter(|v| !v.trim().is_empty()) {
            self.endpoint = endpoint.trim().to_string();
        }

        if let Some(raw) = lookup(ENV_TIMEOUT) {
            self.http.timeout_seconds = raw
                .trim()
                .parse()
                .map_err(|e| Error::invalid_value(ENV_TIMEOUT, format!("{e}")))?;
        }

        self.validate()
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        parse_endpoint(&self.endpoint)?;

        if let Some(url) = &self.aws.endpoint_url {
            parse_endpoint(url)?;
        }

        if self.http.timeout_seconds == 0 {
            return Err(Error::invalid_value(
                "http.timeout_seconds",
                "must be greater than 0",
            ));
        }

        if let Some(rate) = &self.http.rate_limit {
            if rate.requests_per_second == 0 {
                return Err(Error::invalid_value(
                    "http.rate_limit.requests_per_second",
                    "must be greater than 0",
                ));
            }
        }

        if let Some(size) = self.pagination.page_size {
            if size < 1 {
                return Err(Error::invalid_value(
                    "pagination.page_size",
                    "must be at least 1",
                ));
            }
        }

        if self.pagination.max_pages == Some(0) {
            return Err(Error::invalid_value(
                "pagination.max_pages",
                "must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Build the HTTP client configuration
    pub fn client_config(&self) -> Result<ClientConfig> {
        let builder = ClientConfig::builder()
            .endpoint(&self.endpoint)
            .timeout(Duration::from_secs(self.http.timeout_seconds));

        let builder = match self.http.rate_limit {
            Some(rate) => builder.rate_limit(rate),
            None => builder.no_rate_limit(),
        };

        builder.build()
    }

    /// Build the AWS SDK settings
    pub fn sdk_settings(&self) -> SdkSettings {
        SdkSettings {
            region: self.aws.region.clone(),
            profile: self.aws.profile.clone(),
            endpoint_url: self.aws.endpoint_url.clone(),
            timeout: Duration::from_secs(self.http.timeout_seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = KitConfig::default();
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.http.timeout_seconds, 30);
        assert!(config.http.rate_limit.is_some());
        assert_eq!(config.pagination, PaginationDefaults::default());
        assert_eq!(config.backend, Backend::Local);
        assert_eq!(config.aws, AwsConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sdk_backend_from_yaml() {
        let config = KitConfig::from_yaml(
            r"
backend: sdk
aws:
  region: eu-west-1
  profile: games
http:
  timeout_seconds: 12
",
        )
        .unwrap();

        assert_eq!(config.backend, Backend::Sdk);
        let settings = config.sdk_settings();
        assert_eq!(settings.region.as_deref(), Some("eu-west-1"));
        assert_eq!(settings.profile.as_deref(), Some("games"));
        assert_eq!(settings.endpoint_url, None);
        assert_eq!(settings.timeout, Duration::from_secs(12));
    }

    #[test]
    fn test_sdk_endpoint_url_is_validated() {
        let err = KitConfig::from_yaml("aws:\n  endpoint_url: ftp://example.com\n").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_env_backend() {
        let mut config = KitConfig::default();
        config
            .apply_env_from(|key| (key == ENV_BACKEND).then(|| "SDK".to_string()))
            .unwrap();
        assert_eq!(config.backend, Backend::Sdk);

        let err = config
            .apply_env_from(|key| (key == ENV_BACKEND).then(|| "carrier-pigeon".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("unknown backend"));
    }

    #[test]
    fn test_from_yaml_full() {
        let config = KitConfig::from_yaml(
            r"
endpoint: https://gamelift.us-west-2.amazonaws.com
http:
  timeout_seconds: 10
  rate_limit:
    requests_per_second: 2
    burst_size: 4
pagination:
  page_size: 50
  max_pages: 100
",
        )
        .unwrap();

        assert_eq!(config.endpoint, "https://gamelift.us-west-2.amazonaws.com");
        assert_eq!(config.http.timeout_seconds, 10);
        assert_eq!(config.http.rate_limit, Some(RateLimiterConfig::new(2, 4)));
        assert_eq!(config.pagination.page_size, Some(50));
        assert_eq!(config.pagination.max_pages, Some(100));
    }

    #[test]
    fn test_from_yaml_partial_uses_defaults() {
        let config = KitConfig::from_yaml("pagination:\n  page_size: 10\n").unwrap();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.http, HttpConfig::default());
        assert_eq!(config.pagination.page_size, Some(10));
    }

    #[test]
    fn test_rate_limit_can_be_disabled() {
        let config = KitConfig::from_yaml("http:\n  rate_limit: null\n").unwrap();
        assert!(config.http.rate_limit.is_none());
        assert!(config.client_config().unwrap().rate_limit.is_none());
    }

    #[test]
    fn test_validation_errors() {
        let err = KitConfig::from_yaml("endpoint: localhost").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = KitConfig::from_yaml("http:\n  timeout_seconds: 0\n").unwrap_err();
        assert!(err.to_string().contains("http.timeout_seconds"));

        let err = KitConfig::from_yaml("pagination:\n  page_size: 0\n").unwrap_err();
        assert!(err.to_string().contains("pagination.page_size"));

        let err = KitConfig::from_yaml("pagination:\n  max_pages: 0\n").unwrap_err();
        assert!(err.to_string().contains("pagination.max_pages"));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_ENDPOINT, "http://127.0.0.1:9080"),
            (ENV_TIMEOUT, "5"),
        ]
        .into_iter()
        .collect();

        let mut config = KitConfig::default();
        config
            .apply_env_from(|key| env.get(key).map(|v| (*v).to_string()))
            .unwrap();

        assert_eq!(config.endpoint, "http://127.0.0.1:9080");
        assert_eq!(config.http.timeout_seconds, 5);
    }

    #[test]
    fn test_env_bad_timeout() {
        let mut config = KitConfig::default();
        let err = config
            .apply_env_from(|key| (key == ENV_TIMEOUT).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "endpoint: http://localhost:7777").unwrap();

        let config = KitConfig::from_file(file.path()).unwrap();
        assert_eq!(config.endpoint, "http://localhost:7777");

        let client = config.client_config().unwrap();
        assert_eq!(client.endpoint.port(), Some(7777));
        assert_eq!(client.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = KitConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
