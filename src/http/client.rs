//! GameLift JSON 1.1 client
//!
//! Every operation is a `POST /` with the action named in `X-Amz-Target`
//! and the request body as JSON. Failed calls come back as
//! `{"__type": "...#Code", "message": "..."}` and surface as
//! [`ServiceError`]. Nothing is retried here.

use super::rate_limit::{RateLimiter, RateLimiterConfig};
use super::transport::Transport;
use crate::error::{Error, Result, ServiceError};
use crate::types::JsonValue;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Response, StatusCode};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Service prefix for `X-Amz-Target`
pub const TARGET_PREFIX: &str = "GameLift";

/// Content type for JSON 1.1 requests
pub const AMZ_JSON: &str = "application/x-amz-json-1.1";

/// Default endpoint: a GameLift Local instance on the standard port
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

/// Configuration for the GameLift client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service endpoint
    pub endpoint: Url,
    /// Per-request timeout
    pub timeout: Duration,
    /// Rate limiter configuration
    pub rate_limit: Option<RateLimiterConfig>,
    /// Extra headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout: Duration::from_secs(30),
            rate_limit: Some(RateLimiterConfig::default()),
            default_headers: HashMap::new(),
            user_agent: format!("gamelift-kit/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for client config
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
    endpoint: Option<String>,
}

impl ClientConfigBuilder {
    /// Set the endpoint URL
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set rate limiter
    pub fn rate_limit(mut self, config: RateLimiterConfig) -> Self {
        self.config.rate_limit = Some(config);
        self
    }

    /// Disable rate limiting
    pub fn no_rate_limit(mut self) -> Self {
        self.config.rate_limit = None;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config, validating the endpoint
    pub fn build(mut self) -> Result<ClientConfig> {
        if let Some(endpoint) = self.endpoint {
            self.config.endpoint = parse_endpoint(&endpoint)?;
        }
        Ok(self.config)
    }
}

/// Parse and check an endpoint URL
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw)?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::invalid_value(
            "endpoint",
            format!("unsupported scheme '{other}'"),
        )),
    }
}

/// GameLift client over reqwest
pub struct GameLiftClient {
    client: Client,
    config: ClientConfig,
    rate_limiter: Option<RateLimiter>,
}

impl GameLiftClient {
    /// Create a client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let rate_limiter = config.rate_limit.as_ref().map(RateLimiter::new);

        Ok(Self {
            client,
            config,
            rate_limiter,
        })
    }

    /// Endpoint requests are sent to
    pub fn endpoint(&self) -> &Url {
        &self.config.endpoint
    }

    /// Check if rate limiting is enabled
    pub fn has_rate_limiter(&self) -> bool {
        self.rate_limiter.is_some()
    }

    fn map_send_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            return Error::Timeout {
                timeout_ms: self.config.timeout.as_millis() as u64,
            };
        }
        Error::Http(e)
    }
}

#[async_trait]
impl Transport for GameLiftClient {
    async fn send(&self, operation: &str, body: JsonValue) -> Result<JsonValue> {
        if let Some(ref limiter) = self.rate_limiter {
            if !limiter.try_acquire() {
                debug!(operation, "Rate limited, waiting for a permit");
                limiter.wait().await;
            }
        }

        let target = format!("{TARGET_PREFIX}.{operation}");
        let mut req = self
            .client
            .post(self.config.endpoint.clone())
            .header("X-Amz-Target", &target)
            .header(CONTENT_TYPE, AMZ_JSON);

        for (key, value) in &self.config.default_headers {
            req = req.header(key.as_str(), value.as_str());
        }

        let response = req
            .body(serde_json::to_vec(&body)?)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status.is_success() {
            debug!(operation, status = status.as_u16(), "Request succeeded");
            return read_json(response).await;
        }

        let error = decode_error(status, response).await;
        warn!(operation, status = status.as_u16(), error = %error, "Request failed");
        Err(error)
    }
}

impl std::fmt::Debug for GameLiftClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLiftClient")
            .field("config", &self.config)
            .field("has_rate_limiter", &self.rate_limiter.is_some())
            .finish_non_exhaustive()
    }
}

/// Read a success body; an empty body is an empty object
async fn read_json(response: Response) -> Result<JsonValue> {
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(JsonValue::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_str(&text)?)
}

/// Turn a failed response into a service error when the body allows it
async fn decode_error(status: StatusCode, response: Response) -> Error {
    let header_code = error_type_header(response.headers());
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => return Error::Http(e),
    };

    let parsed = serde_json::from_str::<JsonValue>(&text).ok();
    if let Some(err) = parsed.as_ref().and_then(ServiceError::from_json_body) {
        return Error::Service(err);
    }

    if let Some(code) = header_code {
        let message = parsed
            .as_ref()
            .and_then(|body| body.get("message").or_else(|| body.get("Message")))
            .and_then(|v| v.as_str())
            .unwrap_or(&text);
        return Error::service(code, message);
    }

    Error::http_status(status.as_u16(), text)
}

/// `x-amzn-ErrorType: ValidationException:http://internal.amazon.com/...`
fn error_type_header(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get("x-amzn-errortype")?.to_str().ok()?;
    let code = raw.split(':').next().unwrap_or(raw).trim();
    (!code.is_empty()).then(|| code.to_string())
}
