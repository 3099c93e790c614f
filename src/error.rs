//! Error types for gamelift-kit
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Boxed inner cause carried by a [`ServiceError`]
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A failure reported by the service collaborator.
///
/// The fetch loop never inspects this; it only propagates it.
#[derive(Error, Debug)]
#[error("{code}: {message}")]
pub struct ServiceError {
    /// Error code reported by the service (e.g. `NotFoundException`)
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Optional inner cause
    #[source]
    pub source: Option<BoxError>,
}

impl ServiceError {
    /// Create a service error without an inner cause
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Attach an inner cause
    #[must_use]
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Parse a JSON 1.1 error body (`{"__type": "...#Code", "message": "..."}`)
    ///
    /// Returns `None` when the body does not look like a service error.
    pub fn from_json_body(body: &serde_json::Value) -> Option<Self> {
        let raw_type = body.get("__type").and_then(|v| v.as_str())?;
        // "com.amazonaws.gamelift#NotFoundException" -> "NotFoundException"
        let code = raw_type.rsplit('#').next().unwrap_or(raw_type);
        let message = body
            .get("message")
            .or_else(|| body.get("Message"))
            .and_then(|v| v.as_str())
            .unwrap_or_default();
        Some(Self::new(code, message))
    }
}

/// The main error type for gamelift-kit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("AWS SDK request failed: {message}")]
    Sdk { message: String },

    // ============================================================================
    // Service Errors
    // ============================================================================
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    #[error("Unknown operation: {name}")]
    UnknownOperation { name: String },

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("Pagination cancelled")]
    Cancelled,

    #[error("Stopped after {pages} pages (resume with next token {next_token})")]
    PageCapReached { pages: u32, next_token: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a service error
    pub fn service(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Service(ServiceError::new(code, message))
    }

    /// Create an unknown operation error
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation { name: name.into() }
    }

    /// The service error carried by this error, if any
    pub fn as_service(&self) -> Option<&ServiceError> {
        match self {
            Error::Service(e) => Some(e),
            _ => None,
        }
    }

    /// Check if this error came from cancelling an in-flight iteration
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

/// Result type alias for gamelift-kit
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }
}
