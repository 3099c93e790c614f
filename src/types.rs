//! Common types used throughout gamelift-kit
//!
//! This module contains shared type definitions, type aliases,
//! and serde helpers used across multiple modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Log Level
// ============================================================================

/// Log level for runner messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

// ============================================================================
// Timestamps
// ============================================================================

/// Serde adapter for optional JSON 1.1 timestamps.
///
/// The service encodes timestamps as epoch seconds with a fractional part
/// (`1700000000.123`).
pub mod epoch_seconds_option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => {
                let secs = ts.timestamp() as f64 + f64::from(ts.timestamp_subsec_millis()) / 1000.0;
                serializer.serialize_f64(secs)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<f64>::deserialize(deserializer)?;
        raw.map(|secs| {
            let whole = secs.floor();
            let nanos = ((secs - whole) * 1_000_000_000.0).round() as u32;
            DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))
                .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {secs}")))
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(default, with = "epoch_seconds_option")]
        at: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_epoch_seconds_decode() {
        let s: Stamped = serde_json::from_str(r#"{"at": 1700000000.5}"#).unwrap();
        let at = s.at.unwrap();
        assert_eq!(at.timestamp(), 1_700_000_000);
        assert_eq!(at.timestamp_subsec_millis(), 500);

        let s: Stamped = serde_json::from_str(r#"{"at": 1700000000}"#).unwrap();
        assert_eq!(s.at, Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap()));
    }

    #[test]
    fn test_epoch_seconds_missing_and_null() {
        let s: Stamped = serde_json::from_str("{}").unwrap();
        assert!(s.at.is_none());

        let s: Stamped = serde_json::from_str(r#"{"at": null}"#).unwrap();
        assert!(s.at.is_none());
    }

    #[test]
    fn test_epoch_seconds_encode() {
        let s = Stamped {
            at: Some(Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap()),
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["at"], serde_json::json!(1_700_000_000.25));
    }

    #[test]
    fn test_log_level_to_tracing() {
        assert_eq!(tracing::Level::from(LogLevel::Warn), tracing::Level::WARN);
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
    }
}
