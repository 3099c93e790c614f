//! Messages written to stdout by the runner

use crate::types::{JsonValue, LogLevel};
use serde::Serialize;

/// One line of runner output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Message {
    /// One item, or one one-shot response
    Record {
        /// Operation that produced it
        operation: String,
        /// The item as the service sent it
        record: JsonValue,
    },
    /// Where a manually paginated invocation stopped
    Pagination {
        /// Resume details
        pagination: PaginationReport,
    },
    /// Catalog entry
    Operation {
        /// Operation details
        operation: OperationInfo,
    },
    /// Log message
    Log {
        /// Log entry
        log: LogEntry,
    },
}

/// Resume details for manual pagination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationReport {
    /// Items written
    pub fetched: u64,
    /// Pass as `--next-token` to continue; absent at the end of results
    pub next_token: Option<String>,
}

/// Catalog entry for `operations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationInfo {
    /// API name
    pub name: &'static str,
    /// Command-line name
    pub command: String,
    /// Follows `NextToken`
    pub paginated: bool,
}

/// Log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Severity
    pub level: LogLevel,
    /// Text
    pub message: String,
}

impl Message {
    /// Create a record message
    pub fn record(operation: impl Into<String>, record: JsonValue) -> Self {
        Self::Record {
            operation: operation.into(),
            record,
        }
    }

    /// Create a pagination message
    pub fn pagination(fetched: u64, next_token: Option<String>) -> Self {
        Self::Pagination {
            pagination: PaginationReport {
                fetched,
                next_token,
            },
        }
    }

    /// Create a log message
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            log: LogEntry {
                level,
                message: message.into(),
            },
        }
    }
}
