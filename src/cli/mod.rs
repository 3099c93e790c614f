//! CLI module
//!
//! Command-line interface for calling GameLift operations.
//!
//! # Commands
//!
//! - `invoke` - Call one operation, following pagination where it applies
//! - `operations` - List the operation catalog
//!
//! Results go to stdout as one JSON message per line; logs go to stderr.

mod commands;
mod message;
mod runner;

pub use commands::{Cli, Commands, InvokeArgs, OutputFormat};
pub use message::{LogEntry, Message, OperationInfo, PaginationReport};
pub use runner::Runner;

#[cfg(test)]
mod tests;
