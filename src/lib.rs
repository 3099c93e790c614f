// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # gamelift-kit
//!
//! Typed GameLift operations, a command-line runner, and the auto-pagination
//! loop that ties them together.
//!
//! ## Features
//!
//! - **Auto-pagination**: follow `NextToken` until the results run out, or
//!   stop at a caller-chosen item limit and hand back the resume token
//! - **Typed operations**: request/response structs with the service's
//!   JSON 1.1 field names
//! - **JSON 1.1 transport**: `X-Amz-Target` dispatch, service error decoding,
//!   client-side rate limiting, for GameLift Local
//! - **AWS SDK transport**: the same calls, signed, against the hosted service
//! - **Cancellation**: every loop checks a cancellation token before each call
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::TryStreamExt;
//! use gamelift_kit::http::{call, GameLiftClient};
//! use gamelift_kit::operations::{ListBuilds, ListBuildsInput};
//! use gamelift_kit::{paginate, PageOptions};
//!
//! #[tokio::main]
//! async fn main() -> gamelift_kit::Result<()> {
//!     let client = GameLiftClient::new()?;
//!
//!     let builds: Vec<_> = paginate(
//!         ListBuildsInput::default(),
//!         PageOptions::new().limit(50),
//!         |input| {
//!             let client = &client;
//!             async move { call::<ListBuilds, _>(client, &input).await }
//!         },
//!     )
//!     .try_collect()
//!     .await?;
//!
//!     println!("{} builds", builds.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  cli::Runner  (invoke / operations)             │
//! │   flags + config → PageOptions → RECORD / PAGINATION messages   │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴───────────┬──────────────────────┐
//! │  operations  │        pagination         │        http          │
//! ├──────────────┼───────────────────────────┼──────────────────────┤
//! │ ListBuilds   │ IterationState            │ Transport trait      │
//! │ Describe*    │ termination rules         │ GameLiftClient       │
//! │ Matchmaking  │ Stream / Iterator loops   │ SdkTransport         │
//! │              │                           │ Rate limit           │
//! └──────────────┴───────────────────────────┴──────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Auto-pagination loop
pub mod pagination;

/// Typed GameLift operations
pub mod operations;

/// JSON 1.1 transport with rate limiting
pub mod http;

/// Configuration loading
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result, ServiceError};
pub use types::*;

pub use pagination::{
    paginate, paginate_pages, ItemIter, Page, PageIter, PageOptions, PageRequest, PageResponse,
    StopReason,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
