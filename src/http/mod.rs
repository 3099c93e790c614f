//! HTTP transport module
//!
//! Carries operation calls to a GameLift-compatible endpoint.
//!
//! # Features
//!
//! - **JSON 1.1 protocol**: `X-Amz-Target` dispatch, `__type` error decoding
//! - **AWS SDK backend**: signed calls to the hosted service
//! - **Rate Limiting**: Token bucket rate limiter using governor
//! - **Transport seam**: `Transport` trait so callers and tests can swap the wire

mod client;
mod rate_limit;
mod sdk;
mod transport;

pub use client::{
    parse_endpoint, ClientConfig, ClientConfigBuilder, GameLiftClient, AMZ_JSON,
    DEFAULT_ENDPOINT, TARGET_PREFIX,
};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use sdk::{SdkSettings, SdkTransport};
pub use transport::{call, Transport};
