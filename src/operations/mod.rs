//! GameLift operation catalog
//!
//! Typed request/response pairs for the operations the kit can call.
//!
//! # Overview
//!
//! - `paged` - list/describe operations that walk a `NextToken`
//! - `single` - one request, one response
//! - `entities` - records returned by both
//! - `OperationKind` - lookup by API name or command name
//!
//! Requests and responses use the service's JSON 1.1 field names
//! (`PascalCase`).

mod entities;
mod paged;
mod registry;
mod single;

pub use entities::{
    Alias, Build, Event, FleetAttributes, FleetCapacity, GameServerGroup, GameSession,
    GameSessionQueue, Instance, MatchmakingConfiguration, MatchmakingRuleSet, MatchmakingTicket,
    Player, PlayerSession, RoutingStrategy, Script,
};
pub use paged::*;
pub use registry::OperationKind;
pub use single::*;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A single GameLift API action
pub trait ApiOperation {
    /// Action name, sent as `GameLift.{NAME}` in `X-Amz-Target`
    const NAME: &'static str;

    /// Request body
    type Input: Serialize + DeserializeOwned + Clone + Send + Sync;

    /// Response body
    type Output: Serialize + DeserializeOwned + Send;
}
