//! One-shot operations
//!
//! Single request, single response, no continuation token.

use super::entities::{FleetAttributes, GameSession, MatchmakingTicket, Player};
use super::ApiOperation;
use crate::types::JsonObject;
use serde::{Deserialize, Serialize};

// ============================================================================
// CreateFleet
// ============================================================================

/// Create a fleet of instances for a build or script
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateFleet;

impl ApiOperation for CreateFleet {
    const NAME: &'static str = "CreateFleet";
    type Input = CreateFleetInput;
    type Output = CreateFleetOutput;
}

/// Request for `CreateFleet`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFleetInput {
    /// Fleet name
    pub name: String,
    /// Fleet description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Build to deploy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_id: Option<String>,
    /// Script to deploy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_id: Option<String>,
    /// EC2 instance type
    #[serde(
        rename = "EC2InstanceType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ec2_instance_type: Option<String>,
    /// On-demand or spot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_type: Option<String>,
    /// Remaining request fields, passed through untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response for `CreateFleet`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateFleetOutput {
    /// The new fleet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_attributes: Option<FleetAttributes>,
    /// Remaining response fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

// ============================================================================
// CreateGameSession
// ============================================================================

/// Start a game session on a fleet or alias
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateGameSession;

impl ApiOperation for CreateGameSession {
    const NAME: &'static str = "CreateGameSession";
    type Input = CreateGameSessionInput;
    type Output = CreateGameSessionOutput;
}

/// Request for `CreateGameSession`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGameSessionInput {
    /// Fleet to host the session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_id: Option<String>,
    /// Alias resolving to the fleet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_id: Option<String>,
    /// Most players the session allows
    pub maximum_player_session_count: i32,
    /// Session name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fleet location to place the session in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response for `CreateGameSession`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGameSessionOutput {
    /// The new session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_session: Option<GameSession>,
}

// ============================================================================
// StartMatchmaking
// ============================================================================

/// Submit a FlexMatch ticket
#[derive(Debug, Clone, Copy, Default)]
pub struct StartMatchmaking;

impl ApiOperation for StartMatchmaking {
    const NAME: &'static str = "StartMatchmaking";
    type Input = StartMatchmakingInput;
    type Output = StartMatchmakingOutput;
}

/// Request for `StartMatchmaking`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartMatchmakingInput {
    /// Ticket ID; the service picks one when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    /// Matchmaking configuration name
    pub configuration_name: String,
    /// Players to match
    pub players: Vec<Player>,
}

/// Response for `StartMatchmaking`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartMatchmakingOutput {
    /// The submitted ticket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matchmaking_ticket: Option<MatchmakingTicket>,
}

// ============================================================================
// DescribeMatchmaking
// ============================================================================

/// Read the state of matchmaking tickets
#[derive(Debug, Clone, Copy, Default)]
pub struct DescribeMatchmaking;

impl ApiOperation for DescribeMatchmaking {
    const NAME: &'static str = "DescribeMatchmaking";
    type Input = DescribeMatchmakingInput;
    type Output = DescribeMatchmakingOutput;
}

/// Request for `DescribeMatchmaking`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeMatchmakingInput {
    /// Tickets to describe
    pub ticket_ids: Vec<String>,
}

/// Response for `DescribeMatchmaking`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeMatchmakingOutput {
    /// Matching tickets
    #[serde(default)]
    pub ticket_list: Vec<MatchmakingTicket>,
}

// ============================================================================
// StopMatchmaking
// ============================================================================

/// Cancel a matchmaking ticket
#[derive(Debug, Clone, Copy, Default)]
pub struct StopMatchmaking;

impl ApiOperation for StopMatchmaking {
    const NAME: &'static str = "StopMatchmaking";
    type Input = StopMatchmakingInput;
    type Output = StopMatchmakingOutput;
}

/// Request for `StopMatchmaking`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StopMatchmakingInput {
    /// Ticket to cancel
    pub ticket_id: String,
}

/// Empty on success
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopMatchmakingOutput {}
