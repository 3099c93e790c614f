//! Entity records returned by GameLift operations
//!
//! Each record types the fields the kit itself reads or that users filter
//! on most, and keeps everything else in `extra` so output is lossless.

use crate::types::{epoch_seconds_option, JsonObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Routing strategy attached to an alias
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RoutingStrategy {
    /// Routing type (`SIMPLE` or `TERMINAL`)
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub strategy_type: Option<String>,
    /// Fleet the alias points to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_id: Option<String>,
    /// Message returned for a terminal alias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Fleet alias
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Alias {
    /// Alias ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias_id: Option<String>,
    /// Alias name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Where the alias sends traffic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_strategy: Option<RoutingStrategy>,
    /// When the alias was created
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "epoch_seconds_option"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Uploaded game server build
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Build {
    /// Build ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_id: Option<String>,
    /// Build name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Version label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Upload status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Operating system the build runs on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    /// When the resource was created
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "epoch_seconds_option"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Realtime server script
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Script {
    /// Script ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_id: Option<String>,
    /// Script name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Version label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Stored size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_on_disk: Option<i64>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fleet configuration and status
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FleetAttributes {
    /// Fleet ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_id: Option<String>,
    /// Fleet ARN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_arn: Option<String>,
    /// Fleet name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fleet status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// On-demand or spot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_type: Option<String>,
    /// Build ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_id: Option<String>,
    /// Script ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script_id: Option<String>,
    /// When the resource was created
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "epoch_seconds_option"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Instance counts for one fleet
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FleetCapacity {
    /// Fleet ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_id: Option<String>,
    /// EC2 instance type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Fleet location (Region or Local Zone)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fleet event log entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Event {
    /// Event ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    /// ID of the resource the event is about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Event type code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_code: Option<String>,
    /// Event description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// When the event happened
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "epoch_seconds_option"
    )]
    pub event_time: Option<DateTime<Utc>>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Game session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameSession {
    /// Game session ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_session_id: Option<String>,
    /// Session name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Fleet ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_id: Option<String>,
    /// Session status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Players currently connected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_player_session_count: Option<i32>,
    /// Most players the session allows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_player_session_count: Option<i32>,
    /// Public IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Port players connect on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<i32>,
    /// When the resource was created
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "epoch_seconds_option"
    )]
    pub creation_time: Option<DateTime<Utc>>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Game session placement queue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameSessionQueue {
    /// Queue name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Queue ARN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_session_queue_arn: Option<String>,
    /// Placement timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_in_seconds: Option<i32>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Player slot in a game session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerSession {
    /// Player session ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_session_id: Option<String>,
    /// Player ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
    /// Game session ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_session_id: Option<String>,
    /// Player session status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// FlexMatch matchmaking configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchmakingConfiguration {
    /// Configuration name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Configuration ARN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_arn: Option<String>,
    /// Rule set the configuration uses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_set_name: Option<String>,
    /// Ticket timeout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_seconds: Option<i32>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// FlexMatch rule set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchmakingRuleSet {
    /// Rule set name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_set_name: Option<String>,
    /// Rule set JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_set_body: Option<String>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Fleet instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    /// Fleet ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fleet_id: Option<String>,
    /// Instance ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    /// Public IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Instance status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// EC2 instance type
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// FleetIQ game server group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameServerGroup {
    /// Group name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_server_group_name: Option<String>,
    /// Group ARN
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_server_group_arn: Option<String>,
    /// Group status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Player entry in a matchmaking request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    /// Player ID
    pub player_id: String,
    /// Team the player is assigned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Matchmaking ticket
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MatchmakingTicket {
    /// Ticket ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
    /// Matchmaking configuration name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration_name: Option<String>,
    /// Ticket status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Players on the ticket
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub players: Vec<Player>,
    /// When the ticket was submitted
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "epoch_seconds_option"
    )]
    pub start_time: Option<DateTime<Utc>>,
    /// Fields without a typed counterpart
    #[serde(flatten)]
    pub extra: JsonObject,
}
