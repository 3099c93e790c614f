//! AWS SDK transport
//!
//! Carries the same operation calls as [`GameLiftClient`](super::GameLiftClient)
//! through `aws-sdk-gamelift`, so requests are SigV4-signed and credentials
//! come from the standard AWS provider chain. Bodies keep the kit's JSON
//! shapes; each operation maps them onto the SDK's fluent builders and back.

use super::transport::Transport;
use crate::error::{Error, Result, ServiceError};
use crate::operations::{
    self as ops, Alias, ApiOperation, Build, Event, FleetAttributes, FleetCapacity,
    GameServerGroup, GameSession, GameSessionQueue, Instance, MatchmakingConfiguration,
    MatchmakingRuleSet, MatchmakingTicket, OperationKind, Player, PlayerSession, RoutingStrategy,
    Script,
};
use crate::types::{JsonObject, JsonValue};
use async_trait::async_trait;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_gamelift::config::Region;
use aws_sdk_gamelift::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_gamelift::primitives::DateTime as SdkDateTime;
use aws_sdk_gamelift::types as sdk;
use aws_sdk_gamelift::Client;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::{debug, warn};

/// Settings for loading the shared AWS configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkSettings {
    /// Region override
    pub region: Option<String>,
    /// Named profile
    pub profile: Option<String>,
    /// Endpoint override
    pub endpoint_url: Option<String>,
    /// Whole-operation timeout, retries included
    pub timeout: Duration,
}

impl Default for SdkSettings {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            endpoint_url: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// GameLift transport over the AWS SDK
#[derive(Debug, Clone)]
pub struct SdkTransport {
    client: Client,
    timeout: Duration,
}

impl SdkTransport {
    /// Wrap an existing SDK client
    pub fn new(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }

    /// Load credentials and region from the environment and build a client
    pub async fn load(settings: &SdkSettings) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(settings.timeout)
                .build(),
        );
        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(url) = &settings.endpoint_url {
            loader = loader.endpoint_url(url);
        }

        let shared = loader.load().await;
        debug!(
            region = ?shared.region().map(ToString::to_string),
            "Loaded AWS configuration"
        );
        Self::new(Client::new(&shared), settings.timeout)
    }

    /// The underlying SDK client
    pub fn client(&self) -> &Client {
        &self.client
    }

    async fn dispatch<Op: SdkOperation>(&self, body: JsonValue) -> Result<JsonValue> {
        let input: Op::Input = serde_json::from_value(body)?;
        match Op::invoke(self, input).await {
            Ok(output) => {
                debug!(operation = Op::NAME, "SDK request succeeded");
                Ok(serde_json::to_value(output)?)
            }
            Err(error) => {
                warn!(operation = Op::NAME, error = %error, "SDK request failed");
                Err(error)
            }
        }
    }

    fn map_error<E, R>(&self, err: SdkError<E, R>) -> Error
    where
        E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
        R: std::fmt::Debug + Send + Sync + 'static,
    {
        if let SdkError::TimeoutError(_) = err {
            return Error::Timeout {
                timeout_ms: self.timeout.as_millis() as u64,
            };
        }

        let meta = err.as_service_error().map(|e| {
            (
                e.code().unwrap_or("Unknown").to_string(),
                e.message().unwrap_or_default().to_string(),
            )
        });
        match meta {
            Some((code, message)) => {
                Error::Service(ServiceError::new(code, message).with_source(err))
            }
            None => Error::Sdk {
                message: DisplayErrorContext(&err).to_string(),
            },
        }
    }
}

#[async_trait]
impl Transport for SdkTransport {
    async fn send(&self, operation: &str, body: JsonValue) -> Result<JsonValue> {
        match OperationKind::from_name(operation)? {
            OperationKind::ListAliases => self.dispatch::<ops::ListAliases>(body).await,
            OperationKind::ListBuilds => self.dispatch::<ops::ListBuilds>(body).await,
            OperationKind::ListScripts => self.dispatch::<ops::ListScripts>(body).await,
            OperationKind::ListFleets => self.dispatch::<ops::ListFleets>(body).await,
            OperationKind::DescribeFleetAttributes => {
                self.dispatch::<ops::DescribeFleetAttributes>(body).await
            }
            OperationKind::DescribeFleetCapacity => {
                self.dispatch::<ops::DescribeFleetCapacity>(body).await
            }
            OperationKind::DescribeFleetEvents => {
                self.dispatch::<ops::DescribeFleetEvents>(body).await
            }
            OperationKind::DescribeGameSessions => {
                self.dispatch::<ops::DescribeGameSessions>(body).await
            }
            OperationKind::SearchGameSessions => {
                self.dispatch::<ops::SearchGameSessions>(body).await
            }
            OperationKind::DescribeGameSessionQueues => {
                self.dispatch::<ops::DescribeGameSessionQueues>(body).await
            }
            OperationKind::DescribePlayerSessions => {
                self.dispatch::<ops::DescribePlayerSessions>(body).await
            }
            OperationKind::DescribeMatchmakingConfigurations => {
                self.dispatch::<ops::DescribeMatchmakingConfigurations>(body)
                    .await
            }
            OperationKind::DescribeMatchmakingRuleSets => {
                self.dispatch::<ops::DescribeMatchmakingRuleSets>(body).await
            }
            OperationKind::DescribeInstances => {
                self.dispatch::<ops::DescribeInstances>(body).await
            }
            OperationKind::ListGameServerGroups => {
                self.dispatch::<ops::ListGameServerGroups>(body).await
            }
            OperationKind::CreateFleet => self.dispatch::<ops::CreateFleet>(body).await,
            OperationKind::CreateGameSession => {
                self.dispatch::<ops::CreateGameSession>(body).await
            }
            OperationKind::StartMatchmaking => {
                self.dispatch::<ops::StartMatchmaking>(body).await
            }
            OperationKind::DescribeMatchmaking => {
                self.dispatch::<ops::DescribeMatchmaking>(body).await
            }
            OperationKind::StopMatchmaking => self.dispatch::<ops::StopMatchmaking>(body).await,
        }
    }
}

// ============================================================================
// Per-operation calls
// ============================================================================

/// An operation the SDK client can carry
#[async_trait]
trait SdkOperation: ApiOperation {
    async fn invoke(transport: &SdkTransport, input: Self::Input) -> Result<Self::Output>;
}

#[async_trait]
impl SdkOperation for ops::ListAliases {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .list_aliases()
            .set_routing_strategy_type(
                input
                    .routing_strategy_type
                    .as_deref()
                    .map(sdk::RoutingStrategyType::from),
            )
            .set_name(input.name)
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::ListAliasesOutput {
            aliases: items(out.aliases),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::ListBuilds {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .list_builds()
            .set_status(input.status.as_deref().map(sdk::BuildStatus::from))
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::ListBuildsOutput {
            builds: items(out.builds),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::ListScripts {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .list_scripts()
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::ListScriptsOutput {
            scripts: items(out.scripts),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::ListFleets {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .list_fleets()
            .set_build_id(input.build_id)
            .set_script_id(input.script_id)
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::ListFleetsOutput {
            fleet_ids: items(out.fleet_ids),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::DescribeFleetAttributes {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .describe_fleet_attributes()
            .set_fleet_ids(input.fleet_ids)
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::DescribeFleetAttributesOutput {
            fleet_attributes: items(out.fleet_attributes),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::DescribeFleetCapacity {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .describe_fleet_capacity()
            .set_fleet_ids(input.fleet_ids)
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::DescribeFleetCapacityOutput {
            fleet_capacity: items(out.fleet_capacity),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::DescribeFleetEvents {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .describe_fleet_events()
            .set_fleet_id(input.fleet_id)
            .set_start_time(input.start_time.map(to_sdk_time))
            .set_end_time(input.end_time.map(to_sdk_time))
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::DescribeFleetEventsOutput {
            events: items(out.events),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::DescribeGameSessions {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .describe_game_sessions()
            .set_fleet_id(input.fleet_id)
            .set_game_session_id(input.game_session_id)
            .set_alias_id(input.alias_id)
            .set_location(input.location)
            .set_status_filter(input.status_filter)
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::DescribeGameSessionsOutput {
            game_sessions: items(out.game_sessions),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::SearchGameSessions {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .search_game_sessions()
            .set_fleet_id(input.fleet_id)
            .set_alias_id(input.alias_id)
            .set_location(input.location)
            .set_filter_expression(input.filter_expression)
            .set_sort_expression(input.sort_expression)
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::SearchGameSessionsOutput {
            game_sessions: items(out.game_sessions),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::DescribeGameSessionQueues {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .describe_game_session_queues()
            .set_names(input.names)
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::DescribeGameSessionQueuesOutput {
            game_session_queues: items(out.game_session_queues),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::DescribePlayerSessions {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .describe_player_sessions()
            .set_game_session_id(input.game_session_id)
            .set_player_id(input.player_id)
            .set_player_session_id(input.player_session_id)
            .set_player_session_status_filter(input.player_session_status_filter)
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::DescribePlayerSessionsOutput {
            player_sessions: items(out.player_sessions),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::DescribeMatchmakingConfigurations {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .describe_matchmaking_configurations()
            .set_names(input.names)
            .set_rule_set_name(input.rule_set_name)
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::DescribeMatchmakingConfigurationsOutput {
            configurations: items(out.configurations),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::DescribeMatchmakingRuleSets {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .describe_matchmaking_rule_sets()
            .set_names(input.names)
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::DescribeMatchmakingRuleSetsOutput {
            rule_sets: items(out.rule_sets.into_option()),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::DescribeInstances {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .describe_instances()
            .set_fleet_id(input.fleet_id)
            .set_instance_id(input.instance_id)
            .set_location(input.location)
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::DescribeInstancesOutput {
            instances: items(out.instances),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::ListGameServerGroups {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .list_game_server_groups()
            .set_limit(input.limit)
            .set_next_token(input.next_token)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::ListGameServerGroupsOutput {
            game_server_groups: items(out.game_server_groups),
            next_token: out.next_token,
        })
    }
}

#[async_trait]
impl SdkOperation for ops::CreateFleet {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        reject_unmapped(Self::NAME, &input.extra)?;
        let out = t
            .client
            .create_fleet()
            .name(input.name)
            .set_description(input.description)
            .set_build_id(input.build_id)
            .set_script_id(input.script_id)
            .set_ec2_instance_type(
                input
                    .ec2_instance_type
                    .as_deref()
                    .map(sdk::Ec2InstanceType::from),
            )
            .set_fleet_type(input.fleet_type.as_deref().map(sdk::FleetType::from))
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::CreateFleetOutput {
            fleet_attributes: out.fleet_attributes.map(Into::into),
            extra: JsonObject::new(),
        })
    }
}

#[async_trait]
impl SdkOperation for ops::CreateGameSession {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        reject_unmapped(Self::NAME, &input.extra)?;
        let out = t
            .client
            .create_game_session()
            .set_fleet_id(input.fleet_id)
            .set_alias_id(input.alias_id)
            .maximum_player_session_count(input.maximum_player_session_count)
            .set_name(input.name)
            .set_location(input.location)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::CreateGameSessionOutput {
            game_session: out.game_session.map(Into::into),
        })
    }
}

#[async_trait]
impl SdkOperation for ops::StartMatchmaking {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let mut players = Vec::with_capacity(input.players.len());
        for player in input.players {
            reject_unmapped(Self::NAME, &player.extra)?;
            players.push(
                sdk::Player::builder()
                    .player_id(player.player_id)
                    .set_team(player.team)
                    .build(),
            );
        }

        let out = t
            .client
            .start_matchmaking()
            .set_ticket_id(input.ticket_id)
            .configuration_name(input.configuration_name)
            .set_players(Some(players))
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::StartMatchmakingOutput {
            matchmaking_ticket: out.matchmaking_ticket.map(Into::into),
        })
    }
}

#[async_trait]
impl SdkOperation for ops::DescribeMatchmaking {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        let out = t
            .client
            .describe_matchmaking()
            .set_ticket_ids(Some(input.ticket_ids))
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::DescribeMatchmakingOutput {
            ticket_list: items(out.ticket_list),
        })
    }
}

#[async_trait]
impl SdkOperation for ops::StopMatchmaking {
    async fn invoke(t: &SdkTransport, input: Self::Input) -> Result<Self::Output> {
        t.client
            .stop_matchmaking()
            .ticket_id(input.ticket_id)
            .send()
            .await
            .map_err(|e| t.map_error(e))?;

        Ok(ops::StopMatchmakingOutput {})
    }
}

/// Request fields the SDK builders have no setter for
fn reject_unmapped(operation: &str, extra: &JsonObject) -> Result<()> {
    match extra.keys().next() {
        None => Ok(()),
        Some(field) => Err(Error::invalid_value(
            field.clone(),
            format!("not supported by the sdk backend for {operation}"),
        )),
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Normalises members the SDK may model as required or optional
trait IntoOption<T> {
    fn into_option(self) -> Option<T>;
}

impl<T> IntoOption<T> for Option<T> {
    fn into_option(self) -> Option<T> {
        self
    }
}

impl IntoOption<String> for String {
    fn into_option(self) -> Option<String> {
        Some(self)
    }
}

impl<T> IntoOption<Vec<T>> for Vec<T> {
    fn into_option(self) -> Option<Vec<T>> {
        Some(self)
    }
}

fn items<S, T: From<S>>(list: Option<Vec<S>>) -> Vec<T> {
    list.unwrap_or_default().into_iter().map(T::from).collect()
}

fn name_of<E: AsRef<str>>(value: Option<E>) -> Option<String> {
    value.map(|v| v.as_ref().to_string())
}

fn from_sdk_time(value: Option<SdkDateTime>) -> Option<DateTime<Utc>> {
    value.and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos()))
}

fn to_sdk_time(value: DateTime<Utc>) -> SdkDateTime {
    SdkDateTime::from_secs_and_nanos(value.timestamp(), value.timestamp_subsec_nanos())
}

impl From<sdk::RoutingStrategy> for RoutingStrategy {
    fn from(v: sdk::RoutingStrategy) -> Self {
        Self {
            strategy_type: name_of(v.r#type),
            fleet_id: v.fleet_id,
            message: v.message,
        }
    }
}

impl From<sdk::Alias> for Alias {
    fn from(v: sdk::Alias) -> Self {
        Self {
            alias_id: v.alias_id,
            name: v.name,
            routing_strategy: v.routing_strategy.map(Into::into),
            creation_time: from_sdk_time(v.creation_time),
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::Build> for Build {
    fn from(v: sdk::Build) -> Self {
        Self {
            build_id: v.build_id,
            name: v.name,
            version: v.version,
            status: name_of(v.status),
            operating_system: name_of(v.operating_system),
            creation_time: from_sdk_time(v.creation_time),
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::Script> for Script {
    fn from(v: sdk::Script) -> Self {
        Self {
            script_id: v.script_id,
            name: v.name,
            version: v.version,
            size_on_disk: v.size_on_disk,
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::FleetAttributes> for FleetAttributes {
    fn from(v: sdk::FleetAttributes) -> Self {
        Self {
            fleet_id: v.fleet_id,
            fleet_arn: v.fleet_arn,
            name: v.name,
            status: name_of(v.status),
            fleet_type: name_of(v.fleet_type),
            build_id: v.build_id,
            script_id: v.script_id,
            creation_time: from_sdk_time(v.creation_time),
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::FleetCapacity> for FleetCapacity {
    fn from(v: sdk::FleetCapacity) -> Self {
        Self {
            fleet_id: v.fleet_id,
            instance_type: name_of(v.instance_type),
            location: v.location,
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::Event> for Event {
    fn from(v: sdk::Event) -> Self {
        Self {
            event_id: v.event_id,
            resource_id: v.resource_id,
            event_code: name_of(v.event_code),
            message: v.message,
            event_time: from_sdk_time(v.event_time),
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::GameSession> for GameSession {
    fn from(v: sdk::GameSession) -> Self {
        Self {
            game_session_id: v.game_session_id,
            name: v.name,
            fleet_id: v.fleet_id,
            status: name_of(v.status),
            current_player_session_count: v.current_player_session_count,
            maximum_player_session_count: v.maximum_player_session_count,
            ip_address: v.ip_address,
            port: v.port,
            creation_time: from_sdk_time(v.creation_time),
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::GameSessionQueue> for GameSessionQueue {
    fn from(v: sdk::GameSessionQueue) -> Self {
        Self {
            name: v.name,
            game_session_queue_arn: v.game_session_queue_arn,
            timeout_in_seconds: v.timeout_in_seconds,
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::PlayerSession> for PlayerSession {
    fn from(v: sdk::PlayerSession) -> Self {
        Self {
            player_session_id: v.player_session_id,
            player_id: v.player_id,
            game_session_id: v.game_session_id,
            status: name_of(v.status),
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::MatchmakingConfiguration> for MatchmakingConfiguration {
    fn from(v: sdk::MatchmakingConfiguration) -> Self {
        Self {
            name: v.name,
            configuration_arn: v.configuration_arn,
            rule_set_name: v.rule_set_name,
            request_timeout_seconds: v.request_timeout_seconds,
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::MatchmakingRuleSet> for MatchmakingRuleSet {
    fn from(v: sdk::MatchmakingRuleSet) -> Self {
        Self {
            rule_set_name: v.rule_set_name.into_option(),
            rule_set_body: v.rule_set_body.into_option(),
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::Instance> for Instance {
    fn from(v: sdk::Instance) -> Self {
        Self {
            fleet_id: v.fleet_id,
            instance_id: v.instance_id,
            ip_address: v.ip_address,
            status: name_of(v.status),
            instance_type: name_of(v.r#type),
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::GameServerGroup> for GameServerGroup {
    fn from(v: sdk::GameServerGroup) -> Self {
        Self {
            game_server_group_name: v.game_server_group_name,
            game_server_group_arn: v.game_server_group_arn,
            status: name_of(v.status),
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::Player> for Player {
    fn from(v: sdk::Player) -> Self {
        Self {
            player_id: v.player_id.unwrap_or_default(),
            team: v.team,
            extra: JsonObject::new(),
        }
    }
}

impl From<sdk::MatchmakingTicket> for MatchmakingTicket {
    fn from(v: sdk::MatchmakingTicket) -> Self {
        Self {
            ticket_id: v.ticket_id,
            configuration_name: v.configuration_name,
            status: name_of(v.status),
            players: items(v.players),
            start_time: from_sdk_time(v.start_time),
            extra: JsonObject::new(),
        }
    }
}
