//! Paginated list/describe operations
//!
//! Every operation here follows the same shape: optional filters plus
//! `Limit` and `NextToken` on the request, one item list plus `NextToken` on
//! the response. The macro stamps out the request/response pair and wires
//! both into the fetch loop.

use super::entities::{
    Alias, Build, Event, FleetAttributes, FleetCapacity, GameServerGroup, GameSession,
    GameSessionQueue, Instance, MatchmakingConfiguration, MatchmakingRuleSet, PlayerSession,
    Script,
};
use super::ApiOperation;
use crate::pagination::{PageRequest, PageResponse};
use crate::types::epoch_seconds_option;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! paged_operation {
    (
        $(#[$doc:meta])*
        $op:ident {
            input $input:ident { $( $(#[$fmeta:meta])* $field:ident : $fty:ty ),* $(,)? }
            output $output:ident { $items:ident : $item:ty }
        }
    ) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $op;

        impl ApiOperation for $op {
            const NAME: &'static str = stringify!($op);
            type Input = $input;
            type Output = $output;
        }

        #[doc = concat!("Request for `", stringify!($op), "`")]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $input {
            $(
                #[doc = concat!("`", stringify!($field), "` filter; omitted when unset")]
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$fty>,
            )*
            /// Page-size hint
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub limit: Option<i32>,
            /// Continuation token
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub next_token: Option<String>,
        }

        impl PageRequest for $input {
            fn set_next_token(&mut self, token: Option<String>) {
                self.next_token = token;
            }

            fn set_page_size(&mut self, page_size: Option<i32>) {
                self.limit = page_size;
            }
        }

        #[doc = concat!("Response for `", stringify!($op), "`")]
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "PascalCase")]
        pub struct $output {
            /// Items on this page
            #[serde(default)]
            pub $items: Vec<$item>,
            /// Token for the next page; absent on the last one
            #[serde(default, skip_serializing_if = "Option::is_none")]
            pub next_token: Option<String>,
        }

        impl PageResponse for $output {
            type Item = $item;

            fn into_page(self) -> (Vec<$item>, Option<String>) {
                (self.$items, self.next_token)
            }
        }
    };
}

paged_operation! {
    /// List fleet aliases
    ListAliases {
        input ListAliasesInput { routing_strategy_type: String, name: String }
        output ListAliasesOutput { aliases: Alias }
    }
}

paged_operation! {
    /// List uploaded builds
    ListBuilds {
        input ListBuildsInput { status: String }
        output ListBuildsOutput { builds: Build }
    }
}

paged_operation! {
    /// List Realtime scripts
    ListScripts {
        input ListScriptsInput {}
        output ListScriptsOutput { scripts: Script }
    }
}

paged_operation! {
    /// List fleet IDs, optionally for one build or script
    ListFleets {
        input ListFleetsInput { build_id: String, script_id: String }
        output ListFleetsOutput { fleet_ids: String }
    }
}

paged_operation! {
    /// Describe fleet configuration
    DescribeFleetAttributes {
        input DescribeFleetAttributesInput { fleet_ids: Vec<String> }
        output DescribeFleetAttributesOutput { fleet_attributes: FleetAttributes }
    }
}

paged_operation! {
    /// Describe fleet instance counts
    DescribeFleetCapacity {
        input DescribeFleetCapacityInput { fleet_ids: Vec<String> }
        output DescribeFleetCapacityOutput { fleet_capacity: FleetCapacity }
    }
}

paged_operation! {
    /// Read a fleet's event log
    DescribeFleetEvents {
        input DescribeFleetEventsInput {
            fleet_id: String,
            #[serde(with = "epoch_seconds_option")]
            start_time: DateTime<Utc>,
            #[serde(with = "epoch_seconds_option")]
            end_time: DateTime<Utc>,
        }
        output DescribeFleetEventsOutput { events: Event }
    }
}

paged_operation! {
    /// Describe game sessions on a fleet or alias
    DescribeGameSessions {
        input DescribeGameSessionsInput {
            fleet_id: String,
            game_session_id: String,
            alias_id: String,
            location: String,
            status_filter: String,
        }
        output DescribeGameSessionsOutput { game_sessions: GameSession }
    }
}

paged_operation! {
    /// Search active game sessions with a filter expression
    SearchGameSessions {
        input SearchGameSessionsInput {
            fleet_id: String,
            alias_id: String,
            location: String,
            filter_expression: String,
            sort_expression: String,
        }
        output SearchGameSessionsOutput { game_sessions: GameSession }
    }
}

paged_operation! {
    /// Describe game session queues
    DescribeGameSessionQueues {
        input DescribeGameSessionQueuesInput { names: Vec<String> }
        output DescribeGameSessionQueuesOutput { game_session_queues: GameSessionQueue }
    }
}

paged_operation! {
    /// Describe player sessions
    DescribePlayerSessions {
        input DescribePlayerSessionsInput {
            game_session_id: String,
            player_id: String,
            player_session_id: String,
            player_session_status_filter: String,
        }
        output DescribePlayerSessionsOutput { player_sessions: PlayerSession }
    }
}

paged_operation! {
    /// Describe FlexMatch configurations
    DescribeMatchmakingConfigurations {
        input DescribeMatchmakingConfigurationsInput { names: Vec<String>, rule_set_name: String }
        output DescribeMatchmakingConfigurationsOutput { configurations: MatchmakingConfiguration }
    }
}

paged_operation! {
    /// Describe FlexMatch rule sets
    DescribeMatchmakingRuleSets {
        input DescribeMatchmakingRuleSetsInput { names: Vec<String> }
        output DescribeMatchmakingRuleSetsOutput { rule_sets: MatchmakingRuleSet }
    }
}

paged_operation! {
    /// Describe the instances of a fleet
    DescribeInstances {
        input DescribeInstancesInput { fleet_id: String, instance_id: String, location: String }
        output DescribeInstancesOutput { instances: Instance }
    }
}

paged_operation! {
    /// List FleetIQ game server groups
    ListGameServerGroups {
        input ListGameServerGroupsInput {}
        output ListGameServerGroupsOutput { game_server_groups: GameServerGroup }
    }
}
