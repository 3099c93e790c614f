//! Operation name registry
//!
//! Maps user-facing names onto the operations the kit can run.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Every operation the kit can invoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    // paginated
    ListAliases,
    ListBuilds,
    ListScripts,
    ListFleets,
    DescribeFleetAttributes,
    DescribeFleetCapacity,
    DescribeFleetEvents,
    DescribeGameSessions,
    SearchGameSessions,
    DescribeGameSessionQueues,
    DescribePlayerSessions,
    DescribeMatchmakingConfigurations,
    DescribeMatchmakingRuleSets,
    DescribeInstances,
    ListGameServerGroups,
    // one-shot
    CreateFleet,
    CreateGameSession,
    StartMatchmaking,
    DescribeMatchmaking,
    StopMatchmaking,
}

impl OperationKind {
    /// All operations, paginated first
    pub const ALL: [OperationKind; 20] = [
        Self::ListAliases,
        Self::ListBuilds,
        Self::ListScripts,
        Self::ListFleets,
        Self::DescribeFleetAttributes,
        Self::DescribeFleetCapacity,
        Self::DescribeFleetEvents,
        Self::DescribeGameSessions,
        Self::SearchGameSessions,
        Self::DescribeGameSessionQueues,
        Self::DescribePlayerSessions,
        Self::DescribeMatchmakingConfigurations,
        Self::DescribeMatchmakingRuleSets,
        Self::DescribeInstances,
        Self::ListGameServerGroups,
        Self::CreateFleet,
        Self::CreateGameSession,
        Self::StartMatchmaking,
        Self::DescribeMatchmaking,
        Self::StopMatchmaking,
    ];

    /// API action name, as sent in `X-Amz-Target`
    pub fn name(self) -> &'static str {
        match self {
            Self::ListAliases => "ListAliases",
            Self::ListBuilds => "ListBuilds",
            Self::ListScripts => "ListScripts",
            Self::ListFleets => "ListFleets",
            Self::DescribeFleetAttributes => "DescribeFleetAttributes",
            Self::DescribeFleetCapacity => "DescribeFleetCapacity",
            Self::DescribeFleetEvents => "DescribeFleetEvents",
            Self::DescribeGameSessions => "DescribeGameSessions",
            Self::SearchGameSessions => "SearchGameSessions",
            Self::DescribeGameSessionQueues => "DescribeGameSessionQueues",
            Self::DescribePlayerSessions => "DescribePlayerSessions",
            Self::DescribeMatchmakingConfigurations => "DescribeMatchmakingConfigurations",
            Self::DescribeMatchmakingRuleSets => "DescribeMatchmakingRuleSets",
            Self::DescribeInstances => "DescribeInstances",
            Self::ListGameServerGroups => "ListGameServerGroups",
            Self::CreateFleet => "CreateFleet",
            Self::CreateGameSession => "CreateGameSession",
            Self::StartMatchmaking => "StartMatchmaking",
            Self::DescribeMatchmaking => "DescribeMatchmaking",
            Self::StopMatchmaking => "StopMatchmaking",
        }
    }

    /// Kebab-case command name (`DescribeGameSessions` -> `describe-game-sessions`)
    pub fn cli_name(self) -> String {
        to_kebab_case(self.name())
    }

    /// Whether the operation walks a continuation token
    pub fn is_paginated(self) -> bool {
        !matches!(
            self,
            Self::CreateFleet
                | Self::CreateGameSession
                | Self::StartMatchmaking
                | Self::DescribeMatchmaking
                | Self::StopMatchmaking
        )
    }

    /// Look up an operation by API name or kebab-case name, ignoring case
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(wanted)
                    || kind.cli_name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| Error::unknown_operation(wanted))
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
