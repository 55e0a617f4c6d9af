use crate::planner::ConfigError;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use std::str::FromStr;

pub const RELAXATION_VAR: &str = "ROUTE_PLANNER_RELAXATION";
pub const TIE_BREAK_VAR: &str = "ROUTE_PLANNER_TIE_BREAK";

/// How a node's cost is treated once it has been discovered.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Relaxation {
    /// The first path to discover a node fixes its parent and cost.
    /// A node is marked visited as soon as it enters the frontier and is
    /// never enqueued twice. Cheaper paths found later are ignored, so the
    /// resulting route is not guaranteed to be the shortest.
    #[default]
    FirstDiscovery,

    /// Textbook A*. A discovered node which has not yet been expanded is
    /// re-parented whenever a cheaper path to it is found.
    Reopen,
}

/// Ordering between frontier nodes which share the same `f = g + h`.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The node with the smaller identifier is expanded first.
    #[default]
    Identifier,

    /// Left to the order of the underlying heap. Runs remain repeatable
    /// for identical inputs, but no particular order is promised.
    Unspecified,
}

/// Tunables of a single search.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    pub relaxation: Relaxation,
    pub tie_break: TieBreak,
}

impl PlannerConfig {
    pub fn relaxation(self, relaxation: Relaxation) -> Self {
        Self { relaxation, ..self }
    }

    pub fn tie_break(self, tie_break: TieBreak) -> Self {
        Self { tie_break, ..self }
    }

    /// Reads the configuration through `lookup`, falling back to the
    /// default for any variable which is not set.
    ///
    /// ```rust
    /// use route_planner::planner::{PlannerConfig, Relaxation};
    ///
    /// let config = PlannerConfig::from_vars(|key| match key {
    ///     "ROUTE_PLANNER_RELAXATION" => Some("reopen".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.relaxation, Relaxation::Reopen);
    /// ```
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            relaxation: parse_var(&lookup, RELAXATION_VAR)?.unwrap_or(defaults.relaxation),
            tie_break: parse_var(&lookup, TIE_BREAK_VAR)?.unwrap_or(defaults.tie_break),
        })
    }

    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }
}

fn parse_var<F, T>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .map(|value| {
            T::from_str(value.trim()).map_err(|_| ConfigError::InvalidValue { key, value })
        })
        .transpose()
}
