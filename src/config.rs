//! Traversal configuration.

use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// Default upper bound on the number of hops a lookup may descend.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// What a lookup does when a match leads back to a node already on the
/// current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// Report the match, do not expand its target again.
    #[default]
    Cut,
    /// Keep walking around the cycle until the cumulative score falls to the
    /// threshold. Only `max_depth` bounds cycles scoring 1.0.
    Unroll,
}

/// Knobs for `EquivalenceTable::get_local_matches`.
///
/// Loaded from JSON with every field optional:
///
/// ```text
/// { "max_depth": 16, "cycle_policy": "unroll" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalConfig {
    /// Deepest hop a surviving match may sit at. A lookup that still has
    /// matches above the threshold beyond this depth fails with
    /// `Error::TraversalLimitExceeded`.
    pub max_depth: usize,
    pub cycle_policy: CyclePolicy,
}

impl Default for TraversalConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            cycle_policy: CyclePolicy::default(),
        }
    }
}

impl TraversalConfig {
    pub fn with_max_depth(max_depth: usize) -> Result<Self> {
        let config = Self { max_depth, ..Self::default() };
        config.validate()?;
        Ok(config)
    }

    pub fn with_cycle_policy(mut self, cycle_policy: CyclePolicy) -> Self {
        self.cycle_policy = cycle_policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(Error::InvalidConfig("max_depth must be at least 1".into()));
        }
        Ok(())
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).map_err(Error::Deserialization)?;
        config.validate()?;
        Ok(config)
    }
}
