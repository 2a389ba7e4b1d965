//! Lookup request / response envelope.
//!
//! The table answers the local part of a request. `local_only`, `name` and
//! `definition` are carried for whoever forwards the request to other tables
//! or runs name/definition based matching.

use serde::{Deserialize, Serialize};
use super::SemanticMatch;

/// A request for the matches of one semantic id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub semantic_id: String,
    /// Only consult the local table, do not ask other services.
    #[serde(default = "default_local_only")]
    pub local_only: bool,
    /// Resolved name of the semantic id, for NLP matching.
    #[serde(default)]
    pub name: Option<String>,
    /// Resolved definition of the semantic id, for NLP matching.
    #[serde(default)]
    pub definition: Option<String>,
}

fn default_local_only() -> bool {
    true
}

impl MatchRequest {
    pub fn new(semantic_id: impl Into<String>) -> Self {
        Self {
            semantic_id: semantic_id.into(),
            local_only: true,
            name: None,
            definition: None,
        }
    }

    pub fn with_local_only(mut self, local_only: bool) -> Self {
        self.local_only = local_only;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = Some(definition.into());
        self
    }
}

/// Ordered matches, as produced by `EquivalenceTable::get_local_matches`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<SemanticMatch>,
}

impl From<Vec<SemanticMatch>> for MatchResponse {
    fn from(matches: Vec<SemanticMatch>) -> Self {
        Self { matches }
    }
}
