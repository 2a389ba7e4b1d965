//! # Equivalence Table
//!
//! Adjacency store of semantic matches: `base_semantic_id → [matches]`.
//!
//! ## Invariants
//!
//! - Every match stored under key `k` has `base_semantic_id == k`.
//! - No list holds two matches with the same [`EdgeKey`].
//! - No key maps to an empty list. Removing the last match drops the key.
//!
//! The lookup algorithm lives in [`traversal`]; the lock-protected handle for
//! services lives in [`shared`].

pub mod traversal;
pub mod shared;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TraversalConfig;
use crate::model::*;
use crate::{Error, Result};

pub use shared::SharedEquivalenceTable;

/// `semantic_id → outgoing matches`, in insertion order per list.
pub type MatchMap = hashbrown::HashMap<String, Vec<SemanticMatch>>;

// ============================================================================
// EquivalenceTable
// ============================================================================

/// In-memory table of weighted semantic matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquivalenceTable {
    pub(crate) matches: MatchMap,
    #[serde(skip)]
    pub(crate) config: TraversalConfig,
}

/// Tables are equal when they hold the same matches. The traversal config
/// is not part of the data.
impl PartialEq for EquivalenceTable {
    fn eq(&self, other: &Self) -> bool {
        self.matches == other.matches
    }
}

impl EquivalenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TraversalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { matches: MatchMap::new(), config })
    }

    pub fn config(&self) -> &TraversalConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: TraversalConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Insert a match under its base id. Returns `false` without touching the
    /// table when the same edge is already stored.
    pub fn add_semantic_match(&mut self, semantic_match: SemanticMatch) -> bool {
        let list = self.matches
            .entry(semantic_match.base_semantic_id.clone())
            .or_default();
        if list.iter().any(|m| m.same_edge(&semantic_match)) {
            debug!(edge = %semantic_match, "duplicate semantic match skipped");
            return false;
        }
        debug!(edge = %semantic_match, "semantic match added");
        list.push(semantic_match);
        true
    }

    /// Remove the stored match with the same edge as `semantic_match` and
    /// return it.
    pub fn remove_semantic_match(&mut self, semantic_match: &SemanticMatch) -> Result<SemanticMatch> {
        let base = &semantic_match.base_semantic_id;
        let list = self.matches
            .get_mut(base)
            .ok_or_else(|| Error::SemanticIdNotFound(base.clone()))?;

        let pos = list.iter()
            .position(|m| m.same_edge(semantic_match))
            .ok_or_else(|| Error::MatchNotFound {
                base: base.clone(),
                target: semantic_match.match_semantic_id.clone(),
                score: semantic_match.score,
            })?;

        let removed = list.remove(pos);
        if list.is_empty() {
            self.matches.remove(base);
        }
        debug!(edge = %removed, "semantic match removed");
        Ok(removed)
    }

    pub fn remove_all_semantic_matches(&mut self) {
        debug!(semantic_ids = self.matches.len(), "equivalence table cleared");
        self.matches.clear();
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// The keyed structure itself, `semantic_id → matches`.
    pub fn get_all_matches(&self) -> &MatchMap {
        &self.matches
    }

    /// Every stored match, grouped by base id.
    pub fn iter_matches(&self) -> impl Iterator<Item = &SemanticMatch> {
        self.matches.values().flatten()
    }

    /// Direct outgoing matches of `semantic_id`, in insertion order.
    pub fn matches_for(&self, semantic_id: &str) -> &[SemanticMatch] {
        self.matches.get(semantic_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, semantic_match: &SemanticMatch) -> bool {
        self.matches_for(&semantic_match.base_semantic_id)
            .iter()
            .any(|m| m.same_edge(semantic_match))
    }

    /// Number of stored matches.
    pub fn len(&self) -> usize {
        self.matches.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of semantic ids with at least one outgoing match.
    pub fn semantic_id_count(&self) -> usize {
        self.matches.len()
    }

    // ========================================================================
    // Request envelope
    // ========================================================================

    /// Answer the local part of a lookup request.
    pub fn answer(&self, request: &MatchRequest, score_limit: f64) -> Result<MatchResponse> {
        debug!(
            semantic_id = %request.semantic_id,
            local_only = request.local_only,
            score_limit,
            "answering match request"
        );
        self.get_local_matches(&request.semantic_id, score_limit).map(MatchResponse::from)
    }

    /// Check the storage invariants. Used after loading foreign documents.
    pub(crate) fn check_invariants(&self) -> Result<()> {
        for (key, list) in &self.matches {
            if list.is_empty() {
                return Err(Error::InvalidTable(format!("semantic id '{key}' has an empty match list")));
            }
            for (i, m) in list.iter().enumerate() {
                if &m.base_semantic_id != key {
                    return Err(Error::InvalidTable(format!(
                        "match {m} is stored under '{key}'"
                    )));
                }
                if list[..i].iter().any(|prev| prev.same_edge(m)) {
                    return Err(Error::InvalidTable(format!("duplicate match {m}")));
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
