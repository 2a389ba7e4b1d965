//! Confidence-decaying transitive lookup.
//!
//! Starting at a root id, every outgoing match whose score beats the current
//! limit is reported and then expanded with the limit divided by its score.
//! The limit at hop `n + 1` is therefore `score_limit / (s1 * .. * sn)`, and a
//! path survives exactly while the product of its scores stays above
//! `score_limit`.
//!
//! Output is depth-first pre-order: a match, then everything found beneath
//! it, then its next sibling, each list walked in insertion order. A node
//! reached by several routes is reported once per route.
//!
//! The walk uses an explicit stack and never writes to the table.

use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::config::CyclePolicy;
use crate::model::*;
use crate::{Error, Result};
use super::EquivalenceTable;

/// One level of the walk: a node and the matches still to visit from it.
struct Frame<'t> {
    node: &'t str,
    edges: std::slice::Iter<'t, SemanticMatch>,
    /// Threshold a match out of `node` has to beat.
    limit: f64,
    /// Product of scores from the root to `node`.
    relative_score: f64,
}

impl EquivalenceTable {
    /// Matches reachable from `semantic_id` whose cumulative score stays
    /// above `score_limit`.
    ///
    /// Each returned match is a copy of the stored one, annotated with
    /// `relative_score`, `path` and, from the second hop on,
    /// `previous_match`.
    pub fn get_local_matches(&self, semantic_id: &str, score_limit: f64) -> Result<Vec<SemanticMatch>> {
        Ok(self.traverse(semantic_id, score_limit)?
            .into_iter()
            .map(LocalMatch::into_annotated)
            .collect())
    }

    /// Same walk as [`get_local_matches`](Self::get_local_matches), returning
    /// the result records with their paths.
    pub fn traverse(&self, semantic_id: &str, score_limit: f64) -> Result<Vec<LocalMatch>> {
        let Some(root_edges) = self.matches.get(semantic_id) else {
            return Ok(Vec::new());
        };

        let max_depth = self.config.max_depth;
        let cut_cycles = self.config.cycle_policy == CyclePolicy::Cut;

        let mut results = Vec::new();
        let mut stack: SmallVec<[Frame<'_>; 8]> = SmallVec::new();
        stack.push(Frame {
            node: semantic_id,
            edges: root_edges.iter(),
            limit: score_limit,
            relative_score: 1.0,
        });

        while let Some(frame) = stack.last_mut() {
            let Some(edge) = frame.edges.next() else {
                stack.pop();
                continue;
            };
            let (limit, base_score) = (frame.limit, frame.relative_score);

            // NaN scores never pass
            let passes = edge.score > limit;
            if !passes {
                continue;
            }

            let depth = stack.len();
            if depth > max_depth {
                warn!(semantic_id, max_depth, "lookup exceeded depth limit");
                return Err(Error::TraversalLimitExceeded {
                    semantic_id: semantic_id.to_owned(),
                    max_depth,
                });
            }

            let path: Vec<String> = stack.iter()
                .map(|f| f.node.to_owned())
                .chain(std::iter::once(edge.match_semantic_id.clone()))
                .collect();
            let relative_score = base_score * edge.score;
            results.push(LocalMatch {
                semantic_match: edge.clone(),
                relative_score,
                path,
            });

            let next_id = edge.match_semantic_id.as_str();
            if cut_cycles && stack.iter().any(|f| f.node == next_id) {
                trace!(next_id, depth, "cycle cut");
                continue;
            }
            if let Some(next_edges) = self.matches.get(next_id) {
                trace!(next_id, depth, relative_score, "expanding");
                stack.push(Frame {
                    node: next_id,
                    edges: next_edges.iter(),
                    limit: limit / edge.score,
                    relative_score,
                });
            }
        }

        debug!(semantic_id, score_limit, found = results.len(), "local lookup finished");
        Ok(results)
    }
}

// ============================================================================
// Tests
// ============================================================================
