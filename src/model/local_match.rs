//! LocalMatch — one result of a transitive lookup.

use serde::{Deserialize, Serialize};
use super::{SemanticMatch, RELATIVE_SCORE_KEY, PREVIOUS_MATCH_KEY, PATH_KEY};

/// A match reached from a query root, with its path-relative confidence.
///
/// `semantic_match` is a copy of the stored edge; the table is never touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalMatch {
    pub semantic_match: SemanticMatch,
    /// Product of edge scores from the root through this match.
    pub relative_score: f64,
    /// Node ids from the root through `semantic_match.match_semantic_id`.
    /// Always holds at least two entries.
    pub path: Vec<String>,
}

impl LocalMatch {
    /// Number of hops from the query root.
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn target(&self) -> &str {
        &self.semantic_match.match_semantic_id
    }

    /// The node visited before this match's base node, if any.
    pub fn previous_match(&self) -> Option<&str> {
        if self.path.len() < 3 {
            return None;
        }
        self.path.get(self.path.len() - 3).map(String::as_str)
    }

    /// Project onto the stored edge, carrying the traversal annotations
    /// in `meta_information`.
    pub fn into_annotated(self) -> SemanticMatch {
        let previous = self.previous_match().map(str::to_owned);
        let mut m = self.semantic_match;
        m.meta_information.insert(RELATIVE_SCORE_KEY.into(), self.relative_score.into());
        match previous {
            Some(prev) => m.meta_information.insert(PREVIOUS_MATCH_KEY.into(), prev.into()),
            None => m.meta_information.remove(PREVIOUS_MATCH_KEY),
        };
        m.meta_information.insert(PATH_KEY.into(), self.path.into());
        m
    }
}
