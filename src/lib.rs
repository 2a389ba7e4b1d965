//! # semantic-matcher — Equivalence Table of Semantic Matches
//!
//! Keeps weighted, directed matches between semantic ids and answers
//! transitive lookups under a decaying confidence threshold.
//!
//! ## Design Principles
//!
//! 1. **Edges are identified by `(base, target, score)`**: annotations never
//!    take part in duplicate suppression or removal
//! 2. **Lookups are pure**: traversal returns fresh copies, stored matches
//!    are never annotated in place
//! 3. **Bounded traversal**: a path-local visited set cuts cycles, and a
//!    configurable depth bound turns runaway searches into an error
//! 4. **Whole-table persistence**: one pretty-printed JSON document, no
//!    partial writes
//!
//! ## Quick Start
//!
//! ```rust
//! use semantic_matcher::{EquivalenceTable, SemanticMatch};
//!
//! # fn example() -> semantic_matcher::Result<()> {
//! let mut table = EquivalenceTable::new();
//! table.add_semantic_match(SemanticMatch::new("A", "B", 0.9));
//! table.add_semantic_match(SemanticMatch::new("B", "C", 0.8));
//!
//! let found = table.get_local_matches("A", 0.5)?;
//! assert_eq!(found.len(), 2);
//! assert!((found[1].relative_score().unwrap() - 0.72).abs() < 1e-9);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Concurrency
//!
//! | Type | Use |
//! |------|-----|
//! | `EquivalenceTable` | Owned, single-threaded; `&mut self` for writes |
//! | `SharedEquivalenceTable` | `Arc<RwLock<_>>` handle for services |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod config;
pub mod table;
pub mod persist;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{
    SemanticMatch, MetaInformation, EdgeKey, LocalMatch,
    MatchRequest, MatchResponse,
    RELATIVE_SCORE_KEY, PREVIOUS_MATCH_KEY, PATH_KEY,
};
pub use config::{TraversalConfig, CyclePolicy};
pub use table::{EquivalenceTable, MatchMap, SharedEquivalenceTable};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Semantic id not found: {0}")]
    SemanticIdNotFound(String),

    #[error("Match not found: {base} -[{score}]-> {target}")]
    MatchNotFound { base: String, target: String, score: f64 },

    #[error("Traversal from '{semantic_id}' exceeded the depth limit of {max_depth}")]
    TraversalLimitExceeded { semantic_id: String, max_depth: usize },

    #[error("Invalid table: {0}")]
    InvalidTable(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Deserialization error: {0}")]
    Deserialization(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
