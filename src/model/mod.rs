//! # Semantic Match Model
//!
//! Plain DTOs shared by the table, the traversal and the request envelope.
//!
//! Design rule: this module is pure data. No I/O, no locking, no table state.

pub mod semantic_match;
pub mod local_match;
pub mod request;

pub use semantic_match::{SemanticMatch, MetaInformation, EdgeKey};
pub use local_match::LocalMatch;
pub use request::{MatchRequest, MatchResponse};

/// Annotation key carrying the cumulative path confidence of a result.
pub const RELATIVE_SCORE_KEY: &str = "relative_score";
/// Annotation key naming the node visited before a result's base node.
pub const PREVIOUS_MATCH_KEY: &str = "previous_match";
/// Annotation key carrying the full root-to-target path of a result.
pub const PATH_KEY: &str = "path";
