//! SemanticMatch — a directed, scored edge between two semantic ids.

use serde::{Deserialize, Serialize};

/// Free-form annotations attached to a match.
pub type MetaInformation = serde_json::Map<String, serde_json::Value>;

/// A weighted match: `base_semantic_id ---score---> match_semantic_id`.
///
/// `PartialEq` compares every field, annotations included. The table itself
/// identifies edges by [`EdgeKey`], which leaves `meta_information` out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticMatch {
    pub base_semantic_id: String,
    pub match_semantic_id: String,
    /// Confidence, conventionally in (0, 1]. Not enforced.
    pub score: f64,
    pub meta_information: MetaInformation,
}

/// Identity of an edge inside the table: `(base, target, score bits)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey<'a> {
    pub base: &'a str,
    pub target: &'a str,
    score_bits: u64,
}

impl<'a> EdgeKey<'a> {
    pub fn score(&self) -> f64 {
        f64::from_bits(self.score_bits)
    }
}

impl SemanticMatch {
    pub fn new(
        base_semantic_id: impl Into<String>,
        match_semantic_id: impl Into<String>,
        score: f64,
    ) -> Self {
        Self {
            base_semantic_id: base_semantic_id.into(),
            match_semantic_id: match_semantic_id.into(),
            score,
            meta_information: MetaInformation::new(),
        }
    }

    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.meta_information.insert(key.into(), value.into());
        self
    }

    pub fn edge_key(&self) -> EdgeKey<'_> {
        EdgeKey {
            base: &self.base_semantic_id,
            target: &self.match_semantic_id,
            // -0.0 and 0.0 are the same confidence
            score_bits: if self.score == 0.0 { 0 } else { self.score.to_bits() },
        }
    }

    /// True when both matches describe the same edge, whatever their annotations.
    pub fn same_edge(&self, other: &SemanticMatch) -> bool {
        self.edge_key() == other.edge_key()
    }

    pub fn meta(&self, key: &str) -> Option<&serde_json::Value> {
        self.meta_information.get(key)
    }

    /// `relative_score` annotation, if a traversal attached one.
    pub fn relative_score(&self) -> Option<f64> {
        self.meta(super::RELATIVE_SCORE_KEY).and_then(serde_json::Value::as_f64)
    }
}

impl std::fmt::Display for SemanticMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -[{}]-> {}", self.base_semantic_id, self.score, self.match_semantic_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_key_ignores_meta() {
        let a = SemanticMatch::new("A", "B", 0.5);
        let b = SemanticMatch::new("A", "B", 0.5).with_meta("source", "manual");
        assert!(a.same_edge(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_edge_key_distinguishes_score_and_target() {
        let a = SemanticMatch::new("A", "B", 0.5);
        assert!(!a.same_edge(&SemanticMatch::new("A", "B", 0.6)));
        assert!(!a.same_edge(&SemanticMatch::new("A", "C", 0.5)));
        assert!(!a.same_edge(&SemanticMatch::new("X", "B", 0.5)));
    }

    #[test]
    fn test_signed_zero_is_one_edge() {
        let a = SemanticMatch::new("A", "B", 0.0);
        let b = SemanticMatch::new("A", "B", -0.0);
        assert!(a.same_edge(&b));
        assert_eq!(a.edge_key().score(), 0.0);
    }

    #[test]
    fn test_json_field_names() {
        let m = SemanticMatch::new("A", "B", 0.25).with_meta("k", 1);
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["base_semantic_id"], "A");
        assert_eq!(json["match_semantic_id"], "B");
        assert_eq!(json["score"], 0.25);
        assert_eq!(json["meta_information"]["k"], 1);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let raw = r#"{"base_semantic_id": "A", "match_semantic_id": "B", "score": 0.5}"#;
        assert!(serde_json::from_str::<SemanticMatch>(raw).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(SemanticMatch::new("A", "B", 0.5).to_string(), "A -[0.5]-> B");
    }
}
