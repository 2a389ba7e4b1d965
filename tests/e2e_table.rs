//! End-to-end tests for table mutation and introspection.

use pretty_assertions::assert_eq;
use semantic_matcher::{EquivalenceTable, Error, SemanticMatch, SharedEquivalenceTable};

fn seed() -> EquivalenceTable {
    let mut table = EquivalenceTable::new();
    table.add_semantic_match(SemanticMatch::new("A", "B", 0.9));
    table.add_semantic_match(SemanticMatch::new("A", "C", 0.7));
    table.add_semantic_match(SemanticMatch::new("B", "C", 0.8));
    table
}

#[test]
fn test_keyed_structure() {
    let table = seed();
    let all = table.get_all_matches();
    assert_eq!(all.len(), 2);
    assert_eq!(all["A"].len(), 2);
    assert_eq!(all["B"], vec![SemanticMatch::new("B", "C", 0.8)]);
    for (key, list) in all {
        assert!(list.iter().all(|m| &m.base_semantic_id == key));
    }
}

#[test]
fn test_counts() {
    let table = seed();
    assert_eq!(table.len(), 3);
    assert_eq!(table.semantic_id_count(), 2);
    assert_eq!(table.iter_matches().count(), 3);
    assert!(table.matches_for("C").is_empty());
}

#[test]
fn test_add_twice_equals_add_once() {
    let mut twice = seed();
    assert!(!twice.add_semantic_match(SemanticMatch::new("A", "B", 0.9)));
    assert_eq!(twice, seed());
}

#[test]
fn test_remove_then_readd() {
    let mut table = seed();
    let m = SemanticMatch::new("B", "C", 0.8);
    table.remove_semantic_match(&m).unwrap();
    assert!(!table.get_all_matches().contains_key("B"));
    assert!(table.add_semantic_match(m));
    assert_eq!(table, seed());
}

#[test]
fn test_remove_twice_fails_second_time() {
    let mut table = seed();
    let m = SemanticMatch::new("A", "C", 0.7);
    table.remove_semantic_match(&m).unwrap();
    let err = table.remove_semantic_match(&m).unwrap_err();
    match err {
        Error::MatchNotFound { base, target, score } => {
            assert_eq!(base, "A");
            assert_eq!(target, "C");
            assert_eq!(score, 0.7);
        }
        other => panic!("expected MatchNotFound, got {other:?}"),
    }
    assert_eq!(table.len(), 2);
}

#[test]
fn test_error_messages() {
    let mut table = EquivalenceTable::new();
    let err = table.remove_semantic_match(&SemanticMatch::new("X", "Y", 0.5)).unwrap_err();
    assert_eq!(err.to_string(), "Semantic id not found: X");
}

#[test]
fn test_clear() {
    let mut table = seed();
    table.remove_all_semantic_matches();
    assert!(table.is_empty());
    assert_eq!(table, EquivalenceTable::new());
}

#[test]
fn test_shared_handle_sees_writes() {
    let shared = SharedEquivalenceTable::new(seed());
    let other = shared.clone();
    other.add_semantic_match(SemanticMatch::new("C", "D", 0.9));
    assert_eq!(shared.len(), 4);
    let found = shared.get_local_matches("B", 0.5).unwrap();
    let targets: Vec<&str> = found.iter().map(|m| m.match_semantic_id.as_str()).collect();
    assert_eq!(targets, vec!["C", "D"]);
}
