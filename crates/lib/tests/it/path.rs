//! Pattern splitting, resolution and the mutation engine

use pathdoc::node::Node;
use pathdoc::path::{
    Mode, PathError, Pattern,
    mutate::{self, DEFAULT_MAX_INDEX},
    resolve,
};

use crate::helpers::node;

fn set(root: &mut Node, path: &str, value: impl Into<Node>) -> Result<(), PathError> {
    let pattern = Pattern::parse(path, b'.').expect("non-empty path");
    mutate::set(root, &pattern, value.into(), DEFAULT_MAX_INDEX)
}

#[test]
fn test_pattern_segments() {
    let pattern = Pattern::parse("list.10.name", b'.').unwrap();
    let segments = pattern.segments();

    assert_eq!(pattern.len(), 3);
    assert_eq!(segments[1].index(), Some(10));
    assert!(!segments[2].is_numeric());
    assert_eq!(pattern.display(), "list.10.name");
}

#[test]
fn test_resolve_modes_agree_without_dotted_keys() {
    let root = node(r#"{"m": {"a": [1, 2, 3]}, "n": 5}"#);
    for path in ["m", "m.a", "m.a.2", "m.a.3", "n", "n.x", "m.b", "."] {
        assert_eq!(
            resolve::resolve(&root, path, b'.', Mode::Strict),
            resolve::resolve(&root, path, b'.', Mode::ViolenceCheck),
            "path {path}"
        );
    }
}

#[test]
fn test_violence_check_finds_dotted_leaf() {
    let root = node(r#"{"m": {"a": [1, 2, 3], "v1.v2": "4"}}"#);

    assert_eq!(
        resolve::resolve(&root, "m.a.2", b'.', Mode::Strict),
        Some(&Node::from(3))
    );
    assert!(resolve::resolve(&root, "m.v1.v2", b'.', Mode::Strict).is_none());
    assert_eq!(
        resolve::resolve(&root, "m.v1.v2", b'.', Mode::ViolenceCheck),
        Some(&Node::from("4"))
    );
}

#[test]
fn test_violence_check_longest_key_wins() {
    let root = node(r#"{"a": {"b.c": 1}, "a.b": {"c": 2}, "a.b.c": 3}"#);

    assert_eq!(
        resolve::route(&root, "a.b.c", b'.', Mode::ViolenceCheck),
        Some(vec!["a.b.c"])
    );

    let root = node(r#"{"a": {"b.c": 1}, "a.b": {"c": 2}}"#);
    assert_eq!(
        resolve::route(&root, "a.b.c", b'.', Mode::ViolenceCheck),
        Some(vec!["a.b", "c"])
    );
}

#[test]
fn test_set_builds_nested_path() {
    let mut root = Node::null();
    set(&mut root, "users.list.1.score", 100).unwrap();

    assert_eq!(
        resolve::resolve(&root, "users.list.1.score", b'.', Mode::Strict),
        Some(&Node::from(100))
    );
    assert!(
        resolve::resolve(&root, "users.list.0", b'.', Mode::Strict)
            .is_some_and(Node::is_null)
    );
}

#[test]
fn test_set_overwrites_in_bounds_index() {
    let mut root = node("[1, 2, 3]");
    set(&mut root, "1", "two").unwrap();
    assert_eq!(root, node(r#"[1, "two", 3]"#));
}

#[test]
fn test_set_quoted_key_on_sequence_becomes_mapping() {
    // A quoted segment is not numeric, so the sequence is replaced
    let mut root = node("[1, 2, 3]");
    set(&mut root, "\"0\".1", 11).unwrap();
    assert_eq!(root, node(r#"{"\"0\"": [null, 11]}"#));
}

#[test]
fn test_set_huge_index_fails_cleanly() {
    let mut root = node("[1, 2, 3]");
    let err = set(&mut root, "11111111111111111111111", 11).unwrap_err();

    assert!(matches!(err, PathError::IndexOverflow { .. }));
    assert_eq!(root, node("[1, 2, 3]"));
}

#[test]
fn test_plan_reports_without_mutating() {
    let root = node(r#"{"a": [1]}"#);
    let ok = Pattern::parse("a.3.b", b'.').unwrap();
    let too_far = Pattern::parse("a.9", b'.').unwrap();

    assert!(mutate::plan(&root, ok.segments(), 4).is_ok());
    assert!(mutate::plan(&root, too_far.segments(), 4).is_err());
    assert_eq!(root, node(r#"{"a": [1]}"#));
}

#[test]
fn test_delete_scenarios() {
    let cases = [
        ("1", "[1, 3]"),
        ("3", "[1, 2, 3]"),
        ("0.3", "[1, 2, 3]"),
        ("0.a", "[1, 2, 3]"),
    ];
    for (path, expected) in cases {
        let mut root = node("[1, 2, 3]");
        let pattern = Pattern::parse(path, b'.').unwrap();
        mutate::delete(&mut root, &pattern).unwrap();
        assert_eq!(root, node(expected), "path {path}");
    }
}

#[test]
fn test_delete_nested_mapping_key() {
    let mut root = node(r#"{"a": {"b": 1, "c": 2}}"#);
    let pattern = Pattern::parse("a.b", b'.').unwrap();
    mutate::delete(&mut root, &pattern).unwrap();
    assert_eq!(root, node(r#"{"a": {"c": 2}}"#));
}

#[test]
fn test_append_to_nested_sequence() {
    let mut root = node(r#"{"a": {"list": [1]}}"#);
    mutate::append(&mut root, "a.list", Node::from(2), b'.', Mode::Strict, DEFAULT_MAX_INDEX)
        .unwrap();
    assert_eq!(root, node(r#"{"a": {"list": [1, 2]}}"#));
}

#[test]
fn test_append_through_scalar_replaces_it() {
    // The target is absent, so append writes like set and retypes "a"
    let mut root = node(r#"{"a": 1}"#);
    mutate::append(&mut root, "a.b", Node::from(2), b'.', Mode::Strict, DEFAULT_MAX_INDEX)
        .unwrap();
    assert_eq!(root, node(r#"{"a": {"b": [2]}}"#));
}
