//! Document API

use pathdoc::{Document, Error, Node, Options, path::PathError};
use serde::{Deserialize, Serialize};

use crate::helpers::{doc, json_of, users_doc, violent_doc};

#[test]
fn test_scenario_nested_write() {
    let mut d = Document::new();
    d.set("users.list.1.score", 100).unwrap();

    assert_eq!(d.get_as::<i64>("users.list.1.score"), Some(100));
    assert!(d.get("users.list.0").is_some_and(Node::is_null));
    assert_eq!(d.len("users.list"), Some(2));
}

#[test]
fn test_get_from_loaded_json() {
    let d = doc(r#"{"n": 123456789, "m": {"k": "v"}, "a": [1, 2, 3]}"#);

    assert_eq!(d.get_as::<i64>("n"), Some(123456789));
    assert_eq!(d.get_as::<&str>("m.k"), Some("v"));
    assert_eq!(d.get("a.1"), Some(&Node::from(2)));
    assert!(d.get("a.3").is_none());
    assert!(d.get("k3").is_none());
    assert_eq!(d.get("."), Some(d.root()));
}

#[test]
fn test_get_or_default() {
    let d = Document::new();
    assert_eq!(d.get_or("no", 100), Node::from(100));

    let d = users_doc();
    assert_eq!(d.get_or("users.count", 0), Node::from(2));
}

#[test]
fn test_get_as_wrong_type_is_none() {
    let d = users_doc();
    assert_eq!(d.get_as::<i64>("users.list.0.name"), None);
    assert_eq!(d.get_as::<String>("users.list.0.name"), Some("john".to_string()));
}

#[test]
fn test_custom_separator() {
    let mut d = doc(r#"{"n": 1, "m": {"k": "v"}, "a": [1, 2, 3]}"#);
    d.set_separator(b'#');

    assert_eq!(d.separator(), b'#');
    assert_eq!(d.get_as::<&str>("m#k"), Some("v"));
    assert_eq!(d.get("a#1"), Some(&Node::from(2)));
    assert!(d.get("m.k").is_none());
    assert_eq!(d.get("#"), Some(d.root()));
    assert!(d.get(".").is_none());
}

#[test]
fn test_separator_change_does_not_rewrite_data() {
    let mut d = Document::new();
    d.set("a.b", 1).unwrap();
    d.set_separator(b'/');
    d.set("a.b", 2).unwrap();

    assert_eq!(json_of(&d), r#"{"a":{"b":1},"a.b":2}"#);
}

#[test]
fn test_violence_check_toggle() {
    let mut d = doc(r#"{"a.b": 1, "a": {"b": 2}}"#);
    assert_eq!(d.get_as::<i64>("a.b"), Some(2));

    d.set_violence_check(true);
    assert!(d.violence_check());
    assert_eq!(d.get_as::<i64>("a.b"), Some(1));

    d.set_violence_check(false);
    assert_eq!(d.get_as::<i64>("a.b"), Some(2));
}

#[test]
fn test_violence_check_on_whole_document() {
    let d = violent_doc(r#"{"name": "gf", "time": "2019-06-12"}"#);
    assert!(d.get("").is_none());
    assert_eq!(d.get("."), Some(d.root()));
    assert_eq!(d.get_as::<&str>("name"), Some("gf"));
}

#[test]
fn test_contains_and_len() {
    let d = users_doc();
    assert!(d.contains("users.list.1.name"));
    assert!(!d.contains("users.list.2"));
    assert_eq!(d.len("users"), Some(2));
    assert_eq!(d.len("tags"), Some(2));
    assert_eq!(d.len("users.count"), None);
    assert_eq!(d.len("missing"), None);
}

#[test]
fn test_remove() {
    let mut d = users_doc();
    d.remove("users.list.0").unwrap();
    assert_eq!(d.get_as::<&str>("users.list.0.name"), Some("smith"));
    assert_eq!(d.len("users.list"), Some(1));

    d.remove("users.count").unwrap();
    assert!(!d.contains("users.count"));

    // removing again is a no-op
    d.remove("users.count").unwrap();
    d.remove("never.there").unwrap();
    assert_eq!(d.len("users"), Some(1));
}

#[test]
fn test_remove_with_oversized_index() {
    let mut d = doc(r#"{"a": [1, 2]}"#);
    let before = d.clone();

    let err = d.remove("a.99999999999999999999999").unwrap_err();
    assert!(err.is_index_overflow());
    assert_eq!(d, before);

    // a mapping takes the digits as a key that is not there
    d.remove("99999999999999999999999").unwrap();
    assert_eq!(d, before);
}

#[test]
fn test_remove_whole_document() {
    let mut d = users_doc();
    d.remove(".").unwrap();
    assert!(d.is_null());
    assert!(!d.contains("users"));
}

#[test]
fn test_set_whole_document() {
    let mut d = users_doc();
    d.set(".", vec![1, 2]).unwrap();
    assert_eq!(json_of(&d), "[1,2]");
}

#[test]
fn test_append_scenarios() {
    let mut d = Document::new();
    d.append("a", 1).unwrap();
    d.append("a", 2).unwrap();
    assert_eq!(json_of(&d), r#"{"a":[1,2]}"#);

    let mut d = Document::new();
    d.append(".", 1).unwrap();
    d.append(".", 2).unwrap();
    assert_eq!(json_of(&d), "[1,2]");

    let mut d = Document::new();
    d.set("a", 1).unwrap();
    let err = d.append("a", 2).unwrap_err();
    assert!(matches!(
        err,
        Error::Path(PathError::NotAppendable { ref found, .. }) if found == "int"
    ));
    assert_eq!(d.get_as::<i64>("a"), Some(1));
}

#[test]
fn test_append_under_dotted_key_splits_on_create() {
    let mut d = violent_doc(r#"{"a.b": {}}"#);
    d.append("a.b.list", 1).unwrap();
    d.append("a.b.list", 2).unwrap();

    // the lookup commits to "a.b", the write splits every separator
    assert_eq!(json_of(&d), r#"{"a.b":{},"a":{"b":{"list":[2]}}}"#);
}

#[test]
fn test_destructive_coercion() {
    let mut d = Document::new();
    d.set("f", "s").unwrap();
    d.set("f.a", 1).unwrap();
    assert_eq!(json_of(&d), r#"{"f":{"a":1}}"#);
}

#[test]
fn test_failed_write_leaves_document_unchanged() {
    let mut d = Document::with_options(Options::default().max_index(8));
    d.set("keep", true).unwrap();
    let before = d.clone();

    let err = d.set("list.100", 1).unwrap_err();
    assert!(err.is_index_overflow());
    assert_eq!(err.module(), "path");
    assert_eq!(d, before);

    let err = d.append("keep.9", 1).unwrap_err();
    assert!(err.is_index_overflow());
    assert_eq!(d, before);
}

#[test]
fn test_get_mut_handles() {
    let mut d = users_doc();

    match d.get_mut("users.list") {
        Some(mut handle) => {
            assert!(handle.is_sequence());
            handle.as_sequence().unwrap().truncate(1);
        }
        None => panic!("users.list should exist"),
    }
    assert_eq!(d.len("users.list"), Some(1));

    let handle = d.get_mut("users.count").unwrap();
    assert_eq!(handle.to_node(), Node::from(2));
    drop(handle);
    assert!(d.get_mut("nope").is_none());
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct User {
    name: String,
    score: i64,
}

#[test]
fn test_serde_round_trip_through_paths() {
    let mut d = Document::new();
    d.set_serialized(
        "users.0",
        &User {
            name: "ann".to_string(),
            score: 3,
        },
    )
    .unwrap();

    assert_eq!(d.get_as::<&str>("users.0.name"), Some("ann"));

    let user: User = d.get_deserialized("users.0").unwrap();
    assert_eq!(user.score, 3);

    let users: Vec<User> = d.get_deserialized("users").unwrap();
    assert_eq!(users.len(), 1);

    let missing: Option<User> = d.get_deserialized("users.5").unwrap();
    assert!(missing.is_none());

    let err = d.get_deserialized::<User>("users.0.name").unwrap_err();
    assert_eq!(err.module(), "serialize");
}

#[test]
fn test_deserialize_whole_document() {
    #[derive(Deserialize)]
    struct Names {
        #[serde(rename = "F中文")]
        chinese: i64,
        #[serde(rename = "F英文")]
        english: i64,
    }

    let d = doc(r#"{"F中文": 1, "F英文": 2}"#);
    let names: Names = d.deserialize().unwrap();
    assert_eq!((names.chinese, names.english), (1, 2));
}

#[test]
fn test_from_serialize() {
    let d = Document::from_serialize(&User {
        name: "gf".to_string(),
        score: 1,
    })
    .unwrap();
    assert_eq!(d.get_as::<&str>("name"), Some("gf"));
}

#[test]
fn test_sub_documents() {
    let d = users_doc();

    let users = d.sub_document("users").unwrap();
    assert_eq!(users.get_as::<i64>("count"), Some(2));
    assert!(d.sub_document("nope").is_none());

    let list = d.sub_documents("users.list");
    assert_eq!(list.len(), 2);
    assert_eq!(list[1].get_as::<&str>("name"), Some("smith"));
    assert!(d.sub_documents("users.count").is_empty());

    let map = d.sub_document_map("users");
    assert_eq!(map.keys().collect::<Vec<_>>(), vec!["count", "list"]);
    assert_eq!(map["list"].len("."), Some(2));
}

#[test]
fn test_sub_document_keeps_options() {
    let mut d = doc(r#"{"a": {"x/y": 1}}"#);
    d.set_separator(b'/');
    let sub = d.sub_document("a").unwrap();
    assert_eq!(sub.separator(), b'/');
}

#[test]
fn test_builder_and_export() {
    let d = Document::new()
        .with("name", "gf")
        .unwrap()
        .with("tags.1", "b")
        .unwrap();

    assert_eq!(d.to_string(), r#"{"name":"gf","tags":[null,"b"]}"#);
    assert_eq!(
        d.to_json_pretty().unwrap(),
        "{\n  \"name\": \"gf\",\n  \"tags\": [\n    null,\n    \"b\"\n  ]\n}"
    );
}

#[test]
fn test_scalar_documents_export() {
    assert_eq!(json_of(&Document::from_node("a")), r#""a""#);
    assert_eq!(json_of(&Document::from_node(1)), "1");
    assert!(Document::new().is_null());
}

#[test]
fn test_into_node() {
    let d = doc("[1]");
    let n: Node = d.clone().into();
    assert_eq!(n, d.into_node());
}
