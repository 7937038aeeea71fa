//! Property-based tests for the read/write laws

use pathdoc::{Document, Node, Options};
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,3}",
        (0usize..4).prop_map(|i| i.to_string()),
    ]
}

fn path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..5).prop_map(|segments| segments.join("."))
}

fn scalar() -> impl Strategy<Value = Node> {
    prop_oneof![
        Just(Node::null()),
        any::<bool>().prop_map(Node::from),
        any::<i64>().prop_map(Node::from),
        "[a-z ]{0,8}".prop_map(Node::from),
    ]
}

/// A document built by a few random writes.
fn document() -> impl Strategy<Value = Document> {
    prop::collection::vec((path(), scalar()), 0..6).prop_map(|writes| {
        let mut doc = Document::new();
        for (path, value) in writes {
            doc.set(&path, value).expect("small indices never overflow");
        }
        doc
    })
}

proptest! {
    #[test]
    fn set_then_get_returns_value(mut doc in document(), path in path(), value in scalar()) {
        doc.set(&path, value.clone()).unwrap();
        prop_assert_eq!(doc.get(&path), Some(&value));
        prop_assert!(doc.contains(&path));
    }

    #[test]
    fn remove_is_idempotent(doc in document(), path in path()) {
        let mut once = doc.clone();
        once.remove(&path).unwrap();

        let mut twice = once.clone();
        twice.remove(&path).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn remove_compacts_sequences(items in prop::collection::vec(any::<i64>(), 1..10), pick in any::<prop::sample::Index>()) {
        let index = pick.index(items.len());
        let mut doc = Document::new();
        doc.set("list", items.clone()).unwrap();

        doc.remove(&format!("list.{index}")).unwrap();

        let mut expected = items;
        expected.remove(index);
        prop_assert_eq!(doc.len("list"), Some(expected.len()));
        prop_assert_eq!(doc.get("list"), Some(&Node::from(expected)));
    }

    #[test]
    fn growth_pads_with_null(index in 0usize..64, value in any::<i64>()) {
        let mut doc = Document::new();
        doc.set("a", Node::sequence()).unwrap();
        doc.set(&format!("a.{index}"), value).unwrap();

        prop_assert_eq!(doc.len("a"), Some(index + 1));
        for i in 0..index {
            let padded = doc.get(&format!("a.{i}")).is_some_and(Node::is_null);
            prop_assert!(padded);
        }
        let last = format!("a.{index}");
        prop_assert_eq!(doc.get_as::<i64>(&last), Some(value));
    }

    #[test]
    fn rejected_writes_leave_document_unchanged(doc in document(), prefix in path(), excess in 1usize..1000) {
        let mut doc = doc;
        doc.set_max_index(16);
        let before = doc.clone();

        let target = format!("{prefix}.{}", 16 + excess);
        let result = doc.set(&target, true);

        if result.is_err() {
            prop_assert_eq!(doc, before);
        } else {
            // the prefix ends in a mapping, which takes the index as a literal key
            prop_assert!(doc.contains(&target));
        }
    }

    #[test]
    fn violence_check_agrees_on_plain_keys(doc in document(), path in path()) {
        let mut violent = doc.clone();
        violent.set_violence_check(true);
        prop_assert_eq!(doc.get(&path), violent.get(&path));
    }

    #[test]
    fn json_export_reloads_equal(doc in document()) {
        let text = doc.to_json_string().unwrap();
        let reloaded = Document::from_json_with(&text, *doc.options()).unwrap();
        prop_assert_eq!(reloaded.root(), doc.root());
    }
}

#[test]
fn append_twice_builds_sequence() {
    let mut doc = Document::with_options(Options::default());
    doc.append(".", "x").unwrap();
    doc.append(".", "y").unwrap();
    assert_eq!(doc.root(), &Node::from(vec!["x", "y"]));
}
