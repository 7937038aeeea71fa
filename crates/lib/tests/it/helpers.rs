use pathdoc::{Document, Node, Options};

/// Parses a JSON literal into a document with default options.
pub fn doc(json: &str) -> Document {
    Document::from_json(json).expect("test JSON should parse")
}

/// Parses a JSON literal into a document with violence check enabled.
pub fn violent_doc(json: &str) -> Document {
    Document::from_json_with(json, Options::default().violence_check(true))
        .expect("test JSON should parse")
}

/// Parses a JSON literal into a bare node.
pub fn node(json: &str) -> Node {
    serde_json::from_str(json).expect("test JSON should parse")
}

/// Compact JSON of a document, for whole-tree assertions.
pub fn json_of(doc: &Document) -> String {
    doc.to_json_string().expect("document should encode")
}

/// The standard nested fixture used across tests.
pub fn users_doc() -> Document {
    doc(r#"{
        "users": {
            "count": 2,
            "list": [
                {"name": "john", "score": 100},
                {"name": "smith", "score": 60}
            ]
        },
        "tags": ["a", "b"]
    }"#)
}
