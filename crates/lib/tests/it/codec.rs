//! Content types and the JSON codec

use pathdoc::codec::{CodecError, ContentType, Decoder, Encoder, JsonCodec};
use pathdoc::{Document, Node, Options, Scalar};

/// A decoder for a toy `key=value` line format, standing in for an external
/// format adapter.
struct LinesDecoder;

impl Decoder for LinesDecoder {
    fn content_type(&self) -> ContentType {
        ContentType::Properties
    }

    fn decode(&self, input: &[u8]) -> Result<Node, CodecError> {
        let text = std::str::from_utf8(input).map_err(|e| CodecError::Decode {
            content_type: ContentType::Properties,
            reason: e.to_string(),
        })?;

        let mut doc = Document::new();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let (key, value) = line.split_once('=').ok_or_else(|| CodecError::Decode {
                content_type: ContentType::Properties,
                reason: format!("missing '=' in {line:?}"),
            })?;
            doc.set(key.trim(), value.trim())
                .map_err(|e| CodecError::Decode {
                    content_type: ContentType::Properties,
                    reason: e.to_string(),
                })?;
        }
        Ok(doc.into_node())
    }
}

#[test]
fn test_custom_decoder_feeds_document() {
    let input = b"db.host = localhost\ndb.ports.0 = 5432\ndb.ports.1 = 5433\n";
    let doc = Document::decode(input, &LinesDecoder, Options::default()).unwrap();

    assert_eq!(doc.get_as::<&str>("db.host"), Some("localhost"));
    assert_eq!(doc.len("db.ports"), Some(2));
    assert_eq!(
        doc.encode(&JsonCodec::default()).unwrap(),
        br#"{"db":{"host":"localhost","ports":["5432","5433"]}}"#.to_vec()
    );
}

#[test]
fn test_custom_decoder_errors_propagate() {
    let err = Document::decode(b"no equals sign", &LinesDecoder, Options::default()).unwrap_err();
    assert!(err.is_codec_error());
    assert!(err.to_string().contains("missing '='"));
}

#[test]
fn test_load_by_content_type() {
    let content_type = ContentType::from_extension("settings.json").unwrap();
    let doc = Document::load(content_type, br#"{"a": [true]}"#, Options::default()).unwrap();
    assert_eq!(doc.get_as::<bool>("a.0"), Some(true));

    let err = Document::load(ContentType::Yaml, b"a: 1", Options::default()).unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn test_sniffed_content_type() {
    let input = b"\n  [1, 2]";
    let content_type = ContentType::sniff(input).unwrap();
    assert_eq!(content_type, ContentType::Json);
    assert_eq!(
        Document::load(content_type, input, Options::default())
            .unwrap()
            .len("."),
        Some(2)
    );
}

#[test]
fn test_malformed_json() {
    let err = Document::from_json(r#"{"n":123456789, "m":{"k":"v"}, "a":[1,2,3]"#).unwrap_err();
    assert!(err.is_codec_error());
    assert_eq!(err.module(), "codec");
}

#[test]
fn test_preserve_numbers_option() {
    let input = r#"{"Id": 53687091200, "big": 123456789012345678901234567890}"#;

    let plain = Document::from_json(input).unwrap();
    assert_eq!(plain.get_as::<i64>("Id"), Some(53687091200));
    assert!(plain.get_as::<f64>("big").is_some());

    let exact = Document::from_json_with(input, Options::default().preserve_numbers(true)).unwrap();
    assert_eq!(exact.get_as::<i64>("Id"), Some(53687091200));
    assert_eq!(
        exact.get("big").and_then(Node::as_scalar).and_then(Scalar::as_number_text),
        Some("123456789012345678901234567890")
    );
    assert!(exact.options().preserve_numbers);
}

#[test]
fn test_preserved_numbers_survive_save_and_reload() {
    let options = Options::default().preserve_numbers(true);
    let mut d = Document::from_json_with(
        r#"{"port": 8080, "ratio": 0.1000000000000000055511151231257827, "id": 123456789012345678901234567890}"#,
        options,
    )
    .unwrap();
    d.set("name", "svc").unwrap();

    let saved = d.to_json_string().unwrap();
    assert_eq!(
        saved,
        r#"{"port":8080,"ratio":0.1000000000000000055511151231257827,"id":123456789012345678901234567890,"name":"svc"}"#
    );

    let reloaded = Document::from_json_with(&saved, options).unwrap();
    assert_eq!(reloaded, d);
    assert_eq!(reloaded.get_as::<u64>("port"), Some(8080));

    // without the option the same text still reads as numbers
    let plain = Document::from_json(&saved).unwrap();
    assert_eq!(plain.get_as::<i64>("port"), Some(8080));
}

#[test]
fn test_codec_round_trip_keeps_member_order() {
    let text = r#"{"zeta":1,"alpha":{"y":[1,2],"x":null},"mid":"s"}"#;
    let codec = JsonCodec::default();
    let node = codec.decode(text.as_bytes()).unwrap();
    assert_eq!(codec.encode(&node).unwrap(), text.as_bytes().to_vec());
}

#[test]
fn test_encoder_content_types() {
    assert_eq!(Decoder::content_type(&JsonCodec::default()), ContentType::Json);
    assert_eq!(Encoder::content_type(&JsonCodec::pretty()), ContentType::Json);
    assert_eq!(ContentType::Yaml.to_string(), "yaml");
}

#[test]
fn test_content_type_serde_names() {
    let parsed: ContentType = serde_json::from_str(r#""properties""#).unwrap();
    assert_eq!(parsed, ContentType::Properties);
    assert_eq!(serde_json::to_string(&ContentType::Toml).unwrap(), r#""toml""#);
}
