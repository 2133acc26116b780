//! Purpose: Integration coverage for the JSON file load/save pair.
//! Exports: None (integration test module).
//! Role: Verify the round-trip law and the failure taxonomy on real files.
//! Invariants: Every test uses its own temp directory; nothing leaks between tests.

use jsonfetch::{ErrorKind, SaveOptions, json_load, json_save};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

fn sample_document() -> Value {
    json!({
        "name": "fixture",
        "count": 3,
        "ratio": 0.25,
        "enabled": true,
        "missing": null,
        "tags": ["a", "b", "c"],
        "nested": {"inner": [1, 2, {"deep": false}]}
    })
}

#[test]
fn round_trip_preserves_structure_for_every_option() {
    let temp = tempfile::tempdir().expect("tempdir");
    let document = sample_document();

    let options = [
        SaveOptions::default(),
        SaveOptions {
            pretty: true,
            ..SaveOptions::default()
        },
        SaveOptions {
            append_newline: true,
            ..SaveOptions::default()
        },
        SaveOptions {
            pretty: true,
            append_newline: true,
        },
    ];

    for (index, option) in options.into_iter().enumerate() {
        let path = temp.path().join(format!("doc-{index}.json"));
        json_save(&document, &path, option).expect("save");
        let loaded: Value = json_load(&path).expect("load");
        assert_eq!(loaded, document);
    }
}

#[test]
fn pretty_and_newline_flags_change_the_bytes_not_the_value() {
    let temp = tempfile::tempdir().expect("tempdir");
    let document = sample_document();

    let compact = temp.path().join("compact.json");
    json_save(&document, &compact, SaveOptions::default()).expect("save compact");
    let compact_bytes = std::fs::read(&compact).expect("read compact");
    assert!(!compact_bytes.contains(&b'\n'));

    let pretty = temp.path().join("pretty.json");
    json_save(
        &document,
        &pretty,
        SaveOptions {
            pretty: true,
            append_newline: true,
        },
    )
    .expect("save pretty");
    let pretty_bytes = std::fs::read(&pretty).expect("read pretty");
    assert!(pretty_bytes.len() > compact_bytes.len());
    assert_eq!(pretty_bytes.last(), Some(&b'\n'));
}

#[test]
fn typed_values_round_trip() {
    #[derive(Debug, Deserialize, PartialEq, Serialize)]
    struct Record {
        id: u64,
        label: String,
        scores: Vec<f64>,
    }

    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("record.json");
    let record = Record {
        id: 42,
        label: "answer".to_string(),
        scores: vec![0.5, 1.0],
    };

    json_save(&record, &path, SaveOptions::default()).expect("save");
    let loaded: Record = json_load(&path).expect("load");
    assert_eq!(loaded, record);
}

#[test]
fn save_overwrites_existing_content() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("doc.json");

    json_save(&sample_document(), &path, SaveOptions::default()).expect("first save");
    json_save(&json!({"tiny": 1}), &path, SaveOptions::default()).expect("second save");
    let loaded: Value = json_load(&path).expect("load");
    assert_eq!(loaded, json!({"tiny": 1}));
}

#[test]
fn invalid_bytes_fail_with_decode() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("broken.json");
    std::fs::write(&path, b"not json{{").expect("write");

    let err = json_load::<Value>(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Decode);
}

#[test]
fn missing_file_is_not_found_never_decode() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("absent.json");

    let err = json_load::<Value>(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn missing_parent_directory_fails_the_save() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("no-such-dir").join("doc.json");

    let err = json_save(&sample_document(), &path, SaveOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn unrepresentable_value_fails_with_encode() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("bad.json");

    // Tuple map keys cannot become JSON object keys.
    let mut value = BTreeMap::new();
    value.insert((1u8, 2u8), "pair");

    let err = json_save(&value, &path, SaveOptions::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Encode);
    assert!(!path.exists());
}
