use serde_json::json;

use super::*;
use crate::doc::{PathSegment, text_path};
use crate::model::FileId;

fn local() -> Vec<PathSegment> {
    text_path(&FileId::from("a"))
}

#[test]
fn parses_offsets_from_trailing_segment() {
    let p = Presence::from_json(&json!({
        "start": ["files", "a", "text", 4],
        "end": ["files", "a", "text", 9],
    }))
    .unwrap();
    assert_eq!(p.start_offset(), 4);
    assert_eq!(p.end_offset(), 9);
    assert_eq!(p.path(), local().as_slice());
    assert!(!p.is_collapsed());
}

#[test]
fn malformed_payloads_are_rejected() {
    let cases = [
        json!(null),
        json!("cursor"),
        json!({"start": ["files", "a", "text", 1]}),
        json!({"start": [], "end": []}),
        json!({"start": ["files", "a", "text"], "end": ["files", "a", "text"]}),
        json!({"start": ["files", "a", "text", 1.5], "end": ["files", "a", "text", 1]}),
    ];
    for case in cases {
        assert!(
            matches!(Presence::from_json(&case), Err(PresenceError::Malformed(_))),
            "{case}"
        );
    }
}

#[test]
fn path_matches_compares_only_local_length() {
    let same = Presence::from_json(&json!({
        "start": ["files", "a", "text", 2],
        "end": ["files", "a", "text", 2],
    }))
    .unwrap();
    assert!(path_matches(&local(), &same));

    let other = Presence::from_json(&json!({
        "start": ["files", "b", "text", 2],
        "end": ["files", "b", "text", 2],
    }))
    .unwrap();
    assert!(!path_matches(&local(), &other));

    // Remote path is longer than the local path: still a match.
    let deeper = Presence::from_json(&json!({
        "start": ["files", "a", "text", "x", 2],
        "end": ["files", "a", "text", "x", 2],
    }))
    .unwrap();
    assert!(path_matches(&local(), &deeper));

    // Remote path shorter than the local path never matches.
    let shorter = Presence::from_json(&json!({"start": ["files", 0], "end": ["files", 0]})).unwrap();
    assert!(!path_matches(&local(), &shorter));
}
