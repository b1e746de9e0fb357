use std::time::Duration;

use serde_json::{Map, json};

use super::*;
use crate::model::FileId;

#[test]
fn body_merges_options_and_required_fields_win() {
    let mut options = Map::new();
    options.insert("model".to_string(), json!("small"));
    options.insert("fileId".to_string(), json!("spoofed"));
    let req = AiAssistRequest {
        options,
        input_text: "Current File:\nx".to_string(),
        file_id: FileId::from("f1"),
        insertion_cursor: 7,
    };
    assert_eq!(
        req.to_body(),
        json!({
            "model": "small",
            "inputText": "Current File:\nx",
            "fileId": "f1",
            "insertionCursor": 7,
        })
    );
}

#[test]
fn tokens_increase_and_supersede() {
    // Port 9 (discard) on localhost: nothing listens, so requests fail fast.
    let client = AiAssistClient::new(
        "http://127.0.0.1:9/ai-assist".to_string(),
        Map::new(),
        Duration::from_millis(500),
    )
    .unwrap();
    assert_eq!(client.latest(), None);

    let t1 = client
        .start(client.request("p".into(), FileId::from("a"), 0))
        .unwrap();
    let t2 = client
        .start(client.request("p".into(), FileId::from("a"), 0))
        .unwrap();
    assert!(t2 > t1);
    assert!(!client.is_current(t1));
    assert!(client.is_current(t2));

    let mut seen = Vec::new();
    while seen.len() < 2 {
        let outcome = client
            .wait_outcome(Duration::from_secs(5))
            .expect("outcome before timeout");
        assert!(outcome.result.is_err());
        seen.push((outcome.token, outcome.superseded));
    }
    seen.sort();
    // t1 may fail before t2 starts; the token check still marks it stale.
    assert_eq!(seen[0].0, t1);
    assert!(seen[0].1 || !client.is_current(t1));
    assert_eq!(seen[1], (t2, false));
}
