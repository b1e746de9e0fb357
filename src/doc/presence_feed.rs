//! Replays presence broadcasts from a JSON-lines file.
//!
//! Each non-blank line is `{"id": "...", "presence": {...} | null, "delay_ms": n}`;
//! lines starting with `#` are skipped. `delay_ms` is slept before the event is
//! sent.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::model::SessionId;

use super::PresenceSender;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeedLine {
    pub id: SessionId,
    #[serde(default)]
    pub presence: Option<Value>,
    #[serde(default)]
    pub delay_ms: Option<u64>,
}

pub fn parse_feed_line(line: &str) -> Result<Option<FeedLine>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let parsed: FeedLine = serde_json::from_str(line).context("parse presence feed line")?;
    Ok(Some(parsed))
}

pub fn spawn_presence_feed(path: &Path, sender: PresenceSender) -> Result<JoinHandle<()>> {
    let file = File::open(path).with_context(|| format!("open presence feed {}", path.display()))?;
    let label = path.display().to_string();
    let handle = std::thread::Builder::new()
        .name("presence-feed".to_string())
        .spawn(move || run_feed(BufReader::new(file), &label, sender))
        .context("spawn presence feed thread")?;
    Ok(handle)
}

fn run_feed(reader: impl BufRead, label: &str, sender: PresenceSender) {
    let mut sent = 0usize;
    for (n, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(err) => {
                tracing::warn!(feed = label, error = %err, "presence feed read failed");
                break;
            }
        };
        let entry = match parse_feed_line(&line) {
            Ok(Some(e)) => e,
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!(feed = label, line = n + 1, error = %format!("{:#}", err), "skipping feed line");
                continue;
            }
        };
        if let Some(ms) = entry.delay_ms {
            std::thread::sleep(Duration::from_millis(ms));
        }
        if !sender.send(entry.id, entry.presence) {
            tracing::debug!(feed = label, "document dropped; stopping presence feed");
            return;
        }
        sent += 1;
    }
    tracing::info!(feed = label, sent, "presence feed finished");
}
