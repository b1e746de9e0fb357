use std::sync::mpsc::{self, Receiver, Sender};

use serde_json::Value;

use crate::model::{File, FileId, SessionId, VzContent};

use super::op::fmt_path;
use super::{DocError, Op, PathSegment, PresenceEvent, SharedDoc};

/// Handle used by presence producers (a network bridge, a replay feed) to
/// broadcast into a [`LocalDoc`].
#[derive(Clone, Debug)]
pub struct PresenceSender {
    tx: Sender<PresenceEvent>,
}

impl PresenceSender {
    /// Returns false once the document has been dropped.
    pub fn send(&self, id: SessionId, presence: Option<Value>) -> bool {
        self.tx.send(PresenceEvent { id, presence }).is_ok()
    }
}

#[derive(Debug)]
pub struct LocalDoc {
    content: VzContent,
    version: u64,
    presence_tx: Sender<PresenceEvent>,
    presence_rx: Receiver<PresenceEvent>,
}

enum Target {
    File(FileId),
    Name(FileId),
    Text(FileId),
}

fn parse_target(path: &[PathSegment]) -> Result<Target, DocError> {
    let unsupported = || DocError::UnsupportedPath(fmt_path(path));
    let (Some(root), Some(id)) = (path.first(), path.get(1)) else {
        return Err(unsupported());
    };
    if root.as_key() != Some("files") {
        return Err(unsupported());
    }
    let id = FileId(id.as_key().ok_or_else(unsupported)?.to_string());
    match path.get(2).map(|s| s.as_key()) {
        None => Ok(Target::File(id)),
        Some(Some("name")) if path.len() == 3 => Ok(Target::Name(id)),
        Some(Some("text")) if path.len() == 3 => Ok(Target::Text(id)),
        _ => Err(unsupported()),
    }
}

fn expect_str<'a>(path: &[PathSegment], v: &'a Value) -> Result<&'a str, DocError> {
    v.as_str().ok_or_else(|| DocError::InvalidValue {
        path: fmt_path(path),
        reason: "expected a string".to_string(),
    })
}

impl LocalDoc {
    pub fn new(content: VzContent) -> Self {
        let (presence_tx, presence_rx) = mpsc::channel();
        Self {
            content,
            version: 0,
            presence_tx,
            presence_rx,
        }
    }

    pub fn presence_sender(&self) -> PresenceSender {
        PresenceSender {
            tx: self.presence_tx.clone(),
        }
    }

    fn file_mut(&mut self, id: &FileId) -> Result<&mut File, DocError> {
        self.content
            .files
            .get_mut(id)
            .ok_or_else(|| DocError::MissingFile(id.clone()))
    }

    fn apply(&mut self, op: Op) -> Result<(), DocError> {
        let target = parse_target(op.path())?;
        match (op, target) {
            (Op::Insert { path, value }, Target::File(id)) => {
                if self.content.files.contains_key(&id) {
                    return Err(DocError::AlreadyExists(id));
                }
                let file: File =
                    serde_json::from_value(value).map_err(|e| DocError::InvalidValue {
                        path: fmt_path(&path),
                        reason: e.to_string(),
                    })?;
                self.content.files.insert(id, file);
            }
            (Op::Remove { .. }, Target::File(id)) => {
                if self.content.files.remove(&id).is_none() {
                    return Err(DocError::MissingFile(id));
                }
            }
            (Op::Replace { path, old, new }, Target::Name(id)) => {
                let old = expect_str(&path, &old)?.to_string();
                let new = expect_str(&path, &new)?.to_string();
                let file = self.file_mut(&id)?;
                if file.name != old {
                    return Err(DocError::Stale { id, field: "name" });
                }
                file.name = new;
            }
            (Op::Replace { path, old, new }, Target::Text(id)) => {
                let old = expect_str(&path, &old)?.to_string();
                let new = expect_str(&path, &new)?.to_string();
                let file = self.file_mut(&id)?;
                if file.text != old {
                    return Err(DocError::Stale { id, field: "text" });
                }
                file.text = new;
            }
            (op, _) => return Err(DocError::UnsupportedPath(fmt_path(op.path()))),
        }
        Ok(())
    }
}

impl SharedDoc for LocalDoc {
    fn data(&self) -> &VzContent {
        &self.content
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn submit_op(&mut self, op: Op, source: &str) -> Result<(), DocError> {
        let path = fmt_path(op.path());
        match self.apply(op) {
            Ok(()) => {
                self.version += 1;
                tracing::trace!(%path, source, version = self.version, "applied op");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%path, source, error = %err, "rejected op");
                Err(err)
            }
        }
    }

    fn poll_presence(&mut self) -> Vec<PresenceEvent> {
        self.presence_rx.try_iter().collect()
    }
}
