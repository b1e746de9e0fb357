use serde_json::Value;

use crate::doc::{DocPath, PathSegment};

use super::PresenceError;

/// A remote session's cursor or selection. The final segment of `start` and
/// `end` is the character offset; everything before it is the document path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presence {
    start: DocPath,
    end: DocPath,
    start_offset: usize,
    end_offset: usize,
}

fn offset_of(which: &str, path: &[PathSegment]) -> Result<usize, PresenceError> {
    let last = path
        .last()
        .ok_or_else(|| PresenceError::Malformed(format!("`{}` is empty", which)))?;
    let idx = last.as_index().ok_or_else(|| {
        PresenceError::Malformed(format!("`{}` does not end in an offset", which))
    })?;
    usize::try_from(idx)
        .map_err(|_| PresenceError::Malformed(format!("`{}` offset out of range", which)))
}

fn path_field(obj: &serde_json::Map<String, Value>, which: &str) -> Result<DocPath, PresenceError> {
    let raw = obj
        .get(which)
        .ok_or_else(|| PresenceError::Malformed(format!("missing `{}`", which)))?;
    serde_json::from_value(raw.clone())
        .map_err(|e| PresenceError::Malformed(format!("bad `{}`: {}", which, e)))
}

impl Presence {
    pub fn new(start: DocPath, end: DocPath) -> Result<Self, PresenceError> {
        let start_offset = offset_of("start", &start)?;
        let end_offset = offset_of("end", &end)?;
        Ok(Self {
            start,
            end,
            start_offset,
            end_offset,
        })
    }

    pub fn from_json(value: &Value) -> Result<Self, PresenceError> {
        let obj = value
            .as_object()
            .ok_or_else(|| PresenceError::Malformed("expected an object".to_string()))?;
        let start = path_field(obj, "start")?;
        let end = path_field(obj, "end")?;
        Self::new(start, end)
    }

    pub fn start(&self) -> &[PathSegment] {
        &self.start
    }

    pub fn end(&self) -> &[PathSegment] {
        &self.end
    }

    pub fn start_offset(&self) -> usize {
        self.start_offset
    }

    pub fn end_offset(&self) -> usize {
        self.end_offset
    }

    /// `start` without its trailing offset.
    pub fn path(&self) -> &[PathSegment] {
        &self.start[..self.start.len() - 1]
    }

    pub fn is_collapsed(&self) -> bool {
        self.start_offset == self.end_offset
    }
}

/// True when every segment of `local` equals the segment at the same index of
/// the presence's `start`. Only `local.len()` segments are compared, so a
/// `local` path that is a prefix of the remote path matches.
pub fn path_matches(local: &[PathSegment], presence: &Presence) -> bool {
    local
        .iter()
        .enumerate()
        .all(|(i, seg)| presence.start.get(i) == Some(seg))
}
