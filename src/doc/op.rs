use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::FileId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(u64),
    Key(String),
}

impl PathSegment {
    pub fn as_index(&self) -> Option<u64> {
        match self {
            PathSegment::Index(i) => Some(*i),
            PathSegment::Key(_) => None,
        }
    }

    pub fn as_key(&self) -> Option<&str> {
        match self {
            PathSegment::Key(k) => Some(k.as_str()),
            PathSegment::Index(_) => None,
        }
    }
}

impl From<&str> for PathSegment {
    fn from(s: &str) -> Self {
        PathSegment::Key(s.to_string())
    }
}

impl From<u64> for PathSegment {
    fn from(i: u64) -> Self {
        PathSegment::Index(i)
    }
}

impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathSegment::Index(i) => write!(f, "{}", i),
            PathSegment::Key(k) => f.write_str(k),
        }
    }
}

pub type DocPath = Vec<PathSegment>;

pub(crate) fn fmt_path(path: &[PathSegment]) -> String {
    let parts: Vec<String> = path.iter().map(|s| s.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Op {
    Insert { path: DocPath, value: Value },
    Replace { path: DocPath, old: Value, new: Value },
    Remove { path: DocPath, old: Value },
}

impl Op {
    pub fn path(&self) -> &[PathSegment] {
        match self {
            Op::Insert { path, .. } | Op::Replace { path, .. } | Op::Remove { path, .. } => path,
        }
    }
}

pub fn insert_op(path: DocPath, value: Value) -> Op {
    Op::Insert { path, value }
}

pub fn replace_op(path: DocPath, old: Value, new: Value) -> Op {
    Op::Replace { path, old, new }
}

pub fn remove_op(path: DocPath, old: Value) -> Op {
    Op::Remove { path, old }
}

pub fn file_path(id: &FileId) -> DocPath {
    vec!["files".into(), PathSegment::Key(id.0.clone())]
}

pub fn name_path(id: &FileId) -> DocPath {
    let mut p = file_path(id);
    p.push("name".into());
    p
}

/// Path of a file's text; remote presence for the file extends this path with
/// the cursor offset.
pub fn text_path(id: &FileId) -> DocPath {
    let mut p = file_path(id);
    p.push("text".into());
    p
}
