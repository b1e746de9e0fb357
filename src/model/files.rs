use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FileId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Slash-separated path relative to the workspace root.
    pub name: String,
    pub text: String,
}

pub type Files = BTreeMap<FileId, File>;

/// Shape of the replicated document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VzContent {
    #[serde(default)]
    pub files: Files,
}

impl VzContent {
    pub fn file(&self, id: &FileId) -> Option<&File> {
        self.files.get(id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<(&FileId, &File)> {
        self.files.iter().find(|(_, f)| f.name == name)
    }

    /// Ids of every file whose name lives under `dir` (a slash-separated prefix).
    pub fn files_under(&self, dir: &str) -> Vec<FileId> {
        let prefix = format!("{}/", dir.trim_end_matches('/'));
        self.files
            .iter()
            .filter(|(_, f)| f.name.starts_with(&prefix))
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Whether `name` would collide with the tree as it stands. A file may not
    /// share a path with another file or a directory, nor sit below a file.
    pub fn name_clash(&self, name: &str) -> Option<NameClash> {
        if self.find_by_name(name).is_some() {
            return Some(NameClash::Exists(name.to_string()));
        }
        if !self.files_under(name).is_empty() {
            return Some(NameClash::Directory(name.to_string()));
        }
        let mut ancestors = name.match_indices('/').map(|(i, _)| &name[..i]);
        ancestors
            .find(|dir| self.find_by_name(dir).is_some())
            .map(|dir| NameClash::UnderFile(dir.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameClash {
    #[error("`{0}` already exists")]
    Exists(String),
    #[error("`{0}` is a directory")]
    Directory(String),
    #[error("`{0}` is a file")]
    UnderFile(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabState {
    pub file_id: FileId,
    pub is_transient: bool,
}

impl TabState {
    pub fn transient(file_id: FileId) -> Self {
        Self {
            file_id,
            is_transient: true,
        }
    }

    pub fn persistent(file_id: FileId) -> Self {
        Self {
            file_id,
            is_transient: false,
        }
    }
}

#[cfg(test)]
#[path = "../tests/model/files_tests.rs"]
mod files_tests;
