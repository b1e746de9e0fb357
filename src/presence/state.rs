use std::collections::BTreeMap;

use crate::doc::DocPath;
use crate::model::SessionId;

use super::{Presence, path_matches};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Receipt {
    /// Entry inserted or overwritten.
    Accepted,
    /// Entry removed (disconnect, or presence now points at another path).
    Removed,
}

/// Latest known presence per remote session, restricted to one document path.
#[derive(Clone, Debug, Default)]
pub struct PresenceState {
    path: DocPath,
    entries: BTreeMap<SessionId, Presence>,
}

impl PresenceState {
    pub fn new(path: DocPath) -> Self {
        Self {
            path,
            entries: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &DocPath {
        &self.path
    }

    pub fn receive(&mut self, id: SessionId, presence: Option<Presence>) -> Receipt {
        match presence {
            Some(p) if path_matches(&self.path, &p) => {
                self.entries.insert(id, p);
                Receipt::Accepted
            }
            _ => {
                self.entries.remove(&id);
                Receipt::Removed
            }
        }
    }

    /// Retargets the state at a different path, dropping every entry.
    pub fn set_path(&mut self, path: DocPath) {
        self.path = path;
        self.entries.clear();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: &SessionId) -> Option<&Presence> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SessionId, &Presence)> {
        self.entries.iter()
    }
}
