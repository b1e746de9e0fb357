use std::collections::BTreeSet;

use crate::model::{FileId, TabState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetActiveFileId(FileId),
    OpenTab(TabState),
    CloseTabs(Vec<FileId>),
    ToggleDirectory(String),
}

/// Tabs, active file and expanded directories. Components dispatch
/// [`Action`]s; nothing else mutates this.
#[derive(Clone, Debug, Default)]
pub struct EditorState {
    pub tab_list: Vec<TabState>,
    pub active_file_id: Option<FileId>,
    open_directories: BTreeSet<String>,
}

impl EditorState {
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::SetActiveFileId(id) => self.active_file_id = Some(id),
            Action::OpenTab(tab) => self.open_tab(tab),
            Action::CloseTabs(ids) => self.close_tabs(&ids),
            Action::ToggleDirectory(path) => {
                if !self.open_directories.remove(&path) {
                    self.open_directories.insert(path);
                }
            }
        }
    }

    pub fn is_directory_open(&self, path: &str) -> bool {
        self.open_directories.contains(path)
    }

    pub fn active_tab(&self) -> Option<&TabState> {
        let active = self.active_file_id.as_ref()?;
        self.tab_list.iter().find(|t| &t.file_id == active)
    }

    /// Opening an already-open file only promotes it (never demotes). A new
    /// transient tab takes the place of the existing transient tab.
    fn open_tab(&mut self, tab: TabState) {
        let id = tab.file_id.clone();
        if let Some(existing) = self.tab_list.iter_mut().find(|t| t.file_id == id) {
            if !tab.is_transient {
                existing.is_transient = false;
            }
        } else if let Some(slot) = self
            .tab_list
            .iter_mut()
            .find(|t| t.is_transient)
            .filter(|_| tab.is_transient)
        {
            *slot = tab;
        } else {
            self.tab_list.push(tab);
        }
        self.active_file_id = Some(id);
    }

    fn close_tabs(&mut self, ids: &[FileId]) {
        let active_idx = self
            .active_file_id
            .as_ref()
            .and_then(|a| self.tab_list.iter().position(|t| &t.file_id == a));
        self.tab_list.retain(|t| !ids.contains(&t.file_id));

        let active_closed = self
            .active_file_id
            .as_ref()
            .is_some_and(|a| ids.contains(a));
        if active_closed {
            self.active_file_id = match active_idx {
                Some(i) if !self.tab_list.is_empty() => {
                    let i = i.min(self.tab_list.len() - 1);
                    Some(self.tab_list[i].file_id.clone())
                }
                _ => None,
            };
        }
    }
}
