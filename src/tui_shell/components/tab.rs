use crate::model::{FileId, TabState};
use crate::workspace::Action;

/// Folder plus file name, e.g. `src/index.js` for `app/src/index.js`.
pub(in crate::tui_shell) fn tab_label(file_name: &str) -> String {
    let parts: Vec<&str> = file_name.split('/').collect();
    match parts.as_slice() {
        [.., dir, file] => format!("{}/{}", dir, file),
        [file] => file.to_string(),
        [] => String::new(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum TabEvent {
    Click,
    DoubleClick,
    CloseClick,
}

/// Everything needed to draw one tab and turn its events into actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct TabProps {
    pub(in crate::tui_shell) file_id: FileId,
    pub(in crate::tui_shell) is_transient: bool,
    pub(in crate::tui_shell) is_active: bool,
    pub(in crate::tui_shell) label: String,
}

impl TabProps {
    pub(in crate::tui_shell) fn new(tab: &TabState, active: Option<&FileId>, file_name: &str) -> Self {
        Self {
            file_id: tab.file_id.clone(),
            is_transient: tab.is_transient,
            is_active: active == Some(&tab.file_id),
            label: tab_label(file_name),
        }
    }

    pub(in crate::tui_shell) fn on(&self, event: TabEvent) -> Action {
        match event {
            TabEvent::Click => Action::SetActiveFileId(self.file_id.clone()),
            TabEvent::DoubleClick => Action::OpenTab(TabState::persistent(self.file_id.clone())),
            TabEvent::CloseClick => Action::CloseTabs(vec![self.file_id.clone()]),
        }
    }
}
