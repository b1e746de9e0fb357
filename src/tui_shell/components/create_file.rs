use crate::model::validate_file_name;

use super::super::input::Input;

/// State of the "Create File" dialog.
#[derive(Clone, Debug, Default)]
pub(in crate::tui_shell) struct CreateFileForm {
    pub(in crate::tui_shell) input: Input,
    /// Set when the last submitted name collided with the tree; cleared on edit.
    pub(in crate::tui_shell) conflict: Option<String>,
}

impl CreateFileForm {
    pub(in crate::tui_shell) fn new(initial: &str) -> Self {
        Self {
            input: Input::with_value(initial),
            conflict: None,
        }
    }

    pub(in crate::tui_shell) fn name(&self) -> &str {
        &self.input.buf
    }

    /// Why the create action is disabled, if it is.
    pub(in crate::tui_shell) fn problem(&self) -> Option<String> {
        match validate_file_name(self.name()) {
            Err(e) => Some(e.to_string()),
            Ok(()) => self.conflict.clone(),
        }
    }

    pub(in crate::tui_shell) fn can_submit(&self) -> bool {
        self.problem().is_none()
    }

    /// The name to create, or None while the action is disabled. The field
    /// keeps its value so a refused name can be corrected.
    pub(in crate::tui_shell) fn submit(&self) -> Option<String> {
        self.can_submit().then(|| self.input.buf.clone())
    }
}
