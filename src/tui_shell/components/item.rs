use super::super::input::Input;

/// Directory rename is not supported yet; the edit action is hidden for them.
const ENABLE_RENAME_DIRECTORY: bool = false;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum ItemState {
    Idle,
    Hovered,
    Renaming(Input),
    ConfirmingDelete,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum ItemEffect {
    Open,
    OpenPersistent,
    Rename(String),
    Delete,
}

/// What an interaction produced, and whether the enclosing row should still
/// see the event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct Handled {
    pub(in crate::tui_shell) effect: Option<ItemEffect>,
    pub(in crate::tui_shell) propagate: bool,
}

impl Handled {
    fn ignored() -> Self {
        Self {
            effect: None,
            propagate: true,
        }
    }

    fn emit(effect: ItemEffect) -> Self {
        Self {
            effect: Some(effect),
            propagate: true,
        }
    }

    fn stop(effect: Option<ItemEffect>) -> Self {
        Self {
            effect,
            propagate: false,
        }
    }
}

/// A file or directory row in the sidebar.
#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct ItemMachine {
    name: String,
    is_directory: bool,
    state: ItemState,
}

impl ItemMachine {
    pub(in crate::tui_shell) fn new(name: &str, is_directory: bool) -> Self {
        Self {
            name: name.to_string(),
            is_directory,
            state: ItemState::Idle,
        }
    }

    pub(in crate::tui_shell) fn is_directory(&self) -> bool {
        self.is_directory
    }

    pub(in crate::tui_shell) fn state(&self) -> &ItemState {
        &self.state
    }

    pub(in crate::tui_shell) fn is_renaming(&self) -> bool {
        matches!(self.state, ItemState::Renaming(_))
    }

    pub(in crate::tui_shell) fn is_confirming_delete(&self) -> bool {
        self.state == ItemState::ConfirmingDelete
    }

    /// Edit and delete actions are offered only while hovered.
    pub(in crate::tui_shell) fn shows_utils(&self) -> bool {
        self.state == ItemState::Hovered
    }

    pub(in crate::tui_shell) fn can_rename(&self) -> bool {
        !self.is_directory || ENABLE_RENAME_DIRECTORY
    }

    pub(in crate::tui_shell) fn rename_input(&self) -> Option<&Input> {
        match &self.state {
            ItemState::Renaming(input) => Some(input),
            _ => None,
        }
    }

    pub(in crate::tui_shell) fn rename_input_mut(&mut self) -> Option<&mut Input> {
        match &mut self.state {
            ItemState::Renaming(input) => Some(input),
            _ => None,
        }
    }

    pub(in crate::tui_shell) fn pointer_enter(&mut self) {
        if self.state == ItemState::Idle {
            self.state = ItemState::Hovered;
        }
    }

    pub(in crate::tui_shell) fn pointer_leave(&mut self) {
        if self.state == ItemState::Hovered {
            self.state = ItemState::Idle;
        }
    }

    pub(in crate::tui_shell) fn click(&mut self) -> Handled {
        if self.is_renaming() {
            return Handled::ignored();
        }
        Handled::emit(ItemEffect::Open)
    }

    pub(in crate::tui_shell) fn double_click(&mut self) -> Handled {
        if self.is_renaming() {
            return Handled::ignored();
        }
        Handled::emit(ItemEffect::OpenPersistent)
    }

    pub(in crate::tui_shell) fn edit_icon_click(&mut self) -> Handled {
        if !self.shows_utils() || !self.can_rename() {
            return Handled::ignored();
        }
        self.state = ItemState::Renaming(Input::with_value(&self.name));
        Handled::stop(None)
    }

    pub(in crate::tui_shell) fn trash_icon_click(&mut self) -> Handled {
        if !self.shows_utils() {
            return Handled::ignored();
        }
        self.state = ItemState::ConfirmingDelete;
        Handled::stop(None)
    }

    /// Leaves rename mode without committing.
    pub(in crate::tui_shell) fn cancel_rename(&mut self) {
        if self.is_renaming() {
            self.state = ItemState::Idle;
        }
    }

    /// Focus left the rename field. A blank value asks for delete
    /// confirmation instead of renaming.
    pub(in crate::tui_shell) fn blur(&mut self) -> Handled {
        let ItemState::Renaming(input) = &self.state else {
            return Handled::ignored();
        };
        if input.buf.trim().is_empty() {
            self.state = ItemState::ConfirmingDelete;
            return Handled::stop(None);
        }
        let value = input.buf.clone();
        self.state = ItemState::Idle;
        Handled::stop(Some(ItemEffect::Rename(value)))
    }

    pub(in crate::tui_shell) fn cancel_delete(&mut self) {
        if self.is_confirming_delete() {
            self.state = ItemState::Idle;
        }
    }

    pub(in crate::tui_shell) fn confirm_delete(&mut self) -> Handled {
        if !self.is_confirming_delete() {
            return Handled::ignored();
        }
        self.state = ItemState::Idle;
        Handled::stop(Some(ItemEffect::Delete))
    }
}
