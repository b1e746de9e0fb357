use super::*;

impl App {
    pub(super) fn sidebar_key(&mut self, key: KeyEvent) {
        let (renaming, confirming) = match &self.sidebar.item {
            Some((_, item)) => (item.is_renaming(), item.is_confirming_delete()),
            None => (false, false),
        };

        if renaming {
            match key.code {
                KeyCode::Esc => {
                    if let Some((_, item)) = self.sidebar.item.as_mut() {
                        item.cancel_rename();
                    }
                    self.sync_sidebar_item();
                }
                KeyCode::Enter => self.blur_sidebar_item(),
                _ => {
                    if let Some(input) = self
                        .sidebar
                        .item
                        .as_mut()
                        .and_then(|(_, item)| item.rename_input_mut())
                    {
                        input.handle_key(key);
                    }
                }
            }
            return;
        }

        if confirming {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => self.confirm_sidebar_delete(),
                KeyCode::Char('n') | KeyCode::Esc => {
                    if let Some((_, item)) = self.sidebar.item.as_mut() {
                        item.cancel_delete();
                    }
                    self.sync_sidebar_item();
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_row(self.sidebar.selected.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.select_row(self.sidebar.selected + 1),
            KeyCode::Home => self.select_row(0),
            KeyCode::End => self.select_row(usize::MAX),
            KeyCode::Enter => self.row_click(ClickKind::Single),
            KeyCode::Char('p') => self.row_click(ClickKind::Double),
            KeyCode::Char(' ') => {
                if let Some(row) = self.selected_row().filter(|r| r.is_directory()) {
                    self.dispatch(Action::ToggleDirectory(row.path));
                    self.sync_sidebar_item();
                }
            }
            KeyCode::Char('r') => {
                self.item_interaction(|item| item.edit_icon_click());
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                self.item_interaction(|item| item.trash_icon_click());
            }
            KeyCode::Char('n') => self.open_create_file(),
            _ => {}
        }
    }

    pub(in crate::tui_shell) fn sidebar_confirming_delete(&self) -> bool {
        self.sidebar
            .item
            .as_ref()
            .is_some_and(|(_, item)| item.is_confirming_delete())
    }

    pub(super) fn select_row(&mut self, idx: usize) {
        let n = self.sidebar_rows().len();
        let idx = idx.min(n.saturating_sub(1));
        if idx != self.sidebar.selected {
            if let Some((_, item)) = self.sidebar.item.as_mut() {
                item.pointer_leave();
            }
            self.sidebar.selected = idx;
        }
        self.sync_sidebar_item();
    }

    /// Runs one interaction on the selected row's machine and applies what it
    /// emitted.
    pub(super) fn item_interaction(&mut self, f: impl FnOnce(&mut ItemMachine) -> Handled) -> bool {
        let Some((_, item)) = self.sidebar.item.as_mut() else {
            return true;
        };
        let handled = f(item);
        let propagate = handled.propagate;
        if let Some(effect) = handled.effect {
            self.apply_item_effect(effect);
        }
        propagate
    }

    pub(super) fn row_click(&mut self, kind: ClickKind) {
        self.item_interaction(|item| match kind {
            ClickKind::Single => item.click(),
            ClickKind::Double => item.double_click(),
        });
    }

    /// Focus left the row; commits or abandons an in-progress rename.
    pub(super) fn blur_sidebar_item(&mut self) {
        self.item_interaction(|item| item.blur());
        self.sync_sidebar_item();
    }

    fn confirm_sidebar_delete(&mut self) {
        self.item_interaction(|item| item.confirm_delete());
        self.sync_sidebar_item();
    }

    fn apply_item_effect(&mut self, effect: ItemEffect) {
        let Some(row) = self.selected_row() else {
            return;
        };
        match effect {
            ItemEffect::Open => match row.file_id {
                Some(id) => self.dispatch(Action::OpenTab(TabState::transient(id))),
                None => self.dispatch(Action::ToggleDirectory(row.path)),
            },
            ItemEffect::OpenPersistent => match row.file_id {
                Some(id) => {
                    self.dispatch(Action::OpenTab(TabState::persistent(id)));
                    self.set_focus(Focus::Editor);
                }
                None => self.dispatch(Action::ToggleDirectory(row.path)),
            },
            ItemEffect::Rename(value) => self.rename_row(&row, &value),
            ItemEffect::Delete => self.delete_row(&row),
        }
    }

    fn rename_row(&mut self, row: &TreeRow, new_leaf: &str) {
        let Some(id) = row.file_id.clone() else {
            return;
        };
        let new_name = match row.path.rsplit_once('/') {
            Some((parent, _)) => format!("{}/{}", parent, new_leaf),
            None => new_leaf.to_string(),
        };
        if new_name != row.path {
            if let Some(clash) = self.doc.data().name_clash(&new_name) {
                self.push_error(format!("cannot rename to `{}`: {}", new_name, clash));
                return;
            }
        }
        match rename_file(&mut self.doc, &id, &new_name, SOURCE_LOCAL) {
            Ok(()) => {
                self.push_status(format!("renamed {} to {}", row.path, new_name));
                self.pump_doc();
            }
            Err(err) => self.push_error(format!("rename failed: {}", err)),
        }
    }

    fn delete_row(&mut self, row: &TreeRow) {
        match row.file_id.clone() {
            Some(id) => match delete_file(&mut self.doc, &id, SOURCE_LOCAL) {
                Ok(()) => {
                    self.dispatch(Action::CloseTabs(vec![id]));
                    self.push_status(format!("deleted {}", row.path));
                }
                Err(err) => self.push_error(format!("delete failed: {}", err)),
            },
            None => {
                let ids = self.doc.data().files_under(&row.path);
                match delete_directory(&mut self.doc, &row.path, SOURCE_LOCAL) {
                    Ok(n) => {
                        self.dispatch(Action::CloseTabs(ids));
                        self.push_status(format!("deleted {} ({} files)", row.path, n));
                    }
                    Err(err) => self.push_error(format!("delete failed: {}", err)),
                }
            }
        }
        self.pump_doc();
    }

    pub(super) fn open_create_file(&mut self) {
        let prefix = self
            .selected_row()
            .map(|row| {
                let dir = if row.is_directory() {
                    Some(row.path.as_str())
                } else {
                    row.path.rsplit_once('/').map(|(parent, _)| parent)
                };
                dir.map(|d| format!("{}/", d)).unwrap_or_default()
            })
            .unwrap_or_default();
        self.open_modal(Modal::create_file(CreateFileForm::new(&prefix)));
    }

    /// Creates the file and opens it in a persistent tab. Returns false when
    /// the name clashes with the tree, leaving the dialog open.
    pub(in crate::tui_shell) fn create_file_named(&mut self, name: &str) -> bool {
        if let Some(clash) = self.doc.data().name_clash(name) {
            let msg = clash.to_string();
            if let Some(ModalKind::CreateFile { form }) = self.modal_mut().map(|m| &mut m.kind) {
                form.conflict = Some(msg.clone());
            }
            self.push_error(msg);
            return false;
        }
        let id = match FileId::random() {
            Ok(id) => id,
            Err(err) => {
                self.push_error(format!("create failed: {:#}", err));
                return true;
            }
        };
        match create_file(&mut self.doc, id, name, SOURCE_LOCAL) {
            Ok(id) => {
                self.reveal_path(name);
                self.dispatch(Action::OpenTab(TabState::persistent(id)));
                self.set_focus(Focus::Editor);
                self.push_status(format!("created {}", name));
                self.pump_doc();
            }
            Err(err) => self.push_error(format!("create failed: {}", err)),
        }
        true
    }

    /// Opens every ancestor directory of `path` and selects its row.
    fn reveal_path(&mut self, path: &str) {
        let mut prefix = String::new();
        let parts: Vec<&str> = path.split('/').collect();
        for dir in &parts[..parts.len().saturating_sub(1)] {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(dir);
            if !self.editor.is_directory_open(&prefix) {
                self.editor.dispatch(Action::ToggleDirectory(prefix.clone()));
            }
        }
        if let Some(i) = self.sidebar_rows().iter().position(|r| r.path == path) {
            self.select_row(i);
        }
    }
}
