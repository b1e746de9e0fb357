use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;

use crate::ai_assist::{AiAssistClient, build_prompt, text_before_caret};
use crate::doc::{
    LocalDoc, SOURCE_LOCAL, SharedDoc, create_file, delete_directory, delete_file, edit_text,
    rename_file, text_path,
};
use crate::model::{DEFAULT_AI_ASSIST_KEY, File, FileId, TabState};
use crate::presence::PresenceDisplay;
use crate::workspace::{Action, EditorState, TreeRow, Workspace, build_file_tree, visible_rows};

use super::components::{
    ClickKind, ClickTarget, ClickTracker, CreateFileForm, Handled, ItemEffect, ItemMachine,
    ItemState, KeyBinding, TabEvent, TabProps,
};
use super::editor_buffer::EditorBuffer;
use super::modal;
use super::view::RenderCtx;

mod ai_actions;
mod editor_actions;
mod event_loop;
mod layout;
mod lifecycle;
mod messages;
mod modal_types;
mod mouse;
mod render;
mod runtime;
mod sidebar_actions;
mod tab_actions;
mod time_utils;

use self::layout::Panes;
pub(super) use self::modal_types::{Modal, ModalKind};
pub(super) use self::runtime::run;
use self::time_utils::now_ts;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Focus {
    Sidebar,
    Tabs,
    Editor,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Tabs,
            Focus::Tabs => Focus::Editor,
            Focus::Editor => Focus::Sidebar,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Editor,
            Focus::Tabs => Focus::Sidebar,
            Focus::Editor => Focus::Tabs,
        }
    }
}

/// Work queued for the next loop turn instead of being handled inline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum UiMessage {
    PresenceChanged,
    DocChanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum StatusKind {
    Info,
    Error,
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct StatusEntry {
    pub(in crate::tui_shell) ts: String,
    pub(in crate::tui_shell) kind: StatusKind,
    pub(in crate::tui_shell) text: String,
}

/// Sidebar selection plus the interaction state of the selected row, keyed by
/// the row's path.
#[derive(Debug, Default)]
pub(in crate::tui_shell) struct SidebarState {
    pub(in crate::tui_shell) selected: usize,
    pub(in crate::tui_shell) scroll: usize,
    pub(in crate::tui_shell) item: Option<(String, ItemMachine)>,
}

impl SidebarState {
    pub(in crate::tui_shell) fn item_for(&self, path: &str) -> Option<&ItemMachine> {
        match &self.item {
            Some((p, item)) if p == path => Some(item),
            _ => None,
        }
    }
}

pub(super) struct App {
    pub(super) workspace: Workspace,
    pub(super) doc: LocalDoc,
    seen_version: u64,

    pub(super) editor: EditorState,
    pub(super) focus: Focus,
    pub(super) sidebar: SidebarState,
    pub(super) tab_cursor: usize,
    pub(super) buffer: EditorBuffer,

    /// Exists only while a file is mounted in the editor.
    pub(super) presence: Option<PresenceDisplay>,

    pub(super) ai: Option<AiAssistClient>,
    /// None only when neither the configured nor the default binding parses.
    pub(super) ai_key: Option<KeyBinding>,

    pub(super) modal: Option<Modal>,
    messages: VecDeque<UiMessage>,
    pub(super) status: Option<StatusEntry>,
    clicks: ClickTracker,
    last_area: Rect,

    pub(super) needs_redraw: bool,
    pub(super) quit: bool,

    _presence_feed: Option<JoinHandle<()>>,
}

impl App {
    pub(super) fn active_file(&self) -> Option<(&FileId, &File)> {
        let id = self.editor.active_file_id.as_ref()?;
        self.doc.data().file(id).map(|f| (id, f))
    }

    pub(super) fn sidebar_rows(&self) -> Vec<TreeRow> {
        let tree = build_file_tree(&self.doc.data().files);
        visible_rows(&tree, |p| self.editor.is_directory_open(p))
    }

    pub(super) fn tab_props(&self) -> Vec<TabProps> {
        self.editor
            .tab_list
            .iter()
            .map(|tab| {
                let name = self
                    .doc
                    .data()
                    .file(&tab.file_id)
                    .map(|f| f.name.as_str())
                    .unwrap_or("?");
                TabProps::new(tab, self.editor.active_file_id.as_ref(), name)
            })
            .collect()
    }

    /// Applies an editor action and remounts the editor when the active file
    /// changed.
    pub(super) fn dispatch(&mut self, action: Action) {
        let before = self.editor.active_file_id.clone();
        self.editor.dispatch(action);
        if self.editor.active_file_id != before {
            self.mount_active();
        }
        self.clamp_tab_cursor();
        self.needs_redraw = true;
    }

    fn mount_active(&mut self) {
        let active = self.editor.active_file_id.clone();
        self.buffer.open(active.clone());
        match active {
            Some(id) => {
                let path = text_path(&id);
                match self.presence.as_mut() {
                    Some(p) => p.switch_path(path),
                    None => self.presence = Some(PresenceDisplay::new(path)),
                }
                if let Some(i) = self.editor.tab_list.iter().position(|t| t.file_id == id) {
                    self.tab_cursor = i;
                }
            }
            None => {
                if self.presence.take().is_some() {
                    tracing::debug!("editor unmounted; presence torn down");
                }
            }
        }
    }

    fn clamp_tab_cursor(&mut self) {
        self.tab_cursor = self
            .tab_cursor
            .min(self.editor.tab_list.len().saturating_sub(1));
    }

    /// Keeps the row machine attached to the selected row, resetting it when
    /// the selection moved to a different path.
    pub(super) fn sync_sidebar_item(&mut self) {
        let rows = self.sidebar_rows();
        let Some(last) = rows.len().checked_sub(1) else {
            self.sidebar.selected = 0;
            self.sidebar.item = None;
            return;
        };
        self.sidebar.selected = self.sidebar.selected.min(last);
        let row = &rows[self.sidebar.selected];
        let same = matches!(&self.sidebar.item, Some((path, _)) if *path == row.path);
        if same {
            if let Some((_, item)) = self.sidebar.item.as_mut() {
                item.pointer_enter();
            }
        } else {
            let mut item = ItemMachine::new(&row.name, row.is_directory());
            item.pointer_enter();
            self.sidebar.item = Some((row.path.clone(), item));
        }
    }

    pub(super) fn selected_row(&self) -> Option<TreeRow> {
        self.sidebar_rows().into_iter().nth(self.sidebar.selected)
    }

    pub(super) fn push_status(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Info, text.into());
    }

    pub(super) fn push_error(&mut self, text: impl Into<String>) {
        self.set_status(StatusKind::Error, text.into());
    }

    fn set_status(&mut self, kind: StatusKind, text: String) {
        match kind {
            StatusKind::Info => tracing::info!(status = %text),
            StatusKind::Error => tracing::warn!(status = %text),
        }
        self.status = Some(StatusEntry {
            ts: now_ts(),
            kind,
            text,
        });
        self.needs_redraw = true;
    }

    pub(super) fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
        self.needs_redraw = true;
    }

    pub(super) fn close_modal(&mut self) {
        self.modal = None;
        self.needs_redraw = true;
    }

    pub(super) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    /// Collaborators currently shown in the open file.
    pub(super) fn collaborator_count(&self) -> usize {
        self.presence.as_ref().map(|p| p.state().len()).unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod app_tests;
