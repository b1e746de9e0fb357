use super::layout::contains;
use super::*;

use crate::tui_shell::views::{UtilIcon, gutter_width, tab_hit, util_icon_at};

impl App {
    pub(in crate::tui_shell) fn handle_mouse(&mut self, m: MouseEvent) {
        if self.modal.is_some() || self.sidebar_confirming_delete() {
            return;
        }
        let MouseEventKind::Down(MouseButton::Left) = m.kind else {
            return;
        };
        let panes = Panes::compute(self.last_area);
        let (x, y) = (m.column, m.row);

        if contains(panes.sidebar_inner(), x, y) {
            self.click_sidebar(panes.sidebar_inner(), x, y);
        } else if contains(panes.tabs, x, y) {
            self.click_tabs(panes.tabs, x);
        } else if contains(panes.editor_inner(), x, y) {
            self.click_editor(panes.editor_inner(), x, y);
        }
        self.needs_redraw = true;
    }

    fn click_sidebar(&mut self, inner: Rect, x: u16, y: u16) {
        let idx = self.sidebar.scroll + (y - inner.y) as usize;
        let Some(row) = self.sidebar_rows().into_iter().nth(idx) else {
            return;
        };
        self.set_focus(Focus::Sidebar);
        if idx != self.sidebar.selected {
            self.blur_sidebar_item();
            if self.sidebar_confirming_delete() {
                return;
            }
            self.select_row(idx);
        }

        let shows_utils = self
            .sidebar
            .item_for(&row.path)
            .is_some_and(|item| item.shows_utils());
        if shows_utils {
            if let Some(icon) = util_icon_at(inner, x) {
                let propagate = self.item_interaction(|item| match icon {
                    UtilIcon::Edit => item.edit_icon_click(),
                    UtilIcon::Trash => item.trash_icon_click(),
                });
                if !propagate {
                    return;
                }
            }
        }

        let kind = self.clicks.register(ClickTarget::Row(row.path));
        self.row_click(kind);
    }

    fn click_tabs(&mut self, area: Rect, x: u16) {
        let props = self.tab_props();
        let Some((idx, event)) = tab_hit(&props, area, x) else {
            return;
        };
        self.set_focus(Focus::Tabs);
        let event = match event {
            TabEvent::Click => match self.clicks.register(ClickTarget::Tab(props[idx].file_id.clone())) {
                ClickKind::Single => TabEvent::Click,
                ClickKind::Double => TabEvent::DoubleClick,
            },
            other => other,
        };
        self.tab_event(idx, event);
    }

    fn click_editor(&mut self, inner: Rect, x: u16, y: u16) {
        self.set_focus(Focus::Editor);
        let Some(file) = self
            .editor
            .active_file_id
            .as_ref()
            .and_then(|id| self.doc.data().file(id))
        else {
            return;
        };
        let line = self.buffer.scroll + (y - inner.y) as usize;
        let col = ((x - inner.x) as usize).saturating_sub(gutter_width(&file.text));
        self.buffer.click_at(&file.text, line, col);
    }
}
