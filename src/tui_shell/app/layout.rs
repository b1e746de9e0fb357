use super::*;

use crate::tui_shell::view::pane_inner;

const SIDEBAR_WIDTH: u16 = 32;

/// Screen regions for one frame. Rendering and mouse hit-testing both use it.
#[derive(Clone, Copy, Debug, Default)]
pub(in crate::tui_shell) struct Panes {
    pub(in crate::tui_shell) header: Rect,
    pub(in crate::tui_shell) sidebar: Rect,
    pub(in crate::tui_shell) tabs: Rect,
    pub(in crate::tui_shell) editor: Rect,
    pub(in crate::tui_shell) status: Rect,
}

impl Panes {
    pub(in crate::tui_shell) fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(rows[1]);
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(cols[1]);
        Self {
            header: rows[0],
            sidebar: cols[0],
            tabs: main[0],
            editor: main[1],
            status: rows[2],
        }
    }

    pub(in crate::tui_shell) fn sidebar_inner(&self) -> Rect {
        pane_inner(self.sidebar)
    }

    pub(in crate::tui_shell) fn editor_inner(&self) -> Rect {
        pane_inner(self.editor)
    }
}

pub(in crate::tui_shell) fn contains(r: Rect, x: u16, y: u16) -> bool {
    x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height
}

impl App {
    /// Scroll adjustments that depend on the frame size.
    pub(in crate::tui_shell) fn before_draw(&mut self, area: Rect) {
        self.last_area = area;
        let panes = Panes::compute(area);

        let height = panes.sidebar_inner().height as usize;
        if height > 0 {
            let sel = self.sidebar.selected;
            if sel < self.sidebar.scroll {
                self.sidebar.scroll = sel;
            } else if sel >= self.sidebar.scroll + height {
                self.sidebar.scroll = sel + 1 - height;
            }
        }

        if let Some(file) = self
            .editor
            .active_file_id
            .as_ref()
            .and_then(|id| self.doc.data().file(id))
        {
            self.buffer
                .ensure_visible(&file.text, panes.editor_inner().height as usize);
        }
    }
}
