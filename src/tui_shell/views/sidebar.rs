use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::workspace::{RowKind, TreeRow};

use super::super::components::ItemMachine;
use super::super::{Focus, RenderCtx, View, render_pane_chrome};

const UTILS: &str = " ✎ ✗";
const UTILS_WIDTH: u16 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum UtilIcon {
    Edit,
    Trash,
}

/// Which row action icon sits under column `x`, when the row shows them.
pub(in crate::tui_shell) fn util_icon_at(inner: Rect, x: u16) -> Option<UtilIcon> {
    let right = inner.x + inner.width;
    if inner.width < UTILS_WIDTH + 1 || x >= right {
        return None;
    }
    match right - x {
        3 | 4 => Some(UtilIcon::Edit),
        1 | 2 => Some(UtilIcon::Trash),
        _ => None,
    }
}

pub(in crate::tui_shell) struct SidebarView<'a> {
    pub(in crate::tui_shell) rows: &'a [TreeRow],
    pub(in crate::tui_shell) selected: usize,
    pub(in crate::tui_shell) scroll: usize,
    /// Machine of the selected row.
    pub(in crate::tui_shell) item: Option<&'a ItemMachine>,
}

impl SidebarView<'_> {
    fn row_line(&self, idx: usize, row: &TreeRow, width: usize, focused: bool) -> Line<'static> {
        let selected = idx == self.selected;
        let item = self.item.filter(|_| selected);

        let icon = match row.kind {
            RowKind::Dir { open: true } => "▾ ",
            RowKind::Dir { open: false } => "▸ ",
            RowKind::File => "  ",
        };
        let mut spans = vec![
            Span::raw("  ".repeat(row.depth)),
            Span::styled(icon, Style::default().fg(Color::DarkGray)),
        ];
        let mut used = row.depth * 2 + 2;

        match item.and_then(|i| i.rename_input()) {
            Some(input) => {
                used += input.buf.chars().count();
                spans.push(Span::styled(
                    input.buf.clone(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::UNDERLINED),
                ));
            }
            None => {
                let style = if row.is_directory() {
                    Style::default().fg(Color::Blue)
                } else {
                    Style::default()
                };
                used += row.name.chars().count();
                spans.push(Span::styled(row.name.clone(), style));
            }
        }

        if item.is_some_and(|i| i.shows_utils()) && focused {
            let pad = width.saturating_sub(used + UTILS_WIDTH as usize);
            spans.push(Span::raw(" ".repeat(pad)));
            let utils = if item.is_some_and(|i| i.can_rename()) {
                UTILS.to_string()
            } else {
                "   ✗".to_string()
            };
            spans.push(Span::styled(utils, Style::default().fg(Color::Gray)));
        }

        let mut line = Line::from(spans);
        if selected {
            let bg = if focused { Color::DarkGray } else { Color::Black };
            line = line.style(Style::default().bg(bg));
        }
        line
    }
}

impl View for SidebarView<'_> {
    fn title(&self) -> String {
        "Files".to_string()
    }

    fn pane(&self) -> Focus {
        Focus::Sidebar
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let focused = ctx.focus == self.pane();
        let inner = render_pane_chrome(frame, &self.title(), focused, area);

        if self.rows.is_empty() {
            frame.render_widget(
                Paragraph::new("(no files; n to create)")
                    .style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        }

        let width = inner.width as usize;
        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(inner.height as usize)
            .map(|(i, row)| self.row_line(i, row, width, focused))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);

        if let Some(input) = self.item.and_then(|i| i.rename_input()) {
            let row = &self.rows[self.selected.min(self.rows.len() - 1)];
            let y = inner.y + self.selected.saturating_sub(self.scroll) as u16;
            let x = inner.x + (row.depth * 2 + 2 + input.cursor) as u16;
            if y < inner.y + inner.height {
                frame.set_cursor_position((x.min(inner.x + inner.width), y));
            }
        }
    }
}
