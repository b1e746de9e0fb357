use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::File;
use crate::presence::DecorationSet;

use super::super::editor_buffer::{EditorBuffer, line_col};
use super::super::{Focus, RenderCtx, View, render_pane_chrome};

const CARET_AT_EOL: &str = "▏";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Plain,
    Highlight,
    Caret,
}

impl Mark {
    fn at(decorations: Option<&DecorationSet>, offset: usize) -> Self {
        match decorations {
            Some(d) if d.has_caret_at(offset) => Mark::Caret,
            Some(d) if d.is_highlighted(offset) => Mark::Highlight,
            _ => Mark::Plain,
        }
    }

    fn style(self) -> Style {
        match self {
            Mark::Plain => Style::default(),
            Mark::Highlight => Style::default().bg(Color::Rgb(90, 80, 20)),
            Mark::Caret => Style::default().bg(Color::Yellow).fg(Color::Black),
        }
    }
}

/// Columns taken by line numbers plus one space.
pub(in crate::tui_shell) fn gutter_width(text: &str) -> usize {
    text.split('\n').count().to_string().len() + 1
}

/// Visible lines with remote selections and carets painted in.
pub(in crate::tui_shell) fn decorated_lines(
    text: &str,
    decorations: Option<&DecorationSet>,
    scroll: usize,
    height: usize,
) -> Vec<Line<'static>> {
    let gutter = gutter_width(text);
    let mut out = Vec::new();
    let mut offset = 0usize;
    for (n, line) in text.split('\n').enumerate() {
        let len = line.chars().count();
        if n >= scroll + height {
            break;
        }
        if n < scroll {
            offset += len + 1;
            continue;
        }

        let mut spans = vec![Span::styled(
            format!("{:>w$} ", n + 1, w = gutter - 1),
            Style::default().fg(Color::DarkGray),
        )];
        let mut run = String::new();
        let mut run_mark = Mark::Plain;
        for (i, c) in line.chars().enumerate() {
            let mark = Mark::at(decorations, offset + i);
            if mark != run_mark && !run.is_empty() {
                spans.push(Span::styled(std::mem::take(&mut run), run_mark.style()));
            }
            run_mark = mark;
            run.push(c);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, run_mark.style()));
        }
        if Mark::at(decorations, offset + len) == Mark::Caret {
            spans.push(Span::styled(CARET_AT_EOL, Style::default().fg(Color::Yellow)));
        }

        out.push(Line::from(spans));
        offset += len + 1;
    }
    out
}

pub(in crate::tui_shell) struct EditorView<'a> {
    pub(in crate::tui_shell) file: Option<&'a File>,
    pub(in crate::tui_shell) buffer: &'a EditorBuffer,
    pub(in crate::tui_shell) decorations: Option<&'a DecorationSet>,
}

impl View for EditorView<'_> {
    fn title(&self) -> String {
        match self.file {
            Some(f) => f.name.clone(),
            None => "Editor".to_string(),
        }
    }

    fn pane(&self) -> Focus {
        Focus::Editor
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let focused = ctx.focus == self.pane();
        let inner = render_pane_chrome(frame, &self.title(), focused, area);

        let Some(file) = self.file else {
            frame.render_widget(
                Paragraph::new("Open a file from the sidebar.")
                    .style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        };

        let lines = decorated_lines(
            &file.text,
            self.decorations,
            self.buffer.scroll,
            inner.height as usize,
        );
        frame.render_widget(Paragraph::new(lines), inner);

        if focused {
            let (line, col) = line_col(&file.text, self.buffer.cursor);
            if line >= self.buffer.scroll {
                let y = inner.y as usize + line - self.buffer.scroll;
                let x = inner.x as usize + gutter_width(&file.text) + col;
                if y < (inner.y + inner.height) as usize && x < (inner.x + inner.width) as usize {
                    frame.set_cursor_position((x as u16, y as u16));
                }
            }
        }
    }
}
