use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::components::{TabEvent, TabProps};
use super::super::{Focus, RenderCtx, View};

const CLOSE: &str = "×";

fn tab_text(props: &TabProps) -> String {
    format!(" {} {} ", props.label, CLOSE)
}

/// Maps a click at column `x` on the tab bar to a tab and the event it fires.
pub(in crate::tui_shell) fn tab_hit(tabs: &[TabProps], area: Rect, x: u16) -> Option<(usize, TabEvent)> {
    let mut start = area.x as usize;
    let x = x as usize;
    for (i, props) in tabs.iter().enumerate() {
        let width = tab_text(props).chars().count();
        let end = start + width;
        if x >= start && x < end {
            // The close glyph and the space after it.
            let event = if x + 2 >= end {
                TabEvent::CloseClick
            } else {
                TabEvent::Click
            };
            return Some((i, event));
        }
        start = end + 1;
    }
    None
}

pub(in crate::tui_shell) struct TabsView<'a> {
    pub(in crate::tui_shell) tabs: &'a [TabProps],
    pub(in crate::tui_shell) cursor: usize,
}

impl View for TabsView<'_> {
    fn title(&self) -> String {
        "Tabs".to_string()
    }

    fn pane(&self) -> Focus {
        Focus::Tabs
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let focused = ctx.focus == self.pane();
        if self.tabs.is_empty() {
            let style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            frame.render_widget(Paragraph::new(" (no open tabs)").style(style), area);
            return;
        }

        let mut spans = Vec::new();
        for (i, props) in self.tabs.iter().enumerate() {
            let mut style = Style::default().fg(Color::Gray);
            if props.is_active {
                style = style.fg(Color::White).bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            // Transient tabs are shown in italics until pinned.
            if props.is_transient {
                style = style.add_modifier(Modifier::ITALIC);
            }
            if focused && i == self.cursor {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            spans.push(Span::styled(tab_text(props), style));
            spans.push(Span::raw("│"));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
