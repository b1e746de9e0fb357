use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};

use time::OffsetDateTime;

#[derive(Clone, Copy, Debug)]
pub(super) struct RenderCtx {
    pub(super) now: OffsetDateTime,
    pub(super) focus: super::Focus,
}

/// A pane of the main screen, borrowed from app state for one frame.
pub(super) trait View {
    fn title(&self) -> String;

    fn pane(&self) -> super::Focus;

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx);
}

pub(super) fn pane_block(focused: bool) -> Block<'static> {
    let color = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

/// Area left for content once the pane border is drawn.
pub(super) fn pane_inner(area: Rect) -> Rect {
    pane_block(false).inner(area)
}

pub(super) fn render_pane_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    focused: bool,
    area: Rect,
) -> Rect {
    let color = if focused { Color::Yellow } else { Color::Gray };
    let header = Line::from(vec![Span::styled(
        format!(" {} ", title),
        Style::default().fg(color),
    )]);
    let outer = pane_block(focused).title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}
