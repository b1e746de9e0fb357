use super::*;

use crate::tui_shell::View;
use crate::tui_shell::views::{EditorView, SidebarView, TabsView};

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let panes = Panes::compute(frame.area());
    let ctx = RenderCtx {
        now: OffsetDateTime::now_utc(),
        focus: app.focus,
    };

    // Header
    let mut spans = vec![
        Span::styled(" cocode ", Style::default().fg(Color::Black).bg(Color::White)),
        Span::raw("  "),
        Span::raw(app.workspace.root.display().to_string()),
    ];
    if let Some(user) = app.workspace.config.username.as_deref() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(user.to_string(), Style::default().fg(Color::Green)));
    }
    let here = app.collaborator_count();
    if here > 0 {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} here", here),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), panes.header);

    // Panes
    let rows = app.sidebar_rows();
    SidebarView {
        rows: &rows,
        selected: app.sidebar.selected,
        scroll: app.sidebar.scroll,
        item: app.sidebar.item.as_ref().map(|(_, item)| item),
    }
    .render(frame, panes.sidebar, &ctx);

    let tabs = app.tab_props();
    TabsView {
        tabs: &tabs,
        cursor: app.tab_cursor,
    }
    .render(frame, panes.tabs, &ctx);

    EditorView {
        file: app.active_file().map(|(_, f)| f),
        buffer: &app.buffer,
        decorations: app.presence.as_ref().map(|p| p.decorations()),
    }
    .render(frame, panes.editor, &ctx);

    draw_status(frame, app, panes.status, &ctx);

    // Overlays
    if let Some((path, item)) = app.sidebar.item.as_ref() {
        if item.is_confirming_delete() {
            modal::draw_confirm_delete(frame, path, item.is_directory());
        }
    }
    if let Some(m) = &app.modal {
        modal::draw_modal(frame, m);
    }
}

fn draw_status(frame: &mut ratatui::Frame, app: &App, area: Rect, ctx: &RenderCtx) {
    let mut lines = Vec::new();
    match &app.status {
        Some(entry) => {
            let style = match entry.kind {
                StatusKind::Info => Style::default().fg(Color::White),
                StatusKind::Error => Style::default().fg(Color::Red),
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", time_utils::fmt_ts_status(&entry.ts, ctx.now)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.text.clone(), style),
            ]));
        }
        None => lines.push(Line::from("")),
    }
    lines.push(Line::from(Span::styled(
        hints(app),
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
    )));
    frame.render_widget(Paragraph::new(lines), area);
}

fn hints(app: &App) -> String {
    if app.modal.is_some() {
        return "enter: confirm | esc: close".to_string();
    }
    match app.focus {
        Focus::Sidebar => match app.sidebar.item.as_ref().map(|(_, i)| i.state()) {
            Some(ItemState::Renaming(_)) => "enter: rename | esc: cancel".to_string(),
            Some(ItemState::ConfirmingDelete) => "y: delete | n: cancel".to_string(),
            _ => "enter: open | p: pin | r: rename | d: delete | n: new | tab: next pane | f1: help"
                .to_string(),
        },
        Focus::Tabs => "enter: activate | p: pin | x: close | tab: next pane".to_string(),
        Focus::Editor => match app.ai_key {
            Some(k) => format!("{}: AI assist | esc: files | tab: next pane", k),
            None => "esc: files | tab: next pane".to_string(),
        },
    }
}
