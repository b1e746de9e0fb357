use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crossterm::event::{KeyCode, KeyEvent};

fn centered(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(6).clamp(20, max_w).min(area.width);
    let h = area.height.saturating_sub(6).clamp(6, max_h).min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect {
        x,
        y,
        width: w,
        height: h,
    }
}

pub(super) fn draw_modal(frame: &mut ratatui::Frame, modal: &super::Modal) {
    let box_area = match &modal.kind {
        super::ModalKind::Help { .. } => centered(frame.area(), 70, 30),
        super::ModalKind::CreateFile { .. } => centered(frame.area(), 60, 9),
    };

    frame.render_widget(Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal.title());
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    match &modal.kind {
        super::ModalKind::Help { lines } => {
            let lines: Vec<Line> = lines.iter().map(|s| Line::from(s.as_str())).collect();
            let scroll = modal.scroll.min(lines.len().saturating_sub(1)) as u16;
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                inner,
            );
        }

        super::ModalKind::CreateFile { form } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(1),
                    Constraint::Min(0),
                ])
                .split(inner);

            frame.render_widget(
                Paragraph::new(form.input.buf.as_str())
                    .block(Block::default().borders(Borders::ALL).title("File name")),
                parts[0],
            );
            frame.set_cursor_position((parts[0].x + 1 + form.input.cursor as u16, parts[0].y + 1));

            if let Some(problem) = form.problem().filter(|_| !form.name().is_empty()) {
                frame.render_widget(
                    Paragraph::new(problem).style(Style::default().fg(Color::Red)),
                    parts[1],
                );
            }

            let create_style = if form.can_submit() {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let buttons = Line::from(vec![
                Span::styled("[Enter] Create", create_style),
                Span::raw("   "),
                Span::styled("[Esc] Cancel", Style::default().fg(Color::Gray)),
            ]);
            frame.render_widget(Paragraph::new(buttons), parts[2]);
        }
    }
}

pub(super) fn draw_confirm_delete(frame: &mut ratatui::Frame, name: &str, is_directory: bool) {
    let box_area = centered(frame.area(), 50, 6);
    frame.render_widget(Clear, box_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Delete")
        .border_style(Style::default().fg(Color::Red));
    frame.render_widget(block.clone(), box_area);

    let what = if is_directory { "directory" } else { "file" };
    let lines = vec![
        Line::from(format!("Delete {} `{}`?", what, name)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] Delete", Style::default().fg(Color::Red)),
            Span::raw("   "),
            Span::styled("[n] Cancel", Style::default().fg(Color::Gray)),
        ]),
    ];
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        block.inner(box_area),
    );
}

pub(super) fn handle_modal_key(app: &mut super::App, key: KeyEvent) {
    enum ModalAction {
        None,
        Close,
        CreateFile(String),
    }

    let action = {
        let Some(m) = app.modal_mut() else {
            return;
        };

        match &mut m.kind {
            super::ModalKind::Help { lines } => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('q') => {
                    ModalAction::Close
                }
                KeyCode::Up => {
                    m.scroll = m.scroll.saturating_sub(1);
                    ModalAction::None
                }
                KeyCode::Down => {
                    if m.scroll < lines.len().saturating_sub(1) {
                        m.scroll += 1;
                    }
                    ModalAction::None
                }
                _ => ModalAction::None,
            },
            super::ModalKind::CreateFile { form } => match key.code {
                KeyCode::Esc => ModalAction::Close,
                // Disabled while the name is invalid.
                KeyCode::Enter => match form.submit() {
                    Some(name) => ModalAction::CreateFile(name),
                    None => ModalAction::None,
                },
                _ => {
                    form.input.handle_key(key);
                    form.conflict = None;
                    ModalAction::None
                }
            },
        }
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::CreateFile(name) => {
            if app.create_file_named(&name) {
                app.close_modal();
            }
        }
    }
}
