use std::path::PathBuf;

use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use serde_json::json;

use super::*;
use crate::model::{AppConfig, SessionId, VzContent};
use crate::presence::DecorationKind;

fn app_with(files: &[(&str, &str)]) -> App {
    app_with_config(
        files,
        AppConfig {
            server_url: "http://127.0.0.1:9".to_string(),
            ..AppConfig::default()
        },
    )
}

fn app_with_config(files: &[(&str, &str)], config: AppConfig) -> App {
    let mut content = VzContent::default();
    for (name, text) in files {
        content.files.insert(
            FileId::for_path(name),
            File {
                name: name.to_string(),
                text: text.to_string(),
            },
        );
    }
    let ws = Workspace {
        root: PathBuf::from("."),
        config,
    };
    App::new(ws, LocalDoc::new(content))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// One loop turn without a terminal.
fn settle(app: &mut App) {
    app.pump_doc();
    app.pump_presence();
    app.drain_messages();
}

fn click(app: &mut App, column: u16, row: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    });
}

#[test]
fn enter_opens_transient_tab_and_p_pins() {
    let mut app = app_with(&[("a.txt", "alpha"), ("b.txt", "beta")]);
    let a = FileId::for_path("a.txt");
    let b = FileId::for_path("b.txt");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.editor.tab_list, vec![TabState::transient(a.clone())]);
    assert_eq!(app.editor.active_file_id.as_ref(), Some(&a));
    assert_eq!(app.presence.as_ref().map(|p| p.path().clone()), Some(text_path(&a)));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.editor.tab_list, vec![TabState::transient(b.clone())]);

    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.editor.tab_list, vec![TabState::persistent(b)]);
    assert_eq!(app.focus, Focus::Editor);
}

#[test]
fn presence_redraw_is_deferred_to_the_next_turn() {
    let mut app = app_with(&[("a.txt", "alpha"), ("b.txt", "beta")]);
    let a = FileId::for_path("a.txt");
    press(&mut app, KeyCode::Enter);

    let sender = app.doc.presence_sender();
    assert!(sender.send(
        SessionId::from("s1"),
        Some(json!({ "start": ["files", a.as_str(), "text", 1], "end": ["files", a.as_str(), "text", 3] })),
    ));

    app.needs_redraw = false;
    app.pump_presence();
    assert!(!app.needs_redraw);
    assert_eq!(app.messages.front(), Some(&UiMessage::PresenceChanged));

    app.drain_messages();
    assert!(app.needs_redraw);
    let decorations = app.presence.as_ref().map(|p| p.decorations().clone());
    let d: Vec<_> = decorations.iter().flat_map(|s| s.iter().cloned()).collect();
    assert_eq!(d.len(), 1);
    assert_eq!((d[0].from, d[0].to, d[0].kind), (1, 3, DecorationKind::Highlight));
    assert_eq!(app.collaborator_count(), 1);
}

#[test]
fn switching_files_clears_presence_and_closing_last_tab_tears_it_down() {
    let mut app = app_with(&[("a.txt", "alpha"), ("b.txt", "beta")]);
    let a = FileId::for_path("a.txt");
    let b = FileId::for_path("b.txt");
    press(&mut app, KeyCode::Char('p'));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Sidebar);

    let sender = app.doc.presence_sender();
    sender.send(
        SessionId::from("s1"),
        Some(json!({ "start": ["files", a.as_str(), "text", 2], "end": ["files", a.as_str(), "text", 2] })),
    );
    settle(&mut app);
    assert_eq!(app.collaborator_count(), 1);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.editor.active_file_id.as_ref(), Some(&b));
    assert_eq!(app.presence.as_ref().map(|p| p.path().clone()), Some(text_path(&b)));
    assert_eq!(app.collaborator_count(), 0);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Tabs);
    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Char('x'));
    assert!(app.editor.tab_list.is_empty());
    assert!(app.editor.active_file_id.is_none());
    assert!(app.presence.is_none());
}

#[test]
fn rename_commits_on_enter_and_esc_cancels() {
    let mut app = app_with(&[("src/a.rs", "fn a() {}")]);
    let id = FileId::for_path("src/a.rs");

    // Expand `src`, select the file.
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);

    press(&mut app, KeyCode::Char('r'));
    ctrl(&mut app, 'u');
    type_str(&mut app, "b.rs");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.doc.data().file(&id).map(|f| f.name.as_str()), Some("src/a.rs"));

    press(&mut app, KeyCode::Char('r'));
    ctrl(&mut app, 'u');
    type_str(&mut app, "b.rs");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.doc.data().file(&id).map(|f| f.name.as_str()), Some("src/b.rs"));
}

#[test]
fn rename_under_a_dot_directory_keeps_its_parent() {
    let mut app = app_with(&[(".github/ci.yml", "on: push")]);
    let id = FileId::for_path(".github/ci.yml");
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);

    press(&mut app, KeyCode::Char('r'));
    ctrl(&mut app, 'u');
    type_str(&mut app, "build.yml");
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.doc.data().file(&id).map(|f| f.name.as_str()),
        Some(".github/build.yml")
    );

    // Leaves outside the create-dialog pattern are accepted too.
    press(&mut app, KeyCode::Char('r'));
    ctrl(&mut app, 'u');
    type_str(&mut app, "_app.yml");
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.doc.data().file(&id).map(|f| f.name.as_str()),
        Some(".github/_app.yml")
    );
}

#[test]
fn rename_onto_a_directory_is_refused() {
    let mut app = app_with(&[("a.txt", ""), ("src/b.rs", "")]);
    let id = FileId::for_path("a.txt");
    press(&mut app, KeyCode::Down);

    press(&mut app, KeyCode::Char('r'));
    ctrl(&mut app, 'u');
    type_str(&mut app, "src");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.doc.data().file(&id).map(|f| f.name.as_str()), Some("a.txt"));
    let status = app.status.as_ref().map(|s| (s.kind, s.text.clone()));
    assert_eq!(
        status,
        Some((
            StatusKind::Error,
            "cannot rename to `src`: `src` is a directory".to_string()
        ))
    );
}

#[test]
fn directory_rows_offer_no_rename() {
    let mut app = app_with(&[("src/a.rs", "")]);
    press(&mut app, KeyCode::Char('r'));
    let renaming = app.sidebar.item.as_ref().is_some_and(|(_, i)| i.is_renaming());
    assert!(!renaming);
}

#[test]
fn blank_rename_asks_for_delete_confirmation() {
    let mut app = app_with(&[("a.txt", "alpha"), ("b.txt", "beta")]);
    let a = FileId::for_path("a.txt");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.editor.tab_list.len(), 1);

    press(&mut app, KeyCode::Char('r'));
    ctrl(&mut app, 'u');
    press(&mut app, KeyCode::Enter);
    assert!(app.sidebar_confirming_delete());
    assert!(app.doc.data().file(&a).is_some());

    press(&mut app, KeyCode::Char('y'));
    settle(&mut app);
    assert!(app.doc.data().file(&a).is_none());
    assert!(app.editor.tab_list.is_empty());
    assert!(app.presence.is_none());
}

#[test]
fn deleting_a_directory_removes_its_files_and_tabs() {
    let mut app = app_with(&[("src/a.rs", ""), ("src/b.rs", ""), ("top.txt", "")]);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('p'));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Home);

    press(&mut app, KeyCode::Char('d'));
    assert!(app.sidebar_confirming_delete());
    press(&mut app, KeyCode::Char('n'));
    assert!(!app.sidebar_confirming_delete());
    assert_eq!(app.doc.data().files.len(), 3);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    settle(&mut app);
    let names: Vec<_> = app.doc.data().files.values().map(|f| f.name.clone()).collect();
    assert_eq!(names, vec!["top.txt".to_string()]);
    assert!(app.editor.tab_list.is_empty());
}

#[test]
fn create_dialog_blocks_invalid_names_and_opens_a_pinned_tab() {
    let mut app = app_with(&[("a.txt", "")]);
    ctrl(&mut app, 'n');
    type_str(&mut app, "new-");
    press(&mut app, KeyCode::Enter);
    assert!(app.modal.is_some());
    assert_eq!(app.doc.data().files.len(), 1);

    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "1.rs");
    press(&mut app, KeyCode::Enter);
    assert!(app.modal.is_none());

    let (id, _) = app.doc.data().find_by_name("new1.rs").map(|(id, f)| (id.clone(), f.clone())).unwrap();
    assert_eq!(app.editor.tab_list.last(), Some(&TabState::persistent(id.clone())));
    assert_eq!(app.editor.active_file_id, Some(id.clone()));
    assert_eq!(app.focus, Focus::Editor);

    type_str(&mut app, "hi");
    press(&mut app, KeyCode::Enter);
    settle(&mut app);
    assert_eq!(app.doc.data().file(&id).map(|f| f.text.as_str()), Some("hi\n"));
    assert_eq!(app.buffer.cursor, 3);
}

#[test]
fn create_dialog_stays_open_on_a_clashing_name() {
    let mut app = app_with(&[("src/a.rs", "")]);
    ctrl(&mut app, 'n');
    ctrl(&mut app, 'u');
    type_str(&mut app, "src");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.doc.data().files.len(), 1);
    match app.modal.as_ref().map(|m| &m.kind) {
        Some(ModalKind::CreateFile { form }) => {
            assert_eq!(form.name(), "src");
            assert_eq!(form.problem().as_deref(), Some("`src` is a directory"));
        }
        other => panic!("unexpected modal {:?}", other),
    }

    // Editing clears the clash.
    type_str(&mut app, "2");
    press(&mut app, KeyCode::Enter);
    assert!(app.modal.is_none());
    assert!(app.doc.data().find_by_name("src2").is_some());
}

#[test]
fn create_dialog_prefills_the_selected_directory() {
    let mut app = app_with(&[("src/a.rs", "")]);
    press(&mut app, KeyCode::Char('n'));
    match app.modal.as_ref().map(|m| &m.kind) {
        Some(ModalKind::CreateFile { form }) => assert_eq!(form.name(), "src/"),
        other => panic!("unexpected modal {:?}", other),
    }
    press(&mut app, KeyCode::Esc);
    assert!(app.modal.is_none());
}

#[test]
fn double_clicking_a_tab_pins_it() {
    let mut app = app_with(&[("a.txt", "alpha")]);
    app.before_draw(Rect::new(0, 0, 100, 30));
    press(&mut app, KeyCode::Enter);
    assert!(app.editor.tab_list[0].is_transient);

    let tabs = Panes::compute(Rect::new(0, 0, 100, 30)).tabs;
    click(&mut app, tabs.x + 2, tabs.y);
    assert!(app.editor.tab_list[0].is_transient);
    click(&mut app, tabs.x + 2, tabs.y);
    assert!(!app.editor.tab_list[0].is_transient);
    assert_eq!(app.focus, Focus::Tabs);
}

#[test]
fn clicking_a_sidebar_row_opens_it() {
    let mut app = app_with(&[("a.txt", "alpha"), ("b.txt", "beta")]);
    app.before_draw(Rect::new(0, 0, 100, 30));
    let inner = Panes::compute(Rect::new(0, 0, 100, 30)).sidebar_inner();

    click(&mut app, inner.x + 2, inner.y + 1);
    assert_eq!(app.sidebar.selected, 1);
    assert_eq!(
        app.editor.tab_list,
        vec![TabState::transient(FileId::for_path("b.txt"))]
    );
}

#[test]
fn ai_assist_trigger_needs_the_editor_and_an_open_file() {
    let mut app = app_with(&[("a.txt", "alpha")]);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Editor);
    ctrl(&mut app, 'm');
    assert_eq!(app.status.as_ref().map(|s| s.kind), Some(StatusKind::Error));
    assert!(app.ai.as_ref().and_then(|c| c.latest()).is_none());

    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.focus, Focus::Editor);
    ctrl(&mut app, 'm');
    let status = app.status.as_ref().map(|s| s.text.clone()).unwrap_or_default();
    assert!(status.contains("#1 sent to http://127.0.0.1:9/ai-assist"), "{}", status);
}

#[test]
fn legacy_terminal_warns_about_a_control_ai_key() {
    let mut app = app_with(&[("a.txt", "")]);
    app.status = None;
    app.note_keyboard_enhancement(true);
    assert!(app.status.is_none());

    app.note_keyboard_enhancement(false);
    let status = app.status.as_ref().map(|s| (s.kind, s.text.clone()));
    assert!(
        status.as_ref().is_some_and(|(kind, text)| *kind == StatusKind::Error
            && text.contains("ctrl-m")
            && text.contains("ai_assist_key")),
        "{:?}",
        status
    );

    let mut app = app_with_config(
        &[("a.txt", "")],
        AppConfig {
            ai_assist_key: "alt-enter".to_string(),
            ..AppConfig::default()
        },
    );
    app.status = None;
    app.note_keyboard_enhancement(false);
    assert!(app.status.is_none());
}

#[test]
fn bad_ai_key_falls_back_to_the_default() {
    let app = app_with_config(
        &[("a.txt", "")],
        AppConfig {
            ai_assist_key: "hyper-x".to_string(),
            ..AppConfig::default()
        },
    );
    assert_eq!(app.ai_key, KeyBinding::parse(DEFAULT_AI_ASSIST_KEY).ok());
    let status = app.status.as_ref().map(|s| s.text.clone()).unwrap_or_default();
    assert!(status.contains("bad ai_assist_key"), "{}", status);
}
