use super::tab::tab_label;
use super::*;
use crate::model::{FileId, TabState};
use crate::workspace::{Action, EditorState};

#[test]
fn labels_keep_parent_folder() {
    assert_eq!(tab_label("index.js"), "index.js");
    assert_eq!(tab_label("src/index.js"), "src/index.js");
    assert_eq!(tab_label("app/src/index.js"), "src/index.js");
}

#[test]
fn props_project_state() {
    let tab = TabState::transient(FileId::from("a"));
    let active = FileId::from("a");
    let props = TabProps::new(&tab, Some(&active), "lib/a.rs");
    assert!(props.is_transient);
    assert!(props.is_active);
    assert_eq!(props.label, "lib/a.rs");

    let other = TabProps::new(&tab, None, "a.rs");
    assert!(!other.is_active);
}

#[test]
fn events_map_to_actions() {
    let props = TabProps::new(&TabState::transient(FileId::from("a")), None, "a");
    assert_eq!(props.on(TabEvent::Click), Action::SetActiveFileId(FileId::from("a")));
    assert_eq!(
        props.on(TabEvent::DoubleClick),
        Action::OpenTab(TabState {
            file_id: FileId::from("a"),
            is_transient: false
        })
    );
    assert_eq!(
        props.on(TabEvent::CloseClick),
        Action::CloseTabs(vec![FileId::from("a")])
    );
}

#[test]
fn double_click_after_many_single_clicks_promotes_once() {
    let mut state = EditorState::default();
    state.dispatch(Action::OpenTab(TabState::persistent(FileId::from("b"))));
    state.dispatch(Action::OpenTab(TabState::transient(FileId::from("a"))));

    let mut tracker = ClickTracker::default();
    let start = std::time::Instant::now();
    let mut dispatched = Vec::new();
    // Three slow clicks, then a quick pair.
    let times = [0u64, 1000, 2000, 3000, 3100];
    for ms in times {
        let at = start + std::time::Duration::from_millis(ms);
        let tab = state.tab_list.iter().find(|t| t.file_id.as_str() == "a").unwrap().clone();
        let props = TabProps::new(&tab, state.active_file_id.as_ref(), "a");
        let event = match tracker.register_at(ClickTarget::Tab(FileId::from("a")), at) {
            ClickKind::Single => TabEvent::Click,
            ClickKind::Double => TabEvent::DoubleClick,
        };
        let action = props.on(event);
        dispatched.push(action.clone());
        state.dispatch(action);
    }

    let promotions: Vec<&Action> = dispatched
        .iter()
        .filter(|a| matches!(a, Action::OpenTab(_)))
        .collect();
    assert_eq!(
        promotions,
        vec![&Action::OpenTab(TabState::persistent(FileId::from("a")))]
    );
    assert!(state.tab_list.iter().all(|t| !t.is_transient));
}
