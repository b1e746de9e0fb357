use super::*;
use crate::model::{FileId, TabState};

fn ids(state: &EditorState) -> Vec<(&str, bool)> {
    state
        .tab_list
        .iter()
        .map(|t| (t.file_id.as_str(), t.is_transient))
        .collect()
}

#[test]
fn transient_open_replaces_previous_transient_tab() {
    let mut s = EditorState::default();
    s.dispatch(Action::OpenTab(TabState::persistent(FileId::from("a"))));
    s.dispatch(Action::OpenTab(TabState::transient(FileId::from("b"))));
    s.dispatch(Action::OpenTab(TabState::transient(FileId::from("c"))));
    assert_eq!(ids(&s), vec![("a", false), ("c", true)]);
    assert_eq!(s.active_file_id, Some(FileId::from("c")));
}

#[test]
fn persistent_open_promotes_but_transient_never_demotes() {
    let mut s = EditorState::default();
    s.dispatch(Action::OpenTab(TabState::transient(FileId::from("a"))));
    s.dispatch(Action::OpenTab(TabState::persistent(FileId::from("a"))));
    assert_eq!(ids(&s), vec![("a", false)]);

    s.dispatch(Action::OpenTab(TabState::transient(FileId::from("a"))));
    assert_eq!(ids(&s), vec![("a", false)]);

    // With no transient tab left, a new transient tab is appended.
    s.dispatch(Action::OpenTab(TabState::transient(FileId::from("b"))));
    assert_eq!(ids(&s), vec![("a", false), ("b", true)]);
}

#[test]
fn closing_active_tab_activates_neighbor() {
    let mut s = EditorState::default();
    for id in ["a", "b", "c"] {
        s.dispatch(Action::OpenTab(TabState::persistent(FileId::from(id))));
    }
    s.dispatch(Action::SetActiveFileId(FileId::from("b")));
    s.dispatch(Action::CloseTabs(vec![FileId::from("b")]));
    assert_eq!(s.active_file_id, Some(FileId::from("c")));

    s.dispatch(Action::CloseTabs(vec![FileId::from("c")]));
    assert_eq!(s.active_file_id, Some(FileId::from("a")));

    s.dispatch(Action::CloseTabs(vec![FileId::from("a")]));
    assert_eq!(s.active_file_id, None);
    assert!(s.tab_list.is_empty());
}

#[test]
fn closing_inactive_tab_keeps_active() {
    let mut s = EditorState::default();
    s.dispatch(Action::OpenTab(TabState::persistent(FileId::from("a"))));
    s.dispatch(Action::OpenTab(TabState::persistent(FileId::from("b"))));
    s.dispatch(Action::CloseTabs(vec![FileId::from("a")]));
    assert_eq!(s.active_file_id, Some(FileId::from("b")));
    assert_eq!(s.active_tab().map(|t| t.file_id.as_str()), Some("b"));
}

#[test]
fn toggle_directory_flips() {
    let mut s = EditorState::default();
    assert!(!s.is_directory_open("src"));
    s.dispatch(Action::ToggleDirectory("src".to_string()));
    assert!(s.is_directory_open("src"));
    s.dispatch(Action::ToggleDirectory("src".to_string()));
    assert!(!s.is_directory_open("src"));
}
