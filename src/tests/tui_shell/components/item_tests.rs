use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

fn hovered_file() -> ItemMachine {
    let mut item = ItemMachine::new("index.js", false);
    item.pointer_enter();
    item
}

fn type_str(item: &mut ItemMachine, s: &str) {
    let input = item.rename_input_mut().expect("renaming");
    for c in s.chars() {
        input.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }
}

#[test]
fn hover_shows_utils_and_leave_hides_them() {
    let mut item = ItemMachine::new("a.js", false);
    assert_eq!(item.state(), &ItemState::Idle);
    assert!(!item.shows_utils());
    item.pointer_enter();
    assert!(item.shows_utils());
    item.pointer_leave();
    assert_eq!(item.state(), &ItemState::Idle);
}

#[test]
fn edit_click_starts_rename_prefilled() {
    let mut item = hovered_file();
    let handled = item.edit_icon_click();
    assert!(!handled.propagate);
    assert_eq!(item.rename_input().map(|i| i.buf.as_str()), Some("index.js"));
    // The row is not clickable while renaming.
    assert_eq!(item.click().effect, None);
    assert_eq!(item.double_click().effect, None);
}

#[test]
fn blur_with_value_commits_rename() {
    let mut item = hovered_file();
    item.edit_icon_click();
    item.rename_input_mut().unwrap().clear();
    type_str(&mut item, "main.js");
    let handled = item.blur();
    assert_eq!(handled.effect, Some(ItemEffect::Rename("main.js".to_string())));
    assert_eq!(item.state(), &ItemState::Idle);
}

#[test]
fn blur_with_blank_value_opens_delete_confirmation_instead() {
    let mut item = hovered_file();
    item.edit_icon_click();
    item.rename_input_mut().unwrap().clear();
    type_str(&mut item, "   ");
    let handled = item.blur();
    assert_eq!(handled.effect, None);
    assert!(item.is_confirming_delete());

    item.cancel_delete();
    assert_eq!(item.state(), &ItemState::Idle);
}

#[test]
fn escape_cancels_rename_without_effect() {
    let mut item = hovered_file();
    item.edit_icon_click();
    type_str(&mut item, "x");
    item.cancel_rename();
    assert_eq!(item.state(), &ItemState::Idle);
    assert_eq!(item.blur().effect, None);
}

#[test]
fn confirm_delete_emits_delete_and_stops_propagation() {
    let mut item = hovered_file();
    let opened = item.trash_icon_click();
    assert!(!opened.propagate);
    assert!(item.is_confirming_delete());

    let handled = item.confirm_delete();
    assert_eq!(handled.effect, Some(ItemEffect::Delete));
    assert!(!handled.propagate);
    assert_eq!(item.confirm_delete().effect, None);
}

#[test]
fn directories_cannot_be_renamed_but_can_be_deleted() {
    let mut dir = ItemMachine::new("src", true);
    dir.pointer_enter();
    assert!(!dir.can_rename());
    assert_eq!(dir.edit_icon_click().effect, None);
    assert!(!dir.is_renaming());
    dir.trash_icon_click();
    assert!(dir.is_confirming_delete());
}

#[test]
fn utils_require_hover() {
    let mut item = ItemMachine::new("a.js", false);
    item.edit_icon_click();
    item.trash_icon_click();
    assert_eq!(item.state(), &ItemState::Idle);
    assert_eq!(item.click().effect, Some(ItemEffect::Open));
    assert_eq!(item.double_click().effect, Some(ItemEffect::OpenPersistent));
}
