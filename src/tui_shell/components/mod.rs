//! UI components as plain state machines. Views render them; the app feeds
//! them input and applies what they emit.

mod click;
mod create_file;
mod item;
mod keys;
mod tab;

pub(super) use click::{ClickKind, ClickTarget, ClickTracker};
pub(super) use create_file::CreateFileForm;
pub(super) use item::{Handled, ItemEffect, ItemMachine, ItemState};
pub(super) use keys::KeyBinding;
pub(super) use tab::{TabEvent, TabProps};

#[cfg(test)]
#[path = "../../tests/tui_shell/components/item_tests.rs"]
mod item_tests;

#[cfg(test)]
#[path = "../../tests/tui_shell/components/tab_tests.rs"]
mod tab_tests;

#[cfg(test)]
#[path = "../../tests/tui_shell/components/misc_tests.rs"]
mod misc_tests;
