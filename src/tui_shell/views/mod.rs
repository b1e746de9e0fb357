mod editor;
mod sidebar;
mod tabs;

pub(in crate::tui_shell) use editor::{EditorView, gutter_width};
pub(in crate::tui_shell) use sidebar::{SidebarView, UtilIcon, util_icon_at};
pub(in crate::tui_shell) use tabs::{TabsView, tab_hit};

#[cfg(test)]
#[path = "../../tests/tui_shell/views_tests.rs"]
mod views_tests;
