//! Terminal front-end for a collaborative code editor: a file tree and tab
//! strip over a replicated document, remote collaborator presence painted
//! into the editor, and an AI assist trigger that posts the open files to a
//! completion service.

pub mod ai_assist;
pub mod doc;
pub mod logging;
pub mod model;
pub mod presence;
pub mod tui;
pub mod workspace;

mod tui_shell;
