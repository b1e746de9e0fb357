use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::model::{AppConfig, CONFIG_DIR};

mod editor_state;
mod file_tree;
mod root_lifecycle;
mod scan;

pub use self::editor_state::{Action, EditorState};
pub use self::file_tree::{RowKind, TreeNode, TreeRow, build_file_tree, visible_rows};

#[derive(Clone, Debug)]
pub struct Workspace {
    pub root: PathBuf,
    pub config: AppConfig,
}

#[cfg(test)]
#[path = "tests/workspace/editor_state_tests.rs"]
mod editor_state_tests;

#[cfg(test)]
#[path = "tests/workspace/file_tree_tests.rs"]
mod file_tree_tests;
