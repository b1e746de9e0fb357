use std::path::PathBuf;

use anyhow::Result;

use crate::workspace::Workspace;

#[derive(Debug)]
pub struct TuiRunOptions {
    pub workspace: Workspace,
    /// JSON-lines presence replay; overrides `presence_feed` from the config.
    pub presence_feed: Option<PathBuf>,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
