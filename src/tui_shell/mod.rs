use anyhow::Result;

mod app;
mod components;
mod editor_buffer;
mod input;
mod modal;
mod view;
mod views;

// Make core TUI types/helpers available to submodules via `super::...`.
use app::{App, Focus, Modal, ModalKind};
use view::{RenderCtx, View, render_pane_chrome};

pub fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
