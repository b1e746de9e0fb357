use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use cocode::workspace::Workspace;

use crate::Commands;

#[derive(Parser)]
#[command(name = "cocode")]
#[command(about = "Collaborative code editor for the terminal", long_about = None)]
pub(crate) struct Cli {
    /// Workspace directory (defaults to the nearest ancestor with .cocode)
    #[arg(long, value_name = "PATH", global = true)]
    dir: Option<PathBuf>,

    /// Config file (defaults to <dir>/.cocode/config.json)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Where cocode.log is written (defaults to <dir>/.cocode)
    #[arg(long = "log-dir", value_name = "PATH", global = true)]
    log_dir: Option<PathBuf>,

    /// JSON-lines presence feed replayed into the editor
    #[arg(long = "presence-feed", value_name = "PATH")]
    presence_feed: Option<PathBuf>,

    /// Overrides server_url from the config
    #[arg(long = "server-url", value_name = "URL", global = true)]
    server_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut ws = open_workspace(cli.dir.as_deref(), cli.config.as_deref())?;
    if let Some(url) = cli.server_url {
        ws.config.server_url = url;
    }

    let log_dir = match cli.log_dir {
        Some(d) => d,
        None => ws.config_dir(),
    };
    let _guard = cocode::logging::init(&log_dir, cli.command.is_some())?;
    tracing::info!(root = %ws.root.display(), "workspace opened");

    match cli.command {
        None => {
            cocode::tui::run_with_options(cocode::tui::TuiRunOptions {
                workspace: ws,
                presence_feed: cli.presence_feed,
            })?;
        }
        Some(command) => {
            if cli.presence_feed.is_some() {
                anyhow::bail!(
                    "`--presence-feed` is only supported when running the TUI (no subcommand)"
                );
            }
            crate::cli_exec::handle_command(&ws, command)?
        }
    }

    Ok(())
}

fn open_workspace(
    dir: Option<&std::path::Path>,
    config: Option<&std::path::Path>,
) -> Result<Workspace> {
    match dir {
        Some(d) => Workspace::open(d, config),
        None => {
            let cwd = std::env::current_dir().context("get current dir")?;
            let ws = Workspace::discover(&cwd)?;
            match config {
                Some(c) => Workspace::open(&ws.root, Some(c)),
                None => Ok(ws),
            }
        }
    }
}
