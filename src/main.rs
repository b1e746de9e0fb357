use std::path::PathBuf;

use clap::Subcommand;

mod cli_exec;
mod cli_runtime;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the AI assist prompt for a file and caret position
    Prompt {
        /// File the caret is in (workspace-relative name)
        #[arg(long)]
        active: String,
        /// Caret position, in characters from the start of the file
        #[arg(long, default_value_t = 0)]
        cursor: usize,
        /// Open tabs, in tab order (defaults to just the active file)
        #[arg(long = "tab", value_name = "FILE")]
        tabs: Vec<String>,
        /// Emit the full request body as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a name is accepted for a new file
    CheckName { name: String },

    /// Print the effective configuration
    Config {
        /// Also write it to the workspace config file
        #[arg(long)]
        write: bool,
    },

    /// Replay a presence feed against the workspace and print the decorations
    Presence {
        /// JSON-lines feed to replay
        feed: PathBuf,
        /// File whose decorations to print
        #[arg(long)]
        file: String,
    },
}

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
