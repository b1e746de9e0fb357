use std::path::Path;

use anyhow::{Context, Result};

use cocode::ai_assist::{AiAssistRequest, build_prompt, text_before_caret};
use cocode::doc::presence_feed::parse_feed_line;
use cocode::doc::text_path;
use cocode::model::{FileId, TabState, VzContent, validate_file_name};
use cocode::presence::{DecorationKind, PresenceDisplay};
use cocode::workspace::Workspace;

use crate::Commands;

pub(crate) fn handle_command(ws: &Workspace, command: Commands) -> Result<()> {
    match command {
        Commands::Prompt {
            active,
            cursor,
            tabs,
            json,
        } => {
            let content = ws.load_content()?;
            let (id, text) = lookup(&content, &active)?;
            let tab_list = if tabs.is_empty() {
                vec![TabState::persistent(id.clone())]
            } else {
                tabs.iter()
                    .map(|name| lookup(&content, name).map(|(id, _)| TabState::persistent(id)))
                    .collect::<Result<Vec<_>>>()?
            };

            let prompt = build_prompt(&content, &tab_list, text_before_caret(&text, cursor));
            if json {
                let req = AiAssistRequest {
                    options: ws.config.ai_assist_options.clone(),
                    input_text: prompt,
                    file_id: id,
                    insertion_cursor: cursor,
                };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&req.to_body()).context("serialize request body")?
                );
            } else {
                println!("{}", prompt);
            }
        }

        Commands::CheckName { name } => {
            validate_file_name(&name).with_context(|| format!("`{}` is not a valid file name", name))?;
            println!("ok");
        }

        Commands::Config { write } => {
            println!(
                "{}",
                serde_json::to_string_pretty(&ws.config).context("serialize config")?
            );
            if write {
                let dir = ws.ensure_config_dir()?;
                let path = dir.join("config.json");
                let bytes = serde_json::to_vec_pretty(&ws.config).context("serialize config")?;
                std::fs::write(&path, bytes).with_context(|| format!("write {}", path.display()))?;
                eprintln!("wrote {}", path.display());
            }
        }

        Commands::Presence { feed, file } => {
            let content = ws.load_content()?;
            let (id, _) = lookup(&content, &file)?;
            replay_presence(&feed, &id)?;
        }
    }

    Ok(())
}

fn lookup(content: &VzContent, name: &str) -> Result<(FileId, String)> {
    content
        .find_by_name(name)
        .map(|(id, f)| (id.clone(), f.text.clone()))
        .with_context(|| format!("no file named `{}` in the workspace", name))
}

fn replay_presence(feed: &Path, id: &FileId) -> Result<()> {
    let raw = std::fs::read_to_string(feed).with_context(|| format!("read {}", feed.display()))?;
    let mut display = PresenceDisplay::new(text_path(id));
    for (n, line) in raw.lines().enumerate() {
        let entry = match parse_feed_line(line) {
            Ok(Some(e)) => e,
            Ok(None) => continue,
            Err(err) => {
                eprintln!("line {}: {:#}", n + 1, err);
                continue;
            }
        };
        if let Err(err) = display.receive(entry.id, entry.presence.as_ref()) {
            eprintln!("line {}: {}", n + 1, err);
        }
    }

    for d in display.decorations() {
        match d.kind {
            DecorationKind::Caret => println!("{} caret {}", d.session.as_str(), d.from),
            DecorationKind::Highlight => {
                println!("{} highlight {}..{}", d.session.as_str(), d.from, d.to)
            }
        }
    }
    Ok(())
}
