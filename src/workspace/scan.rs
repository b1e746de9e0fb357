use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::model::{File, FileId, VzContent};

use super::Workspace;

const DEFAULT_IGNORES: &[&str] = &[".git/**", "target/**", "node_modules/**", ".cocode/**"];

fn ignore_set(extra: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pat in DEFAULT_IGNORES.iter().copied().chain(extra.iter().map(|s| s.as_str())) {
        builder.add(Glob::new(pat).with_context(|| format!("invalid ignore glob: {}", pat))?);
        // `dir/**` should also hide the directory entry itself.
        if let Some(dir) = pat.strip_suffix("/**") {
            builder.add(Glob::new(dir).with_context(|| format!("invalid ignore glob: {}", dir))?);
        }
    }
    builder.build().context("build ignore globs")
}

fn read_dir_sorted(dir: &Path) -> Result<Vec<fs::DirEntry>> {
    let mut entries: Vec<fs::DirEntry> = fs::read_dir(dir)
        .with_context(|| format!("read dir {}", dir.display()))?
        .collect::<std::result::Result<_, _>>()
        .with_context(|| format!("collect dir entries for {}", dir.display()))?;
    entries.sort_by_key(|e| e.file_name());
    Ok(entries)
}

fn walk(root: &Path, dir: &Path, ignore: &GlobSet, out: &mut VzContent) -> Result<()> {
    for entry in read_dir_sorted(dir)? {
        let path = entry.path();
        let Ok(rel) = path.strip_prefix(root) else {
            continue;
        };
        let Some(rel) = rel.to_str().map(|s| s.replace('\\', "/")) else {
            tracing::debug!(path = %path.display(), "skipping non-utf8 path");
            continue;
        };
        if ignore.is_match(&rel) {
            continue;
        }

        let ft = entry.file_type().context("read file type")?;
        if ft.is_dir() {
            walk(root, &path, ignore, out)?;
        } else if ft.is_file() {
            let bytes = fs::read(&path).with_context(|| format!("read file {}", path.display()))?;
            match String::from_utf8(bytes) {
                Ok(text) => {
                    out.files
                        .insert(FileId::for_path(&rel), File { name: rel, text });
                }
                Err(_) => tracing::debug!(path = %rel, "skipping non-utf8 file"),
            }
        }
    }
    Ok(())
}

impl Workspace {
    /// Reads every text file under the root into a fresh document content.
    pub fn load_content(&self) -> Result<VzContent> {
        let ignore = ignore_set(&self.config.ignore)?;
        let mut content = VzContent::default();
        walk(&self.root, &self.root, &ignore, &mut content)?;
        tracing::info!(
            root = %self.root.display(),
            files = content.files.len(),
            "loaded workspace"
        );
        Ok(content)
    }
}
