use std::collections::BTreeMap;

use crate::model::{FileId, Files};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeNode {
    Dir {
        name: String,
        path: String,
        children: Vec<TreeNode>,
    },
    File {
        name: String,
        path: String,
        id: FileId,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Dir { name, .. } | TreeNode::File { name, .. } => name,
        }
    }
}

#[derive(Default)]
struct DirBuilder {
    dirs: BTreeMap<String, DirBuilder>,
    files: BTreeMap<String, FileId>,
}

impl DirBuilder {
    fn insert(&mut self, parts: &[&str], id: FileId) {
        match parts {
            [] => {}
            [file] => {
                self.files.insert(file.to_string(), id);
            }
            [dir, rest @ ..] => self
                .dirs
                .entry(dir.to_string())
                .or_default()
                .insert(rest, id),
        }
    }

    fn build(self, prefix: &str) -> Vec<TreeNode> {
        let join = |name: &str| {
            if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{}/{}", prefix, name)
            }
        };
        let mut out = Vec::with_capacity(self.dirs.len() + self.files.len());
        for (name, dir) in self.dirs {
            let path = join(&name);
            let children = dir.build(&path);
            out.push(TreeNode::Dir {
                name,
                path,
                children,
            });
        }
        for (name, id) in self.files {
            let path = join(&name);
            out.push(TreeNode::File { name, path, id });
        }
        out
    }
}

/// Directories first, then files, each sorted by name.
pub fn build_file_tree(files: &Files) -> Vec<TreeNode> {
    let mut root = DirBuilder::default();
    for (id, file) in files {
        let parts: Vec<&str> = file.name.split('/').filter(|p| !p.is_empty()).collect();
        root.insert(&parts, id.clone());
    }
    root.build("")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    Dir { open: bool },
    File,
}

/// One line of the flattened sidebar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeRow {
    pub depth: usize,
    pub kind: RowKind,
    pub name: String,
    pub path: String,
    pub file_id: Option<FileId>,
}

impl TreeRow {
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, RowKind::Dir { .. })
    }
}

pub fn visible_rows(tree: &[TreeNode], is_open: impl Fn(&str) -> bool) -> Vec<TreeRow> {
    fn push(nodes: &[TreeNode], depth: usize, is_open: &dyn Fn(&str) -> bool, out: &mut Vec<TreeRow>) {
        for node in nodes {
            match node {
                TreeNode::Dir {
                    name,
                    path,
                    children,
                } => {
                    let open = is_open(path);
                    out.push(TreeRow {
                        depth,
                        kind: RowKind::Dir { open },
                        name: name.clone(),
                        path: path.clone(),
                        file_id: None,
                    });
                    if open {
                        push(children, depth + 1, is_open, out);
                    }
                }
                TreeNode::File { name, path, id } => out.push(TreeRow {
                    depth,
                    kind: RowKind::File,
                    name: name.clone(),
                    path: path.clone(),
                    file_id: Some(id.clone()),
                }),
            }
        }
    }

    let mut out = Vec::new();
    push(tree, 0, &is_open, &mut out);
    out
}
