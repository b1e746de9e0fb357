use super::*;

#[derive(Clone, Debug)]
pub(in crate::tui_shell) enum ModalKind {
    Help { lines: Vec<String> },
    CreateFile { form: CreateFileForm },
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) kind: ModalKind,
    pub(in crate::tui_shell) scroll: usize,
}

impl Modal {
    pub(in crate::tui_shell) fn create_file(form: CreateFileForm) -> Self {
        Self {
            kind: ModalKind::CreateFile { form },
            scroll: 0,
        }
    }

    pub(in crate::tui_shell) fn help(ai_key: Option<&KeyBinding>) -> Self {
        let ai_key = ai_key.map_or_else(|| "(unbound)".to_string(), |k| k.to_string());
        let lines = [
            "Global".to_string(),
            "  tab / shift-tab   cycle focus (files, tabs, editor)".to_string(),
            "  ctrl-n            new file".to_string(),
            "  ctrl-q            quit".to_string(),
            "  f1                this help".to_string(),
            String::new(),
            "Files".to_string(),
            "  up/down j/k       select".to_string(),
            "  enter             open (preview tab)".to_string(),
            "  p                 open in a pinned tab".to_string(),
            "  space             expand or collapse directory".to_string(),
            "  r                 rename (enter commits, esc cancels)".to_string(),
            "  d                 delete".to_string(),
            "  n                 new file".to_string(),
            String::new(),
            "Tabs".to_string(),
            "  left/right        move".to_string(),
            "  enter             activate".to_string(),
            "  p                 pin".to_string(),
            "  x                 close".to_string(),
            String::new(),
            "Editor".to_string(),
            format!("  {:<17} AI assist", ai_key),
            "  esc               back to files".to_string(),
        ];
        Self {
            kind: ModalKind::Help {
                lines: lines.to_vec(),
            },
            scroll: 0,
        }
    }

    pub(in crate::tui_shell) fn title(&self) -> &'static str {
        match self.kind {
            ModalKind::Help { .. } => "Help",
            ModalKind::CreateFile { .. } => "Create File",
        }
    }
}
