use crate::model::{File, TabState, VzContent};

/// Markdown-ish context block for each file, joined by a blank line.
pub fn generate_files_context<'a>(files: impl IntoIterator<Item = &'a File>) -> String {
    files
        .into_iter()
        .map(|file| format!("File `{}`:\n```{}```", file.name.trim(), file.text.trim()))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Full prompt: the open tabs' files, then the active file up to the caret.
///
/// Tabs pointing at files that no longer exist are skipped.
pub fn build_prompt(content: &VzContent, tabs: &[TabState], before_caret: &str) -> String {
    let files = tabs.iter().filter_map(|tab| {
        let file = content.file(&tab.file_id);
        if file.is_none() {
            tracing::warn!(file_id = %tab.file_id, "open tab refers to a missing file");
        }
        file
    });
    let context = generate_files_context(files);

    let mut out = String::with_capacity(context.len() + before_caret.len() + 16);
    if !context.is_empty() {
        out.push_str(&context);
        out.push_str("\n\n");
    }
    out.push_str("Current File:\n");
    out.push_str(before_caret);
    out
}

/// Prefix of `text` ending at character offset `caret` (clamped to the text).
pub fn text_before_caret(text: &str, caret: usize) -> &str {
    match text.char_indices().nth(caret) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}
