use crate::model::FileId;

fn byte_at(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map(|(b, _)| b)
        .unwrap_or(text.len())
}

/// Zero-based (line, column) of a character offset, both in characters.
pub(super) fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 0;
    let mut col = 0;
    for (i, c) in text.chars().enumerate() {
        if i == offset {
            break;
        }
        if c == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// Character offset of (line, col); `col` is clamped to the line's length and
/// lines past the end land on the end of the text.
pub(super) fn offset_at(text: &str, line: usize, col: usize) -> usize {
    let mut offset = 0;
    for (i, l) in text.split('\n').enumerate() {
        let len = l.chars().count();
        if i == line {
            return offset + col.min(len);
        }
        offset += len + 1;
    }
    text.chars().count()
}

/// Cursor and scroll position of the editor pane. The text itself lives in
/// the shared document; every edit returns the new text for the caller to
/// submit.
#[derive(Debug, Default)]
pub(super) struct EditorBuffer {
    pub(super) file_id: Option<FileId>,
    pub(super) cursor: usize,
    pub(super) scroll: usize,
    preferred_col: Option<usize>,
}

impl EditorBuffer {
    pub(super) fn open(&mut self, file_id: Option<FileId>) {
        if self.file_id != file_id {
            self.file_id = file_id;
            self.cursor = 0;
            self.scroll = 0;
            self.preferred_col = None;
        }
    }

    /// Keeps the cursor inside `text` after the document changed.
    pub(super) fn clamp(&mut self, text: &str) {
        self.cursor = self.cursor.min(text.chars().count());
    }

    pub(super) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.preferred_col = None;
    }

    pub(super) fn move_right(&mut self, text: &str) {
        self.cursor = (self.cursor + 1).min(text.chars().count());
        self.preferred_col = None;
    }

    pub(super) fn move_up(&mut self, text: &str) {
        let (line, col) = line_col(text, self.cursor);
        let want = *self.preferred_col.get_or_insert(col);
        if line > 0 {
            self.cursor = offset_at(text, line - 1, want);
        } else {
            self.cursor = 0;
        }
    }

    pub(super) fn move_down(&mut self, text: &str) {
        let (line, col) = line_col(text, self.cursor);
        let want = *self.preferred_col.get_or_insert(col);
        self.cursor = offset_at(text, line + 1, want);
    }

    pub(super) fn home(&mut self, text: &str) {
        let (line, _) = line_col(text, self.cursor);
        self.cursor = offset_at(text, line, 0);
        self.preferred_col = None;
    }

    pub(super) fn end(&mut self, text: &str) {
        let (line, _) = line_col(text, self.cursor);
        self.cursor = offset_at(text, line, usize::MAX);
        self.preferred_col = None;
    }

    pub(super) fn insert(&mut self, text: &str, s: &str) -> String {
        let at = byte_at(text, self.cursor);
        let mut out = String::with_capacity(text.len() + s.len());
        out.push_str(&text[..at]);
        out.push_str(s);
        out.push_str(&text[at..]);
        self.cursor += s.chars().count();
        self.preferred_col = None;
        out
    }

    pub(super) fn backspace(&mut self, text: &str) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let from = byte_at(text, self.cursor - 1);
        let to = byte_at(text, self.cursor);
        self.cursor -= 1;
        self.preferred_col = None;
        Some(format!("{}{}", &text[..from], &text[to..]))
    }

    pub(super) fn delete(&self, text: &str) -> Option<String> {
        if self.cursor >= text.chars().count() {
            return None;
        }
        let from = byte_at(text, self.cursor);
        let to = byte_at(text, self.cursor + 1);
        Some(format!("{}{}", &text[..from], &text[to..]))
    }

    /// Places the cursor at a clicked cell (line/col relative to the text).
    pub(super) fn click_at(&mut self, text: &str, line: usize, col: usize) {
        self.cursor = offset_at(text, line, col);
        self.preferred_col = None;
    }

    /// Scrolls so the cursor line is inside a viewport of `height` lines.
    pub(super) fn ensure_visible(&mut self, text: &str, height: usize) {
        if height == 0 {
            return;
        }
        let (line, _) = line_col(text, self.cursor);
        if line < self.scroll {
            self.scroll = line;
        } else if line >= self.scroll + height {
            self.scroll = line + 1 - height;
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/editor_buffer_tests.rs"]
mod editor_buffer_tests;
