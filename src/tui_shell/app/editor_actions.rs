use super::*;

const PAGE_LINES: usize = 10;

impl App {
    pub(super) fn editor_key(&mut self, key: KeyEvent) {
        if self.ai_key.is_some_and(|k| k.matches(&key)) {
            self.trigger_ai_assist();
            return;
        }

        let Some((id, text)) = self
            .active_file()
            .map(|(id, f)| (id.clone(), f.text.clone()))
        else {
            if key.code == KeyCode::Esc {
                self.set_focus(Focus::Sidebar);
            }
            return;
        };

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::ALT);
        let edited = match key.code {
            KeyCode::Esc => {
                self.set_focus(Focus::Sidebar);
                None
            }
            KeyCode::Left => {
                self.buffer.move_left();
                None
            }
            KeyCode::Right => {
                self.buffer.move_right(&text);
                None
            }
            KeyCode::Up => {
                self.buffer.move_up(&text);
                None
            }
            KeyCode::Down => {
                self.buffer.move_down(&text);
                None
            }
            KeyCode::PageUp => {
                for _ in 0..PAGE_LINES {
                    self.buffer.move_up(&text);
                }
                None
            }
            KeyCode::PageDown => {
                for _ in 0..PAGE_LINES {
                    self.buffer.move_down(&text);
                }
                None
            }
            KeyCode::Home => {
                self.buffer.home(&text);
                None
            }
            KeyCode::End => {
                self.buffer.end(&text);
                None
            }
            KeyCode::Enter => Some(self.buffer.insert(&text, "\n")),
            KeyCode::Backspace => self.buffer.backspace(&text),
            KeyCode::Delete => self.buffer.delete(&text),
            KeyCode::Char(c) if !ctrl => {
                let mut s = [0u8; 4];
                Some(self.buffer.insert(&text, c.encode_utf8(&mut s)))
            }
            _ => None,
        };

        if let Some(new_text) = edited {
            if let Err(err) = edit_text(&mut self.doc, &id, &new_text, SOURCE_LOCAL) {
                self.push_error(format!("edit failed: {}", err));
            }
            self.pump_doc();
        }
    }
}
