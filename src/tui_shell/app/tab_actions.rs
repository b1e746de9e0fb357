use super::*;

impl App {
    pub(super) fn tabs_key(&mut self, key: KeyEvent) {
        let n = self.editor.tab_list.len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.tab_cursor = self.tab_cursor.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.tab_cursor + 1 < n {
                    self.tab_cursor += 1;
                }
            }
            KeyCode::Enter => self.tab_event(self.tab_cursor, TabEvent::Click),
            KeyCode::Char('p') => self.tab_event(self.tab_cursor, TabEvent::DoubleClick),
            KeyCode::Char('x') | KeyCode::Delete => {
                self.tab_event(self.tab_cursor, TabEvent::CloseClick)
            }
            KeyCode::Esc => self.set_focus(Focus::Editor),
            _ => {}
        }
    }

    pub(super) fn tab_event(&mut self, idx: usize, event: TabEvent) {
        let Some(props) = self.tab_props().into_iter().nth(idx) else {
            return;
        };
        self.tab_cursor = idx;
        let action = props.on(event);
        self.dispatch(action);
    }
}
