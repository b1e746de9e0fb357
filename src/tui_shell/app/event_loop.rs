use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.drain_messages();

        if app.needs_redraw {
            let size = terminal.size().context("terminal size")?;
            app.before_draw(Rect::new(0, 0, size.width, size.height));
            terminal
                .draw(|f| super::render::draw(f, app))
                .context("draw")?;
            app.needs_redraw = false;
        }
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => app.handle_key(k),
                Event::Mouse(m) => app.handle_mouse(m),
                Event::Resize(_, _) => app.needs_redraw = true,
                _ => {}
            }
        }

        app.pump_doc();
        app.pump_presence();
        app.pump_ai();
    }
}

impl App {
    pub(in crate::tui_shell) fn handle_key(&mut self, key: KeyEvent) {
        self.needs_redraw = true;

        if self.modal.is_some() {
            modal::handle_modal_key(self, key);
            return;
        }

        if self.sidebar_confirming_delete() {
            self.sidebar_key(key);
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('q') if ctrl => {
                self.quit = true;
                return;
            }
            KeyCode::Char('n') if ctrl => {
                self.open_create_file();
                return;
            }
            KeyCode::F(1) => {
                self.open_modal(Modal::help(self.ai_key.as_ref()));
                return;
            }
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.prev());
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Sidebar => self.sidebar_key(key),
            Focus::Tabs => self.tabs_key(key),
            Focus::Editor => self.editor_key(key),
        }
    }

    pub(super) fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        // Leaving the sidebar commits a pending rename.
        if self.focus == Focus::Sidebar {
            self.blur_sidebar_item();
            if self.sidebar_confirming_delete() {
                return;
            }
        }
        self.focus = focus;
        self.needs_redraw = true;
    }
}
