use super::*;

impl App {
    pub(super) fn load(opts: crate::tui::TuiRunOptions) -> Result<Self> {
        let content = opts
            .workspace
            .load_content()
            .with_context(|| format!("load {}", opts.workspace.root.display()))?;
        let count = content.files.len();
        let doc = LocalDoc::new(content);

        let feed = opts
            .presence_feed
            .or_else(|| opts.workspace.config.presence_feed.clone());
        let mut app = Self::new(opts.workspace, doc);
        if let Some(path) = feed {
            app.attach_presence_feed(path);
        }
        if app.status.is_none() {
            app.push_status(format!("loaded {} files", count));
        }
        Ok(app)
    }

    pub(in crate::tui_shell) fn new(workspace: Workspace, doc: LocalDoc) -> Self {
        let mut startup_error = None;

        let ai = match AiAssistClient::from_config(&workspace.config) {
            Ok(c) => Some(c),
            Err(err) => {
                startup_error = Some(format!("AI assist disabled: {:#}", err));
                None
            }
        };

        let ai_key = match KeyBinding::parse(&workspace.config.ai_assist_key) {
            Ok(k) => Some(k),
            Err(err) => {
                startup_error = Some(format!(
                    "bad ai_assist_key ({:#}); using {}",
                    err, DEFAULT_AI_ASSIST_KEY
                ));
                KeyBinding::parse(DEFAULT_AI_ASSIST_KEY).ok()
            }
        };

        let seen_version = doc.version();
        let mut app = Self {
            workspace,
            doc,
            seen_version,
            editor: EditorState::default(),
            focus: Focus::Sidebar,
            sidebar: SidebarState::default(),
            tab_cursor: 0,
            buffer: EditorBuffer::default(),
            presence: None,
            ai,
            ai_key,
            modal: None,
            messages: VecDeque::new(),
            status: None,
            clicks: ClickTracker::default(),
            last_area: Rect::default(),
            needs_redraw: true,
            quit: false,
            _presence_feed: None,
        };
        app.sync_sidebar_item();
        if let Some(msg) = startup_error {
            app.push_error(msg);
        }
        app
    }

    /// Warns when the AI binding cannot be told apart from a plain key.
    pub(in crate::tui_shell) fn note_keyboard_enhancement(&mut self, supported: bool) {
        if supported {
            return;
        }
        tracing::debug!("keyboard enhancement unsupported");
        if let Some(key) = self.ai_key.filter(|k| k.needs_disambiguation()) {
            self.push_error(format!(
                "this terminal cannot tell {} from a plain key; set ai_assist_key to another binding (e.g. alt-enter)",
                key
            ));
        }
    }

    fn attach_presence_feed(&mut self, path: PathBuf) {
        let path = if path.is_relative() {
            self.workspace.root.join(path)
        } else {
            path
        };
        match crate::doc::presence_feed::spawn_presence_feed(&path, self.doc.presence_sender()) {
            Ok(handle) => {
                tracing::info!(feed = %path.display(), "presence feed attached");
                self._presence_feed = Some(handle);
            }
            Err(err) => self.push_error(format!("presence feed: {:#}", err)),
        }
    }
}
