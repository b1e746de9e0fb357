use super::*;

impl App {
    pub(super) fn post(&mut self, msg: UiMessage) {
        if !self.messages.contains(&msg) {
            self.messages.push_back(msg);
        }
    }

    /// Handles messages queued during the previous turn.
    pub(in crate::tui_shell) fn drain_messages(&mut self) {
        while let Some(msg) = self.messages.pop_front() {
            match msg {
                UiMessage::PresenceChanged => self.needs_redraw = true,
                UiMessage::DocChanged => self.sync_doc(),
            }
        }
    }

    /// Feeds pending presence broadcasts into the display. The repaint they
    /// request happens on the next turn.
    pub(in crate::tui_shell) fn pump_presence(&mut self) {
        let events = self.doc.poll_presence();
        if events.is_empty() {
            return;
        }
        let Some(display) = self.presence.as_mut() else {
            tracing::trace!(n = events.len(), "no file mounted; presence dropped");
            return;
        };
        for ev in events {
            // Malformed payloads are already logged and leave the state as-is.
            let _ = display.receive(ev.id, ev.presence.as_ref());
        }
        if display.take_redraw_request() {
            self.post(UiMessage::PresenceChanged);
        }
    }

    pub(in crate::tui_shell) fn pump_doc(&mut self) {
        if self.doc.version() != self.seen_version {
            self.post(UiMessage::DocChanged);
        }
    }

    fn sync_doc(&mut self) {
        self.seen_version = self.doc.version();

        let gone: Vec<FileId> = self
            .editor
            .tab_list
            .iter()
            .filter(|t| self.doc.data().file(&t.file_id).is_none())
            .map(|t| t.file_id.clone())
            .collect();
        if !gone.is_empty() {
            self.dispatch(Action::CloseTabs(gone));
        }
        let active_gone = self
            .editor
            .active_file_id
            .as_ref()
            .is_some_and(|id| self.doc.data().file(id).is_none());
        if active_gone {
            self.editor.active_file_id = None;
            self.mount_active();
        }

        if let Some(file) = self
            .editor
            .active_file_id
            .as_ref()
            .and_then(|id| self.doc.data().file(id))
        {
            self.buffer.clamp(&file.text);
        }
        self.sync_sidebar_item();
        self.needs_redraw = true;
    }

    /// Reports finished AI assist requests. Outcomes of superseded requests
    /// are dropped.
    pub(in crate::tui_shell) fn pump_ai(&mut self) {
        let Some(client) = self.ai.as_ref() else {
            return;
        };
        let mut reports = Vec::new();
        for outcome in client.poll_outcomes() {
            if outcome.superseded || !client.is_current(outcome.token) {
                tracing::debug!(token = outcome.token.0, "dropping superseded AI assist outcome");
                continue;
            }
            reports.push(match outcome.result {
                Ok(status) => Ok(format!(
                    "AI assist #{} accepted (HTTP {})",
                    outcome.token.0, status
                )),
                Err(err) => Err(format!("AI assist #{} failed: {}", outcome.token.0, err)),
            });
        }
        for report in reports {
            match report {
                Ok(msg) => self.push_status(msg),
                Err(msg) => self.push_error(msg),
            }
        }
    }
}
