use super::*;

impl App {
    /// Sends the open tabs plus the text before the caret to the assist
    /// endpoint. Completions come back through the shared document, so only
    /// the request outcome is reported here.
    pub(in crate::tui_shell) fn trigger_ai_assist(&mut self) {
        let Some((id, file)) = self.active_file() else {
            self.push_error("AI assist needs an open file");
            return;
        };
        let Some(client) = self.ai.as_ref() else {
            self.push_error("AI assist is not configured");
            return;
        };

        let before_caret = text_before_caret(&file.text, self.buffer.cursor);
        let prompt = build_prompt(self.doc.data(), &self.editor.tab_list, before_caret);
        let req = client.request(prompt, id.clone(), self.buffer.cursor);
        let url = client.url().to_string();

        match client.start(req) {
            Ok(token) => self.push_status(format!("AI assist #{} sent to {}", token.0, url)),
            Err(err) => self.push_error(format!("AI assist failed to start: {:#}", err)),
        }
    }
}
