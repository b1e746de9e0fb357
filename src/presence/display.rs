use serde_json::Value;

use crate::doc::DocPath;
use crate::model::SessionId;

use super::{DecorationSet, Presence, PresenceError, PresenceState, compute_decorations};

/// Presence aggregation plus the decorations derived from it, for one
/// displayed document path.
///
/// Every accepted event recomputes the decoration set and raises a redraw
/// request. The host drains the request with [`take_redraw_request`] on its
/// next loop turn; nothing here repaints synchronously.
///
/// [`take_redraw_request`]: PresenceDisplay::take_redraw_request
#[derive(Debug, Default)]
pub struct PresenceDisplay {
    state: PresenceState,
    decorations: DecorationSet,
    redraw_requested: bool,
}

impl PresenceDisplay {
    pub fn new(path: DocPath) -> Self {
        Self {
            state: PresenceState::new(path),
            decorations: DecorationSet::default(),
            redraw_requested: false,
        }
    }

    pub fn path(&self) -> &DocPath {
        self.state.path()
    }

    pub fn state(&self) -> &PresenceState {
        &self.state
    }

    pub fn decorations(&self) -> &DecorationSet {
        &self.decorations
    }

    /// Applies one broadcast. Malformed payloads are logged and leave the
    /// state untouched.
    pub fn receive(&mut self, id: SessionId, raw: Option<&Value>) -> Result<(), PresenceError> {
        let presence = match raw {
            None => None,
            Some(v) => match Presence::from_json(v) {
                Ok(p) => Some(p),
                Err(err) => {
                    tracing::warn!(session = id.as_str(), error = %err, "ignoring presence");
                    return Err(err);
                }
            },
        };
        let receipt = self.state.receive(id, presence);
        tracing::trace!(?receipt, tracked = self.state.len(), "presence received");
        self.recompute();
        Ok(())
    }

    /// Called when the editor switches to another file.
    pub fn switch_path(&mut self, path: DocPath) {
        if &path == self.state.path() {
            return;
        }
        self.state.set_path(path);
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.state.clear();
        self.recompute();
    }

    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    fn recompute(&mut self) {
        self.decorations = compute_decorations(&self.state);
        self.redraw_requested = true;
    }
}
