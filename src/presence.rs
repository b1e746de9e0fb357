//! Remote cursor presence for the file currently shown in the editor.
//!
//! Presence broadcasts arrive as raw JSON (`{"start": [...path, offset],
//! "end": [...path, offset]}`). [`PresenceDisplay`] owns the aggregated state
//! for one displayed path and turns it into a [`DecorationSet`] the editor
//! view paints.

use thiserror::Error;

mod decorations;
mod display;
mod record;
mod state;

pub use self::decorations::{Decoration, DecorationKind, DecorationSet, compute_decorations};
pub use self::display::PresenceDisplay;
pub use self::record::{Presence, path_matches};
pub use self::state::{PresenceState, Receipt};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PresenceError {
    #[error("malformed presence: {0}")]
    Malformed(String),
}

#[cfg(test)]
#[path = "tests/presence/record_tests.rs"]
mod record_tests;

#[cfg(test)]
#[path = "tests/presence/display_tests.rs"]
mod display_tests;
