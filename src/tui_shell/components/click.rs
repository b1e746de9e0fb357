use std::time::{Duration, Instant};

use crate::model::FileId;

pub(in crate::tui_shell) const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum ClickTarget {
    Row(String),
    Tab(FileId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum ClickKind {
    Single,
    Double,
}

/// Turns raw mouse-down events into single/double clicks. A double click
/// consumes the pending click, so a third quick click starts over as a single.
#[derive(Debug, Default)]
pub(in crate::tui_shell) struct ClickTracker {
    last: Option<(ClickTarget, Instant)>,
}

impl ClickTracker {
    pub(in crate::tui_shell) fn register(&mut self, target: ClickTarget) -> ClickKind {
        self.register_at(target, Instant::now())
    }

    pub(in crate::tui_shell) fn register_at(&mut self, target: ClickTarget, at: Instant) -> ClickKind {
        let is_double = matches!(
            &self.last,
            Some((prev, t)) if *prev == target && at.saturating_duration_since(*t) <= DOUBLE_CLICK_WINDOW
        );
        if is_double {
            self.last = None;
            ClickKind::Double
        } else {
            self.last = Some((target, at));
            ClickKind::Single
        }
    }
}
