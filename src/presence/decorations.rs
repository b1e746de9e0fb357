use crate::model::SessionId;

use super::PresenceState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecorationKind {
    /// Zero-width remote cursor.
    Caret,
    /// Remote selection spanning `from..to`.
    Highlight,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decoration {
    pub session: SessionId,
    pub from: usize,
    pub to: usize,
    pub kind: DecorationKind,
}

/// Decorations ordered by ascending `from`, ties broken by session id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecorationSet {
    items: Vec<Decoration>,
}

impl DecorationSet {
    pub fn new(mut items: Vec<Decoration>) -> Self {
        items.sort_by(|a, b| a.from.cmp(&b.from).then_with(|| a.session.cmp(&b.session)));
        Self { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decoration> {
        self.items.iter()
    }

    pub fn has_caret_at(&self, offset: usize) -> bool {
        self.items
            .iter()
            .take_while(|d| d.from <= offset)
            .any(|d| d.kind == DecorationKind::Caret && d.from == offset)
    }

    pub fn is_highlighted(&self, offset: usize) -> bool {
        self.items
            .iter()
            .take_while(|d| d.from <= offset)
            .any(|d| d.kind == DecorationKind::Highlight && offset < d.to)
    }
}

impl<'a> IntoIterator for &'a DecorationSet {
    type Item = &'a Decoration;
    type IntoIter = std::slice::Iter<'a, Decoration>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Rebuilds the full decoration set from the tracked presence entries.
pub fn compute_decorations(state: &PresenceState) -> DecorationSet {
    let items = state
        .iter()
        .map(|(id, p)| {
            let (a, b) = (p.start_offset(), p.end_offset());
            let kind = if a == b {
                DecorationKind::Caret
            } else {
                DecorationKind::Highlight
            };
            Decoration {
                session: id.clone(),
                from: a.min(b),
                to: a.max(b),
                kind,
            }
        })
        .collect();
    DecorationSet::new(items)
}
