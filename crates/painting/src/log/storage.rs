//! Append-only storage for committed draw events.

use crate::types::DrawEvent;

/// Ordered log of committed draw events.
///
/// Index equals creation order and entries are never reordered or edited.
/// The only mutations are `append` (a gesture committed) and `pop` (undo
/// removes the newest event).
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events: Vec<DrawEvent>,
}

impl EventLog {
    /// Create a new empty event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a committed event.
    pub fn append(&mut self, event: DrawEvent) {
        self.events.push(event);
    }

    /// Remove and return the newest event.
    pub fn pop(&mut self) -> Option<DrawEvent> {
        self.events.pop()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The newest `count` events, oldest first.
    ///
    /// Asking for more events than exist returns the whole log.
    pub fn tail(&self, count: usize) -> &[DrawEvent] {
        let start = self.events.len().saturating_sub(count);
        &self.events[start..]
    }

    pub fn last(&self) -> Option<&DrawEvent> {
        self.events.last()
    }

    pub fn events(&self) -> &[DrawEvent] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawEvent> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a DrawEvent;
    type IntoIter = std::slice::Iter<'a, DrawEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
