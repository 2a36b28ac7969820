//! Undo functionality for the sketchpad pipeline

use tracing::{debug, warn};

use crate::history::UndoOutcome;

use super::Sketchpad;

impl Sketchpad {
    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.classifier.is_idle() && self.history.can_undo()
    }

    /// Undo the last committed event
    ///
    /// Returns true if an event was removed. Does nothing while a gesture is
    /// in progress or when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.classifier.is_idle() {
            debug!("Undo ignored during gesture");
            return false;
        }

        match self.history.undo(&mut self.surface) {
            Ok(outcome) => outcome.undid(),
            Err(e) => {
                warn!("Undo failed to restore snapshot: {}", e);
                false
            }
        }
    }

    /// Undo and report which path was taken
    pub fn undo_with_outcome(&mut self) -> UndoOutcome {
        if !self.classifier.is_idle() {
            return UndoOutcome::Nothing;
        }
        self.history.undo(&mut self.surface).unwrap_or_else(|e| {
            warn!("Undo failed to restore snapshot: {}", e);
            UndoOutcome::Nothing
        })
    }
}
