//! Hybrid snapshot/replay undo history
//!
//! Instead of a bitmap per stroke, the history keeps one full-surface
//! snapshot per `interval` committed events plus the event log itself. The
//! snapshot for checkpoint `k` is taken just before the event log grows past
//! `k * interval` events, so both the snapshot count and the distance from
//! the newest snapshot are derived from the log length alone.
//!
//! Undo pops the newest event and either restores the newest snapshot
//! directly (when the popped event was the first after it) or restores it and
//! replays the events recorded since. Replay therefore never exceeds
//! `interval - 1` events.

use std::num::NonZeroUsize;

use tracing::debug;

use crate::log::EventLog;
use crate::render;
use crate::surface::{RasterSurface, Snapshot, SurfaceError};
use crate::types::DrawEvent;

/// Result of an undo request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoOutcome {
    /// Nothing to undo (or nothing to restore to)
    Nothing,
    /// The newest snapshot was popped and restored as is
    Restored,
    /// The newest snapshot was restored and this many events replayed
    Replayed(usize),
}

impl UndoOutcome {
    /// Whether an event was removed
    pub fn undid(self) -> bool {
        !matches!(self, UndoOutcome::Nothing)
    }
}

/// Event log plus sparse checkpoints
#[derive(Debug)]
pub struct UndoHistory {
    log: EventLog,
    /// Snapshot `k` was taken when the log held `k * interval` events
    snapshots: Vec<Snapshot>,
    interval: NonZeroUsize,
}

impl UndoHistory {
    pub fn new(interval: NonZeroUsize) -> Self {
        Self {
            log: EventLog::new(),
            snapshots: Vec::new(),
            interval,
        }
    }

    pub fn interval(&self) -> usize {
        self.interval.get()
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn event_count(&self) -> usize {
        self.log.len()
    }

    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.log.is_empty() && !self.snapshots.is_empty()
    }

    /// Bytes held by snapshots
    pub fn snapshot_bytes(&self) -> usize {
        self.snapshots.iter().map(Snapshot::byte_len).sum()
    }

    /// Capture a snapshot if a gesture starting now begins a new checkpoint
    ///
    /// Called before every gesture. A checkpoint is due when the log length
    /// is a multiple of the interval and that checkpoint has not been taken
    /// yet; a gesture that was started but never committed does not cause a
    /// second capture at the same length.
    pub fn checkpoint_if_due(&mut self, surface: &RasterSurface) -> bool {
        let len = self.log.len();
        let interval = self.interval.get();
        if len % interval != 0 || self.snapshots.len() > len / interval {
            return false;
        }

        self.snapshots.push(surface.snapshot());
        debug!(
            "Checkpoint {} captured at {} events ({} bytes held)",
            self.snapshots.len() - 1,
            len,
            self.snapshot_bytes()
        );
        true
    }

    /// Append a finalized event
    pub fn commit(&mut self, event: DrawEvent) {
        debug!(
            "Commit {:?} event #{} ({} points)",
            event.kind(),
            self.log.len(),
            event.points().len()
        );
        self.log.append(event);
    }

    /// Undo the newest event, rewriting `surface` to the state before it
    pub fn undo(&mut self, surface: &mut RasterSurface) -> Result<UndoOutcome, SurfaceError> {
        if !self.can_undo() {
            debug!("Undo: nothing to undo");
            return Ok(UndoOutcome::Nothing);
        }

        self.log.pop();
        let replay_count = self.log.len() % self.interval.get();

        if replay_count == 0 {
            let Some(snapshot) = self.snapshots.pop() else {
                return Ok(UndoOutcome::Nothing);
            };
            surface.restore(&snapshot)?;
            debug!(
                "Undo: restored checkpoint {} ({} events left)",
                self.snapshots.len(),
                self.log.len()
            );
            return Ok(UndoOutcome::Restored);
        }

        let Some(snapshot) = self.snapshots.last() else {
            return Ok(UndoOutcome::Nothing);
        };
        surface.restore(snapshot)?;
        render::replay(surface, self.log.tail(replay_count));
        debug!(
            "Undo: restored checkpoint {} and replayed {} events",
            self.snapshots.len() - 1,
            replay_count
        );
        Ok(UndoOutcome::Replayed(replay_count))
    }
}
