//! Draw-event recorder for building one event per gesture.

use tracing::trace;

use crate::style::PaletteColor;
use crate::types::{DrawEvent, DrawKind, Point};

/// Error type for recording operations.
#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    #[error("No event in progress - call begin() first")]
    NotStarted,
}

/// Builds the in-progress event of the current gesture.
///
/// An event starts out as a tentative `Path` holding the press point, the
/// pen width and the color of the moment the gesture began. Moves append
/// points; the gesture classifier later decides whether the event is
/// finalized as a path (drag or leave) or as a dot (tap).
///
/// # Example
///
/// ```ignore
/// let mut recorder = DrawRecorder::new();
/// recorder.begin(Point::new(5.0, 5.0), 3, PaletteColor::Black);
/// recorder.append(Point::new(20.0, 5.0))?;
/// let event = recorder.finish_path()?;
/// history.commit(event);
/// ```
#[derive(Debug, Default)]
pub struct DrawRecorder {
    /// Event under construction (None between gestures)
    pending: Option<DrawEvent>,
}

impl DrawRecorder {
    /// Create a new recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an event is in progress.
    pub fn is_recording(&self) -> bool {
        self.pending.is_some()
    }

    /// The event in progress, if any.
    pub fn pending(&self) -> Option<&DrawEvent> {
        self.pending.as_ref()
    }

    /// Start a new event at `start`.
    ///
    /// Any event still pending is replaced. This happens when a second press
    /// arrives before the click that would have finalized a tap, as with the
    /// compatibility mouse events browsers send after a touch.
    pub fn begin(&mut self, start: Point, pen_width: u32, color: PaletteColor) {
        if let Some(stale) = self.pending.take() {
            trace!(
                "begin: replacing pending {:?} event with {} points",
                stale.kind(),
                stale.points().len()
            );
        }
        self.pending = Some(DrawEvent::path(vec![start], pen_width, color));
    }

    /// Append a point to the event in progress.
    ///
    /// Returns `Ok(false)` when the point repeats the last recorded one.
    pub fn append(&mut self, point: Point) -> Result<bool, RecorderError> {
        let event = self.pending.as_mut().ok_or(RecorderError::NotStarted)?;
        if event.last_point() == Some(point) {
            return Ok(false);
        }
        event.push_point(point);
        Ok(true)
    }

    /// Finalize the event in progress as a path.
    pub fn finish_path(&mut self) -> Result<DrawEvent, RecorderError> {
        let event = self.pending.take().ok_or(RecorderError::NotStarted)?;
        debug_assert_eq!(event.kind(), DrawKind::Path);
        Ok(event)
    }

    /// Finalize the event in progress as a dot of the given radius.
    ///
    /// Only the first point is kept.
    pub fn finish_dot(&mut self, radius: u32) -> Result<DrawEvent, RecorderError> {
        let mut event = self.pending.take().ok_or(RecorderError::NotStarted)?;
        event.make_dot(radius);
        Ok(event)
    }

    /// Drop the event in progress without finalizing it.
    pub fn discard(&mut self) -> Option<DrawEvent> {
        self.pending.take()
    }
}
