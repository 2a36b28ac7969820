//! Draw-event log for the DrawWrite sketchpad.
//!
//! This module provides:
//! - [`EventLog`] - Append-only storage for committed draw events
//! - [`DrawRecorder`] - Helper for building the event of the current gesture
//!
//! Events are the unit of undo: every committed gesture is exactly one
//! entry, whether it rendered as a dot, a path, or nothing at all.

mod recorder;
mod storage;

pub use recorder::{DrawRecorder, RecorderError};
pub use storage::EventLog;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::PaletteColor;
    use crate::types::{DrawEvent, DrawKind, Point};

    #[test]
    fn test_event_log_append_and_pop() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.append(DrawEvent::dot(Point::new(1.0, 1.0), 2, PaletteColor::Black));
        log.append(DrawEvent::dot(Point::new(2.0, 2.0), 2, PaletteColor::Red));
        log.append(DrawEvent::dot(Point::new(3.0, 3.0), 2, PaletteColor::Blue));
        assert_eq!(log.len(), 3);

        let tail = log.tail(2);
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].color(), PaletteColor::Red);
        assert_eq!(tail[1].color(), PaletteColor::Blue);
        // Oversized tail is the whole log
        assert_eq!(log.tail(10).len(), 3);
        assert!(log.tail(0).is_empty());

        let popped = log.pop().unwrap();
        assert_eq!(popped.color(), PaletteColor::Blue);
        assert_eq!(log.last().map(|e| e.color()), Some(PaletteColor::Red));
        assert_eq!(log.iter().count(), 2);
    }

    #[test]
    fn test_recorder_path() {
        let mut recorder = DrawRecorder::new();
        recorder.begin(Point::new(5.0, 5.0), 3, PaletteColor::Brown);
        assert!(recorder.is_recording());

        assert!(recorder.append(Point::new(20.0, 5.0)).unwrap());
        // Repeated point is not recorded
        assert!(!recorder.append(Point::new(20.0, 5.0)).unwrap());
        assert!(recorder.append(Point::new(20.0, 9.0)).unwrap());

        let event = recorder.finish_path().unwrap();
        assert!(!recorder.is_recording());
        assert_eq!(event.kind(), DrawKind::Path);
        assert_eq!(event.radius(), 3);
        assert_eq!(event.color(), PaletteColor::Brown);
        assert_eq!(
            event.points(),
            &[Point::new(5.0, 5.0), Point::new(20.0, 5.0), Point::new(20.0, 9.0)]
        );
    }

    #[test]
    fn test_recorder_dot() {
        let mut recorder = DrawRecorder::new();
        recorder.begin(Point::new(7.0, 8.0), 5, PaletteColor::Pink);

        let event = recorder.finish_dot(3).unwrap();
        assert_eq!(event.kind(), DrawKind::Dot);
        assert_eq!(event.radius(), 3);
        assert_eq!(event.points(), &[Point::new(7.0, 8.0)]);
        assert_eq!(event.color(), PaletteColor::Pink);
    }

    #[test]
    fn test_recorder_not_started() {
        let mut recorder = DrawRecorder::new();
        assert!(matches!(
            recorder.append(Point::new(1.0, 1.0)),
            Err(RecorderError::NotStarted)
        ));
        assert!(recorder.finish_path().is_err());
        assert!(recorder.finish_dot(2).is_err());
    }

    #[test]
    fn test_recorder_begin_replaces_pending() {
        let mut recorder = DrawRecorder::new();
        recorder.begin(Point::new(1.0, 1.0), 3, PaletteColor::Black);
        recorder.begin(Point::new(9.0, 9.0), 4, PaletteColor::Green);

        let event = recorder.finish_path().unwrap();
        assert_eq!(event.points(), &[Point::new(9.0, 9.0)]);
        assert_eq!(event.color(), PaletteColor::Green);
        assert!(recorder.discard().is_none());
    }
}
