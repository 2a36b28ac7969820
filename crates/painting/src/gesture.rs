//! Gesture classifier
//!
//! Browsers report a plain tap as press, release, then a synthetic click,
//! in that order. The classifier uses that ordering to decide after the fact
//! whether a gesture was a drag (finalized as a path on release) or a tap
//! (left pending on release and finalized as a dot on the click), without
//! any timing heuristics.
//!
//! The classifier only tracks state and names the action to take; the
//! [`Sketchpad`](crate::Sketchpad) carries the actions out against the
//! recorder, renderer and undo history.
//!
//! | state          | input   | action          | next state            |
//! |----------------|---------|-----------------|-----------------------|
//! | Idle           | Press   | Begin           | Painting (not dragged)|
//! | PendingClick   | Press   | Begin           | Painting (not dragged)|
//! | Painting       | Move    | Extend/Stationary | Painting            |
//! | Painting       | Release | CommitPath      | Idle (if dragged)     |
//! | Painting       | Release | AwaitClick      | PendingClick          |
//! | PendingClick   | Click   | CommitDot       | Idle                  |
//! | Painting       | Leave   | CommitPath      | Idle                  |
//!
//! Every other combination, and any input while the hand tool is active, is
//! ignored.

use tracing::trace;

use crate::types::{Point, Tool};

/// Normalized pointer input in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button or first touch pressed
    Press(Point),
    /// Pointer moved (only meaningful while pressed)
    Move(Point),
    /// Button or touch released over the surface
    Release,
    /// Pointer left the surface, or the touch was cancelled
    Leave,
    /// Synthetic click fired after a press and release
    Click(Point),
}

/// Classifier state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Pressed; `dragged` records whether the pointer has moved since
    Painting { last: Point, dragged: bool },
    /// Released without moving; waiting for the click to finalize a dot
    PendingClick,
}

/// What the sketchpad should do in response to an input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureAction {
    /// Nothing to do
    Ignored,
    /// Checkpoint if due, then start a new event at the point
    Begin(Point),
    /// Stroke the segment live and append `to` to the event
    Extend { from: Point, to: Point },
    /// Pressed move that did not change position
    Stationary,
    /// Finalize the pending event as a path and commit it
    CommitPath,
    /// Keep the event pending until the click arrives
    AwaitClick,
    /// Finalize the pending event as a dot, draw it and commit it
    CommitDot(Point),
}

impl GestureAction {
    /// Whether the host should suppress the platform default for this input
    ///
    /// Pressed moves are consumed so touch drags don't trigger swipe
    /// navigation.
    pub fn consumes_input(&self) -> bool {
        matches!(self, GestureAction::Extend { .. } | GestureAction::Stationary)
    }
}

/// Click-versus-drag state machine
#[derive(Debug, Default)]
pub struct GestureClassifier {
    state: GestureState,
}

impl GestureClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Whether the pointer is currently pressed on the surface
    pub fn is_painting(&self) -> bool {
        matches!(self.state, GestureState::Painting { .. })
    }

    /// Whether no gesture is painting or waiting for its click
    pub fn is_idle(&self) -> bool {
        matches!(self.state, GestureState::Idle)
    }

    /// Advance the state machine by one input
    pub fn dispatch(&mut self, input: InputEvent, tool: Tool) -> GestureAction {
        if tool != Tool::Draw {
            return GestureAction::Ignored;
        }

        let (next, action) = match (self.state, input) {
            // A press while a tap waits for its click supersedes the tap
            (GestureState::Idle | GestureState::PendingClick, InputEvent::Press(at)) => (
                GestureState::Painting {
                    last: at,
                    dragged: false,
                },
                GestureAction::Begin(at),
            ),
            (GestureState::Painting { last, .. }, InputEvent::Move(to)) if to != last => (
                GestureState::Painting {
                    last: to,
                    dragged: true,
                },
                GestureAction::Extend { from: last, to },
            ),
            (GestureState::Painting { .. }, InputEvent::Move(_)) => {
                (self.state, GestureAction::Stationary)
            }
            (GestureState::Painting { dragged: true, .. }, InputEvent::Release) => {
                (GestureState::Idle, GestureAction::CommitPath)
            }
            (GestureState::Painting { dragged: false, .. }, InputEvent::Release) => {
                (GestureState::PendingClick, GestureAction::AwaitClick)
            }
            (GestureState::PendingClick, InputEvent::Click(at)) => {
                (GestureState::Idle, GestureAction::CommitDot(at))
            }
            // Leaving is the only chance to finalize; there will be no click
            (GestureState::Painting { .. }, InputEvent::Leave) => {
                (GestureState::Idle, GestureAction::CommitPath)
            }
            (state, _) => (state, GestureAction::Ignored),
        };

        if next != self.state {
            trace!("gesture: {:?} + {:?} -> {:?}", self.state, input, next);
        }
        self.state = next;
        action
    }
}
