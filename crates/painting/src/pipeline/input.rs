//! Input handling for the sketchpad pipeline

use tracing::{debug, trace};

use crate::gesture::{GestureAction, InputEvent};
use crate::render;

use super::Sketchpad;

impl Sketchpad {
    /// Feed one normalized pointer input through the gesture classifier
    ///
    /// Returns the action taken; hosts use
    /// [`GestureAction::consumes_input`] to decide whether to suppress the
    /// platform default for the input.
    pub fn handle_input(&mut self, input: InputEvent) -> GestureAction {
        let action = self.classifier.dispatch(input, self.style.tool);
        self.apply(action);
        action
    }

    fn apply(&mut self, action: GestureAction) {
        match action {
            GestureAction::Ignored | GestureAction::Stationary | GestureAction::AwaitClick => {}
            GestureAction::Begin(at) => {
                self.history.checkpoint_if_due(&self.surface);
                self.recorder
                    .begin(at, self.style.pen_width.get(), self.style.color);
            }
            GestureAction::Extend { from, to } => {
                if let Err(e) = self.recorder.append(to) {
                    debug!("Extend without an event in progress: {}", e);
                    return;
                }
                // Live segments use the event's own width and color so they
                // match what undo replay draws
                if let Some(event) = self.recorder.pending() {
                    render::render_segment(&mut self.surface, event, from, to);
                }
            }
            GestureAction::CommitPath => match self.recorder.finish_path() {
                Ok(event) => self.history.commit(event),
                Err(e) => debug!("CommitPath ignored: {}", e),
            },
            GestureAction::CommitDot(at) => match self.recorder.finish_dot(self.style.dot_radius()) {
                Ok(event) => {
                    trace!("Tap at ({:.1}, {:.1}) -> dot", at.x, at.y);
                    render::render_event(&mut self.surface, &event);
                    self.history.commit(event);
                }
                Err(e) => debug!("CommitDot ignored: {}", e),
            },
        }
    }
}
