//! Event-log renderer
//!
//! Maps a [`DrawEvent`] onto raster surface mutations. The same code path
//! draws live gestures and replays history during undo, using only the color
//! and radius stored on the event. Nothing here reads or writes the current
//! pen style, so replay cannot leak a historical color into live drawing.

use tracing::trace;

use crate::surface::RasterSurface;
use crate::types::{DrawEvent, DrawKind, Point};

/// Draw one event; returns the number of primitives (discs or segments) drawn
pub fn render_event(surface: &mut RasterSurface, event: &DrawEvent) -> usize {
    let color = event.color().rgba();
    match event.kind() {
        DrawKind::Dot => {
            let Some(&center) = event.points().first() else {
                return 0;
            };
            surface.fill_disc(center, event.radius() as f32, color);
            1
        }
        DrawKind::Path => {
            let width = event.radius() as f32;
            let mut drawn = 0;
            // A single-point path has no segments and draws nothing
            for pair in event.points().windows(2) {
                surface.stroke_segment(pair[0], pair[1], width, color);
                drawn += 1;
            }
            drawn
        }
    }
}

/// Draw one segment of an in-progress path with the event's own width and color
pub fn render_segment(surface: &mut RasterSurface, event: &DrawEvent, from: Point, to: Point) {
    surface.stroke_segment(from, to, event.radius() as f32, event.color().rgba());
}

/// Replay events in order; returns the total number of primitives drawn
pub fn replay<'a, I>(surface: &mut RasterSurface, events: I) -> usize
where
    I: IntoIterator<Item = &'a DrawEvent>,
{
    let mut primitives = 0;
    let mut count = 0;
    for event in events {
        primitives += render_event(surface, event);
        count += 1;
    }
    trace!("replayed {} events ({} primitives)", count, primitives);
    primitives
}
