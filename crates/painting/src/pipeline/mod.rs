//! Complete sketchpad pipeline
//!
//! This module provides the drawing instance that connects:
//! - Input handling (normalized pointer events from the host page)
//! - Gesture classification (click versus drag)
//! - Draw-event recording
//! - Raster surface (live drawing and replay)
//! - Undo history (event log plus sparse snapshots)
//!
//! The pipeline is designed to be driven from browser event callbacks but
//! does not depend on the DOM itself.

mod input;
mod surface_ops;
mod undo;

use std::num::NonZeroUsize;

use drawwrite_config::{ConfigError, SketchpadConfig};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::export::ExportError;
use crate::gesture::GestureClassifier;
use crate::history::UndoHistory;
use crate::log::DrawRecorder;
use crate::style::{PaletteColor, PenWidth, StyleState};
use crate::surface::RasterSurface;
use crate::types::Tool;
use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum SketchpadError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// A drawing surface with its style, gesture state and undo history
///
/// This struct manages the full drawing workflow:
/// 1. Input comes in via `handle_input`
/// 2. The gesture classifier decides what the input means
/// 3. The recorder builds the event of the current gesture
/// 4. Segments and dots are drawn onto the surface
/// 5. Finalized events are committed to the undo history
pub struct Sketchpad {
    /// Pixels
    pub(crate) surface: RasterSurface,
    pub(crate) style: StyleState,
    pub(crate) classifier: GestureClassifier,
    /// Event of the current gesture
    pub(crate) recorder: DrawRecorder,
    pub(crate) history: UndoHistory,
    pub(crate) background: PaletteColor,
}

impl std::fmt::Debug for Sketchpad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sketchpad")
            .field("surface", &self.surface)
            .field("style", &self.style)
            .field("gesture", &self.classifier.state())
            .field("events", &self.history.event_count())
            .field("snapshots", &self.history.snapshot_count())
            .finish()
    }
}

impl Sketchpad {
    /// Create a sketchpad from a configuration
    pub fn new(config: &SketchpadConfig) -> Result<Self, SketchpadError> {
        config.validate()?;

        let color = PaletteColor::from_name(&config.color)?;
        let background = PaletteColor::from_name(&config.background)?;
        let pen_width = PenWidth::new(config.pen_width)?;
        let tool = if config.draw_tool_active {
            Tool::Draw
        } else {
            Tool::Hand
        };
        let interval = NonZeroUsize::new(config.checkpoint_interval)
            .ok_or(ConfigError::InvalidCheckpointInterval)?;

        let surface = RasterSurface::filled(config.width, config.height, background.rgba())?;

        info!(
            "Sketchpad created: {}x{}, checkpoint every {} events",
            config.width, config.height, interval
        );

        Ok(Self {
            surface,
            style: StyleState::new(tool, color, pen_width),
            classifier: GestureClassifier::new(),
            recorder: DrawRecorder::new(),
            history: UndoHistory::new(interval),
            background,
        })
    }

    /// Create a sketchpad of the given size with default style
    pub fn with_size(width: u32, height: u32) -> Result<Self, SketchpadError> {
        Self::new(&SketchpadConfig::new(width, height))
    }

    /// Get the surface width
    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    /// Get the surface height
    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn style(&self) -> &StyleState {
        &self.style
    }

    pub fn tool(&self) -> Tool {
        self.style.tool()
    }

    pub fn background(&self) -> PaletteColor {
        self.background
    }

    /// Set the pen color
    ///
    /// A gesture already in progress keeps the color it started with.
    pub fn set_color(&mut self, color: PaletteColor) {
        debug!("Pen color -> {}", color);
        self.style.set_color(color);
    }

    /// Set the pen color by swatch name or hex string
    pub fn set_color_named(&mut self, name: &str) -> Result<(), SketchpadError> {
        let color = PaletteColor::from_name(name)?;
        self.set_color(color);
        Ok(())
    }

    /// Set the pen width (must be positive)
    pub fn set_pen_width(&mut self, width: u32) -> Result<(), SketchpadError> {
        self.style.set_pen_width(width)?;
        debug!("Pen width -> {}", width);
        Ok(())
    }

    /// Current pen width readout, e.g. `"3 px"`
    pub fn pen_width_label(&self) -> String {
        self.style.pen_width().label()
    }

    /// Switch between the draw and hand tools
    ///
    /// Ignored while a gesture is painting or waiting for its click, so a
    /// gesture always finishes under the tool it started with. Returns the
    /// tool active afterwards.
    pub fn toggle_tool(&mut self) -> Tool {
        if !self.classifier.is_idle() {
            warn!(
                "Tool switch ignored during gesture ({:?})",
                self.classifier.state()
            );
            return self.style.tool;
        }
        self.style.tool = self.style.tool.toggled();
        debug!("Tool -> {:?}", self.style.tool);
        self.style.tool
    }

    /// Whether a gesture is painting or waiting for its click
    pub fn is_gesture_active(&self) -> bool {
        !self.classifier.is_idle()
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::{GestureAction, InputEvent};
    use crate::types::{DrawKind, Point, Rgba};

    const WHITE: Rgba = [255, 255, 255, 255];

    fn drawing_pad(width: u32, height: u32, interval: usize) -> Sketchpad {
        let mut config = SketchpadConfig::new(width, height).with_checkpoint_interval(interval);
        config.draw_tool_active = true;
        Sketchpad::new(&config).unwrap()
    }

    fn tap(pad: &mut Sketchpad, at: Point) {
        pad.handle_input(InputEvent::Press(at));
        pad.handle_input(InputEvent::Release);
        pad.handle_input(InputEvent::Click(at));
    }

    fn drag(pad: &mut Sketchpad, points: &[Point]) {
        pad.handle_input(InputEvent::Press(points[0]));
        for p in &points[1..] {
            pad.handle_input(InputEvent::Move(*p));
        }
        pad.handle_input(InputEvent::Release);
        pad.handle_input(InputEvent::Click(points[points.len() - 1]));
    }

    fn reference(pad: &Sketchpad) -> RasterSurface {
        let mut surface =
            RasterSurface::filled(pad.width(), pad.height(), pad.background().rgba()).unwrap();
        crate::render::replay(&mut surface, pad.history().log());
        surface
    }

    #[test]
    fn test_sketchpad_creation() {
        let pad = Sketchpad::with_size(256, 128).unwrap();
        assert_eq!(pad.width(), 256);
        assert_eq!(pad.height(), 128);
        assert_eq!(pad.tool(), Tool::Hand);
        assert_eq!(pad.style().color(), PaletteColor::Black);
        assert_eq!(pad.pen_width_label(), "3 px");
        // Background is filled white
        assert_eq!(pad.surface().count_pixels_not(WHITE), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = SketchpadConfig::new(64, 64);
        config.color = "mauve".to_string();
        assert!(matches!(
            Sketchpad::new(&config),
            Err(SketchpadError::Validation(ValidationError::UnknownColor(_)))
        ));
        assert!(matches!(
            Sketchpad::new(&SketchpadConfig::new(64, 0)),
            Err(SketchpadError::Config(_))
        ));
    }

    #[test]
    fn test_click_makes_one_dot() {
        let mut pad = drawing_pad(64, 64, 50);
        tap(&mut pad, Point::new(5.0, 5.0));

        let log = pad.history().log();
        assert_eq!(log.len(), 1);
        let event = log.last().unwrap();
        assert_eq!(event.kind(), DrawKind::Dot);
        assert_eq!(event.points(), &[Point::new(5.0, 5.0)]);
        assert_eq!(event.radius(), 2);
        assert_eq!(pad.get_pixel(5, 5), Some(PaletteColor::Black.rgba()));
    }

    #[test]
    fn test_drag_makes_one_path() {
        let mut pad = drawing_pad(64, 64, 50);
        drag(&mut pad, &[Point::new(5.0, 5.0), Point::new(20.0, 5.0)]);

        let log = pad.history().log();
        assert_eq!(log.len(), 1);
        let event = log.last().unwrap();
        assert_eq!(event.kind(), DrawKind::Path);
        assert_eq!(event.points(), &[Point::new(5.0, 5.0), Point::new(20.0, 5.0)]);
        assert_eq!(event.radius(), 3);
        assert_eq!(pad.get_pixel(12, 5), Some(PaletteColor::Black.rgba()));
    }

    #[test]
    fn test_leave_without_move_records_empty_path() {
        let mut pad = drawing_pad(64, 64, 50);
        pad.handle_input(InputEvent::Press(Point::new(5.0, 5.0)));
        assert_eq!(pad.handle_input(InputEvent::Leave), GestureAction::CommitPath);

        let event = pad.history().log().last().unwrap();
        assert_eq!(event.kind(), DrawKind::Path);
        assert_eq!(event.points().len(), 1);
        assert_eq!(event.segment_count(), 0);
        assert_eq!(pad.surface().count_pixels_not(WHITE), 0);

        // It still takes an undo slot
        assert!(pad.undo());
        assert_eq!(pad.history().event_count(), 0);
    }

    #[test]
    fn test_hand_tool_draws_nothing() {
        let mut pad = Sketchpad::with_size(64, 64).unwrap();
        drag(&mut pad, &[Point::new(5.0, 5.0), Point::new(20.0, 20.0)]);
        tap(&mut pad, Point::new(30.0, 30.0));
        assert_eq!(pad.history().event_count(), 0);
        assert_eq!(pad.history().snapshot_count(), 0);
        assert_eq!(pad.surface().count_pixels_not(WHITE), 0);
    }

    #[test]
    fn test_tool_switch_blocked_mid_gesture() {
        let mut pad = drawing_pad(64, 64, 50);
        pad.handle_input(InputEvent::Press(Point::new(5.0, 5.0)));
        assert_eq!(pad.toggle_tool(), Tool::Draw);

        pad.handle_input(InputEvent::Release);
        // Still waiting for the click
        assert_eq!(pad.toggle_tool(), Tool::Draw);

        pad.handle_input(InputEvent::Click(Point::new(5.0, 5.0)));
        assert_eq!(pad.toggle_tool(), Tool::Hand);
        assert_eq!(pad.toggle_tool(), Tool::Draw);
    }

    #[test]
    fn test_color_change_mid_gesture_keeps_start_color() {
        let mut pad = drawing_pad(64, 64, 50);
        pad.handle_input(InputEvent::Press(Point::new(5.0, 5.0)));
        pad.set_color(PaletteColor::Red);
        pad.handle_input(InputEvent::Move(Point::new(30.0, 5.0)));
        pad.handle_input(InputEvent::Release);

        let event = pad.history().log().last().unwrap();
        assert_eq!(event.color(), PaletteColor::Black);
        assert_eq!(pad.get_pixel(20, 5), Some(PaletteColor::Black.rgba()));

        // The next gesture picks up the new color
        tap(&mut pad, Point::new(40.0, 40.0));
        assert_eq!(pad.get_pixel(40, 40), Some(PaletteColor::Red.rgba()));
    }

    #[test]
    fn test_set_pen_width() {
        let mut pad = drawing_pad(64, 64, 50);
        assert!(pad.set_pen_width(0).is_err());
        pad.set_pen_width(8).unwrap();
        assert_eq!(pad.pen_width_label(), "8 px");

        tap(&mut pad, Point::new(30.0, 30.0));
        assert_eq!(pad.history().log().last().unwrap().radius(), 4);
    }

    #[test]
    fn test_set_color_named() {
        let mut pad = drawing_pad(64, 64, 50);
        pad.set_color_named("royal-blue").unwrap();
        assert_eq!(pad.style().color(), PaletteColor::RoyalBlue);
        assert!(pad.set_color_named("beige").is_err());
        assert_eq!(pad.style().color(), PaletteColor::RoyalBlue);
    }

    #[test]
    fn test_undo_inverse_property() {
        let mut pad = drawing_pad(48, 48, 3);
        for i in 0..11 {
            let offset = (i * 4) as f32 + 2.0;
            pad.set_color(PaletteColor::ALL[i % PaletteColor::ALL.len()]);
            if i % 2 == 0 {
                tap(&mut pad, Point::new(offset, offset));
            } else {
                drag(
                    &mut pad,
                    &[
                        Point::new(offset, 1.0),
                        Point::new(offset, 20.0),
                        Point::new(46.0 - offset, 40.0),
                    ],
                );
            }
        }
        assert_eq!(pad.history().event_count(), 11);
        assert_eq!(pad.surface().pixels(), reference(&pad).pixels());

        while pad.history().event_count() > 0 {
            assert!(pad.undo());
            assert_eq!(pad.surface().pixels(), reference(&pad).pixels());
        }
    }

    #[test]
    fn test_undo_floor_is_idempotent() {
        let mut pad = drawing_pad(32, 32, 50);
        tap(&mut pad, Point::new(10.0, 10.0));
        assert!(pad.undo());

        let blank = pad.surface().snapshot();
        for _ in 0..5 {
            assert!(!pad.undo());
            assert_eq!(pad.surface().snapshot(), blank);
        }
    }

    #[test]
    fn test_undo_ignored_mid_gesture() {
        let mut pad = drawing_pad(64, 64, 50);
        tap(&mut pad, Point::new(10.0, 10.0));

        pad.handle_input(InputEvent::Press(Point::new(30.0, 30.0)));
        pad.handle_input(InputEvent::Move(Point::new(40.0, 30.0)));
        assert!(!pad.undo());
        pad.handle_input(InputEvent::Release);

        assert_eq!(pad.history().event_count(), 2);
        assert!(pad.undo());
        assert_eq!(pad.history().event_count(), 1);
        assert_eq!(pad.surface().pixels(), reference(&pad).pixels());
    }

    #[test]
    fn test_superseded_tap_takes_no_extra_checkpoint() {
        let mut pad = drawing_pad(32, 32, 50);
        // Touch tap followed by the compatibility mouse sequence
        pad.handle_input(InputEvent::Press(Point::new(10.0, 10.0)));
        pad.handle_input(InputEvent::Release);
        tap(&mut pad, Point::new(10.0, 10.0));

        assert_eq!(pad.history().event_count(), 1);
        assert_eq!(pad.history().snapshot_count(), 1);
    }
}
