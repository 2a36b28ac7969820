//! DrawWrite sketchpad core - gestures, draw events and undo
//!
//! This crate provides the drawing surface used by the game's drawing turns:
//! - [`gesture`] - Click versus drag classification of pointer input
//! - [`log`] - Draw-event recorder and append-only event log
//! - [`render`] - Renders draw events onto the surface (live and replay)
//! - [`history`] - Hybrid snapshot/replay undo
//! - [`surface`] - CPU RGBA8 raster surface with dirty tracking
//! - [`style`] - Palette, pen width and tool
//! - [`export`] - PNG / data URL export for submission
//! - [`pipeline`] - The [`Sketchpad`] tying it all together

pub mod constants;
pub mod export;
pub mod gesture;
pub mod history;
pub mod log;
pub mod pipeline;
pub mod render;
pub mod style;
pub mod surface;
pub mod types;
pub mod validation;

pub use constants::*;
pub use export::*;
pub use gesture::*;
pub use history::*;
pub use log::*;
pub use pipeline::*;
pub use style::*;
pub use surface::*;
pub use types::*;
pub use validation::*;
