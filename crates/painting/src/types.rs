use serde::{Deserialize, Serialize};

use crate::style::PaletteColor;

/// RGBA8 pixel value
pub type Rgba = [u8; 4];

/// A position in surface-local pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Offset of the surface's top-left corner in page (device) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceOffset {
    pub left: f32,
    pub top: f32,
}

impl SurfaceOffset {
    pub const fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    /// Convert a page coordinate into a surface-local point
    #[inline]
    pub fn to_local(&self, page_x: f32, page_y: f32) -> Point {
        Point::new(page_x - self.left, page_y - self.top)
    }
}

/// Active tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Tool {
    Draw,
    /// Pointer input passes through to the page
    #[default]
    Hand,
}

impl Tool {
    /// The other tool
    pub fn toggled(self) -> Self {
        match self {
            Tool::Draw => Tool::Hand,
            Tool::Hand => Tool::Draw,
        }
    }
}

/// What a draw event renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawKind {
    /// Filled disc at a single point
    Dot,
    /// Line segments between consecutive points
    Path,
}

/// A finalized drawing gesture
///
/// Color and radius are captured when the gesture begins and never change
/// afterwards, so replaying the event does not depend on the current style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawEvent {
    kind: DrawKind,
    points: Vec<Point>,
    /// Stroke width for paths, disc radius for dots
    radius: u32,
    color: PaletteColor,
}

impl DrawEvent {
    pub fn new(kind: DrawKind, points: Vec<Point>, radius: u32, color: PaletteColor) -> Self {
        Self {
            kind,
            points,
            radius,
            color,
        }
    }

    /// A single-point dot event
    pub fn dot(at: Point, radius: u32, color: PaletteColor) -> Self {
        Self::new(DrawKind::Dot, vec![at], radius, color)
    }

    /// A path event through the given points
    pub fn path(points: Vec<Point>, width: u32, color: PaletteColor) -> Self {
        Self::new(DrawKind::Path, points, width, color)
    }

    pub fn kind(&self) -> DrawKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    /// Number of line segments a path renders (always 0 for dots)
    pub fn segment_count(&self) -> usize {
        match self.kind {
            DrawKind::Dot => 0,
            DrawKind::Path => self.points.len().saturating_sub(1),
        }
    }

    pub(crate) fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub(crate) fn last_point(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Turn a pending event into a dot, keeping only its first point
    pub(crate) fn make_dot(&mut self, radius: u32) {
        self.kind = DrawKind::Dot;
        self.radius = radius;
        self.points.truncate(1);
    }
}
