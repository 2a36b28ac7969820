//! Hard-edged line and disc rasterization
//!
//! Pixels are covered when their center lies inside the shape. There is no
//! anti-aliasing, so drawing the same primitives in the same order always
//! produces identical pixels; undo replay relies on this.

use tracing::trace;

use super::{DirtyRect, RasterSurface};
use crate::types::{Point, Rgba};

impl RasterSurface {
    /// Fill a disc centered at `center`
    /// Returns the affected region, or None if the disc misses the surface
    pub fn fill_disc(&mut self, center: Point, radius: f32, color: Rgba) -> Option<DirtyRect> {
        if radius <= 0.0 {
            return None;
        }

        let region = self.clamp_bounds(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )?;

        let radius_sq = radius * radius;
        for py in region.y..region.y + region.height {
            for px in region.x..region.x + region.width {
                let dx = (px as f32 + 0.5) - center.x;
                let dy = (py as f32 + 0.5) - center.y;
                if dx * dx + dy * dy <= radius_sq {
                    self.blend_pixel(px, py, color);
                }
            }
        }

        trace!(
            "fill_disc: center=({:.1}, {:.1}), radius={:.1} -> {:?}",
            center.x, center.y, radius, region
        );
        self.mark_region_dirty(region);
        Some(region)
    }

    /// Stroke a line segment of the given width with round ends
    /// Returns the affected region, or None if the segment misses the surface
    pub fn stroke_segment(
        &mut self,
        from: Point,
        to: Point,
        width: f32,
        color: Rgba,
    ) -> Option<DirtyRect> {
        if width <= 0.0 {
            return None;
        }
        let half = width / 2.0;

        let region = self.clamp_bounds(
            from.x.min(to.x) - half,
            from.y.min(to.y) - half,
            from.x.max(to.x) + half,
            from.y.max(to.y) + half,
        )?;

        let half_sq = half * half;
        for py in region.y..region.y + region.height {
            for px in region.x..region.x + region.width {
                let sample = Point::new(px as f32 + 0.5, py as f32 + 0.5);
                if distance_sq_to_segment(sample, from, to) <= half_sq {
                    self.blend_pixel(px, py, color);
                }
            }
        }

        trace!(
            "stroke_segment: ({:.1}, {:.1}) -> ({:.1}, {:.1}), width={:.1} -> {:?}",
            from.x, from.y, to.x, to.y, width, region
        );
        self.mark_region_dirty(region);
        Some(region)
    }

    /// Clamp a float bounding box to whole pixels inside the surface
    fn clamp_bounds(&self, x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Option<DirtyRect> {
        let x0 = (x_min.floor().max(0.0) as u32).min(self.width);
        let y0 = (y_min.floor().max(0.0) as u32).min(self.height);
        let x1 = (x_max.ceil().max(0.0) as u32).min(self.width);
        let y1 = (y_max.ceil().max(0.0) as u32).min(self.height);

        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        Some(DirtyRect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        })
    }
}

/// Squared distance from `p` to the segment `a`-`b`
#[inline]
pub(crate) fn distance_sq_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;

    let t = if len_sq > 0.0 {
        (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let cx = a.x + t * dx - p.x;
    let cy = a.y + t * dy - p.y;
    cx * cx + cy * cy
}
