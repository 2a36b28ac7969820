//! Dirty region tracking for incremental uploads

use tracing::trace;

use super::RasterSurface;
use crate::constants::BYTES_PER_PIXEL;

/// A pixel-aligned rectangle (x, y, width, height)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl DirtyRect {
    /// Exclusive right edge
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Smallest rectangle containing both
    pub fn union(self, other: DirtyRect) -> DirtyRect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        DirtyRect {
            x,
            y,
            width: self.right().max(other.right()) - x,
            height: self.bottom().max(other.bottom()) - y,
        }
    }
}

impl RasterSurface {
    /// Add a region to the dirty area
    pub fn mark_region_dirty(&mut self, region: DirtyRect) {
        if region.width == 0 || region.height == 0 {
            return;
        }
        self.dirty = Some(match self.dirty {
            Some(existing) => existing.union(region),
            None => region,
        });
        trace!("mark_region_dirty: {:?} -> {:?}", region, self.dirty);
    }

    /// Mark the whole surface dirty (after clear or restore)
    pub fn mark_all_dirty(&mut self) {
        self.dirty = Some(DirtyRect {
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        });
    }

    /// Get the dirty region and clear it
    pub fn take_dirty_region(&mut self) -> Option<DirtyRect> {
        self.dirty.take()
    }

    /// Check if anything changed since the last `take_dirty_region`
    #[inline]
    pub fn has_dirty_region(&self) -> bool {
        self.dirty.is_some()
    }

    /// Get pixel bytes for a rectangular region
    /// Returns RGBA8 bytes in row-major order; the region is clamped to surface bounds
    pub fn region_bytes(&self, region: DirtyRect) -> Vec<u8> {
        let x_end = region.right().min(self.width);
        let y_end = region.bottom().min(self.height);
        let x_start = region.x.min(x_end);
        let row_len = (x_end - x_start) as usize;

        let mut data =
            Vec::with_capacity(row_len * (y_end.saturating_sub(region.y)) as usize * BYTES_PER_PIXEL);
        for y in region.y..y_end {
            let start = self.index(x_start, y);
            let row = &self.pixels[start..start + row_len];
            data.extend_from_slice(bytemuck::cast_slice(row));
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn test_union() {
        let a = DirtyRect { x: 2, y: 2, width: 3, height: 3 };
        let b = DirtyRect { x: 10, y: 0, width: 2, height: 1 };
        assert_eq!(a.union(b), DirtyRect { x: 2, y: 0, width: 10, height: 5 });
    }

    #[test]
    fn test_drawing_marks_dirty() {
        let mut surface = RasterSurface::new(50, 50).unwrap();
        assert!(!surface.has_dirty_region());

        surface.fill_disc(Point::new(10.0, 10.0), 2.0, [0, 0, 0, 255]);
        surface.fill_disc(Point::new(30.0, 20.0), 2.0, [0, 0, 0, 255]);

        let dirty = surface.take_dirty_region().unwrap();
        assert_eq!(dirty, DirtyRect { x: 8, y: 8, width: 24, height: 14 });

        // After taking, should be empty
        assert!(!surface.has_dirty_region());
    }

    #[test]
    fn test_region_bytes() {
        let mut surface = RasterSurface::new(4, 4).unwrap();
        surface.set_pixel(1, 1, [1, 2, 3, 4]);
        surface.set_pixel(2, 2, [5, 6, 7, 8]);

        let bytes = surface.region_bytes(DirtyRect { x: 1, y: 1, width: 2, height: 2 });
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[0..4], &[1, 2, 3, 4]);
        assert_eq!(&bytes[12..16], &[5, 6, 7, 8]);

        // Clamped at the edges
        let clamped = surface.region_bytes(DirtyRect { x: 3, y: 3, width: 10, height: 10 });
        assert_eq!(clamped.len(), 4);
    }
}
