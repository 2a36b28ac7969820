//! CPU raster surface for the sketchpad - RGBA8 storage
//!
//! The surface is the only pixel store of a sketchpad. It exposes the two
//! drawing primitives the renderer needs (stroke a segment, fill a disc),
//! whole-surface snapshot/restore for the undo history, and dirty-region
//! tracking so a host only re-uploads the pixels that changed.

mod dirty_tracking;
mod raster;
mod snapshot;

pub use dirty_tracking::DirtyRect;
pub use snapshot::{Snapshot, SurfaceError};

use crate::types::Rgba;
use crate::validation::{ValidationError, validate_dimensions};

/// An RGBA8 CPU surface
/// Stores pixels as [u8; 4] in row-major order
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
    /// Union of regions modified since the last `take_dirty_region`
    dirty: Option<DirtyRect>,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl RasterSurface {
    /// Create a new surface with the given dimensions, initialized to transparent black
    pub fn new(width: u32, height: u32) -> Result<Self, ValidationError> {
        validate_dimensions(width, height)?;
        let pixel_count = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 0]; pixel_count],
            dirty: None,
        })
    }

    /// Create a new surface filled with a solid color
    pub fn filled(width: u32, height: u32, color: Rgba) -> Result<Self, ValidationError> {
        let mut surface = Self::new(width, height)?;
        surface.clear(color);
        Ok(surface)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Clear the surface to a solid color
    pub fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color);
        self.mark_all_dirty();
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Blend a color onto an existing pixel (source-over)
    /// Opaque colors simply replace the pixel
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = self.index(x, y);
        let src_alpha = color[3] as u32;
        if src_alpha == 255 {
            self.pixels[index] = color;
            return;
        }
        if src_alpha == 0 {
            return;
        }

        let dst = self.pixels[index];
        let inv_alpha = 255 - src_alpha;
        let mix = |s: u8, d: u8| ((s as u32 * src_alpha + d as u32 * inv_alpha + 127) / 255) as u8;
        self.pixels[index] = [
            mix(color[0], dst[0]),
            mix(color[1], dst[1]),
            mix(color[2], dst[2]),
            (src_alpha + (dst[3] as u32 * inv_alpha + 127) / 255) as u8,
        ];
    }

    /// Raw pixel bytes (RGBA8, row-major), suitable for `ImageData` or PNG encoding
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Count pixels that differ from `color`
    pub fn count_pixels_not(&self, color: Rgba) -> usize {
        self.pixels.iter().filter(|p| **p != color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba = [255, 255, 255, 255];

    #[test]
    fn test_new_surface() {
        let surface = RasterSurface::new(100, 100).unwrap();
        assert_eq!(surface.width(), 100);
        assert_eq!(surface.height(), 100);
        assert_eq!(surface.pixel_count(), 10000);
        assert!(RasterSurface::new(0, 100).is_err());
    }

    #[test]
    fn test_get_set_pixel() {
        let mut surface = RasterSurface::new(10, 10).unwrap();
        let color = [255, 128, 64, 255];

        surface.set_pixel(5, 5, color);
        assert_eq!(surface.get_pixel(5, 5), Some(color));

        // Out of bounds should return None
        assert_eq!(surface.get_pixel(100, 100), None);
        surface.set_pixel(100, 100, color);
    }

    #[test]
    fn test_clear() {
        let mut surface = RasterSurface::new(10, 10).unwrap();
        surface.clear(WHITE);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(surface.get_pixel(x, y), Some(WHITE));
            }
        }
        assert_eq!(surface.count_pixels_not(WHITE), 0);
    }

    #[test]
    fn test_blend_pixel() {
        let mut surface = RasterSurface::filled(10, 10, WHITE).unwrap();

        // Blend ~50% opaque red
        surface.blend_pixel(5, 5, [255, 0, 0, 128]);

        let result = surface.get_pixel(5, 5).unwrap();
        assert_eq!(result[0], 255);
        assert!((result[1] as i32 - 127).abs() <= 1);
        assert!((result[2] as i32 - 127).abs() <= 1);
        assert_eq!(result[3], 255);

        // Opaque colors replace
        surface.blend_pixel(1, 1, [0, 0, 255, 255]);
        assert_eq!(surface.get_pixel(1, 1), Some([0, 0, 255, 255]));
    }

    #[test]
    fn test_as_bytes() {
        let surface = RasterSurface::new(2, 2).unwrap();
        // 4 pixels * 4 bytes
        assert_eq!(surface.as_bytes().len(), 16);
    }
}
