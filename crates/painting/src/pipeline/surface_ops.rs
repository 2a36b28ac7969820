//! Surface operations for the sketchpad pipeline

use crate::export;
use crate::surface::{DirtyRect, RasterSurface};
use crate::types::Rgba;

use super::{Sketchpad, SketchpadError};

impl Sketchpad {
    /// Read-only access to the pixels
    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    /// Take the region changed since the last call
    ///
    /// Hosts blit this region after every input; after an undo it covers the
    /// whole surface.
    pub fn take_dirty_region(&mut self) -> Option<DirtyRect> {
        self.surface.take_dirty_region()
    }

    /// Check if there is a dirty region
    pub fn has_dirty_region(&self) -> bool {
        self.surface.has_dirty_region()
    }

    /// Get RGBA8 bytes for a region (clamped to surface bounds)
    pub fn region_bytes(&self, region: DirtyRect) -> Vec<u8> {
        self.surface.region_bytes(region)
    }

    /// Get a single pixel's color
    ///
    /// Returns None if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.surface.get_pixel(x, y)
    }

    /// Encode the current drawing as PNG
    pub fn export_png(&self) -> Result<Vec<u8>, SketchpadError> {
        Ok(export::encode_png(&self.surface)?)
    }

    /// Encode the current drawing as a `data:image/png;base64,...` URL
    ///
    /// This is a one-shot copy for the submission form; it holds no
    /// reference to the live surface.
    pub fn export_data_url(&self) -> Result<String, SketchpadError> {
        Ok(export::to_data_url(&self.surface)?)
    }
}
