//! Whole-surface snapshots for the undo history

use thiserror::Error;

use super::RasterSurface;
use crate::constants::BYTES_PER_PIXEL;
use crate::types::Rgba;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Snapshot is {snapshot_width}x{snapshot_height} but surface is {width}x{height}")]
    SizeMismatch {
        snapshot_width: u32,
        snapshot_height: u32,
        width: u32,
        height: u32,
    },
}

/// A full copy of a surface's pixels at a point in time
#[derive(Clone, PartialEq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.byte_len())
            .finish()
    }
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Memory held by the pixel copy
    pub fn byte_len(&self) -> usize {
        self.pixels.len() * BYTES_PER_PIXEL
    }
}

impl RasterSurface {
    /// Capture the whole surface
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }

    /// Overwrite the whole surface with a snapshot of the same size
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<(), SurfaceError> {
        if snapshot.width != self.width || snapshot.height != self.height {
            return Err(SurfaceError::SizeMismatch {
                snapshot_width: snapshot.width,
                snapshot_height: snapshot.height,
                width: self.width,
                height: self.height,
            });
        }
        self.pixels.copy_from_slice(&snapshot.pixels);
        self.mark_all_dirty();
        Ok(())
    }
}
