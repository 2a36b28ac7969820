//! Shared configuration for DrawWrite
//!
//! This crate provides the single source of truth for the sketchpad's surface
//! dimensions, initial pen style and undo checkpoint interval, shared between
//! the painting core and the browser binding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default surface width in pixels (the browser binding uses the host width)
pub const DEFAULT_WIDTH: u32 = 800;

/// Default surface height in pixels
pub const DEFAULT_HEIGHT: u32 = 500;

/// Number of committed draw events between full-surface snapshots
pub const DEFAULT_CHECKPOINT_INTERVAL: usize = 50;

/// Default pen width in pixels
pub const DEFAULT_PEN_WIDTH: u32 = 3;

/// Palette name of the initial pen color
pub const DEFAULT_COLOR: &str = "black";

/// Palette name of the background fill
pub const DEFAULT_BACKGROUND: &str = "white";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Checkpoint interval must be at least 1")]
    InvalidCheckpointInterval,
    #[error("Invalid pen width: {0}")]
    InvalidPenWidth(u32),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Sketchpad configuration
///
/// Every field has a default, so a JSON override only needs to name the
/// fields it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
    /// Committed events between snapshots
    pub checkpoint_interval: usize,
    /// Initial pen width in pixels
    pub pen_width: u32,
    /// Initial pen color (palette name)
    pub color: String,
    /// Background fill (palette name)
    pub background: String,
    /// Start with the draw tool selected instead of the hand tool
    pub draw_tool_active: bool,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
            pen_width: DEFAULT_PEN_WIDTH,
            color: DEFAULT_COLOR.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            draw_tool_active: false,
        }
    }
}

impl SketchpadConfig {
    /// Create a config with the given surface dimensions and default style
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the surface width, keeping everything else
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Replace the checkpoint interval, keeping everything else
    pub fn with_checkpoint_interval(mut self, interval: usize) -> Self {
        self.checkpoint_interval = interval;
        self
    }

    /// Check that dimensions, interval and pen width are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.checkpoint_interval == 0 {
            return Err(ConfigError::InvalidCheckpointInterval);
        }
        if self.pen_width == 0 {
            return Err(ConfigError::InvalidPenWidth(self.pen_width));
        }
        Ok(())
    }
}
