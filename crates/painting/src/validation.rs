use crate::constants::MAX_SURFACE_DIMENSION;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid pen width: {0} (must be positive)")]
    InvalidPenWidth(u32),
    #[error("Invalid surface dimensions: {width}x{height} (max {})", MAX_SURFACE_DIMENSION)]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Unknown palette color: {0}")]
    UnknownColor(String),
}

/// Validate a pen width (must be non-zero)
pub fn validate_pen_width(width: u32) -> Result<u32, ValidationError> {
    if width == 0 {
        return Err(ValidationError::InvalidPenWidth(width));
    }
    Ok(width)
}

/// Validate surface dimensions
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), ValidationError> {
    if width == 0 || height == 0 || width > MAX_SURFACE_DIMENSION || height > MAX_SURFACE_DIMENSION
    {
        return Err(ValidationError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Dot radius for a pen width: half the width, rounded up
pub fn dot_radius_for(width: u32) -> u32 {
    width / 2 + width % 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_radius_rounds_up() {
        assert_eq!(dot_radius_for(1), 1);
        assert_eq!(dot_radius_for(2), 1);
        assert_eq!(dot_radius_for(3), 2);
        assert_eq!(dot_radius_for(10), 5);
        assert_eq!(dot_radius_for(11), 6);
    }

    #[test]
    fn test_pen_width_validation() {
        assert!(validate_pen_width(0).is_err());
        assert_eq!(validate_pen_width(3).unwrap(), 3);
    }

    #[test]
    fn test_dimension_validation() {
        assert!(validate_dimensions(800, 500).is_ok());
        assert!(validate_dimensions(0, 500).is_err());
        assert!(validate_dimensions(800, MAX_SURFACE_DIMENSION + 1).is_err());
    }
}
