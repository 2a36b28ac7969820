//! Image export for the submission form
//!
//! The finished drawing is handed to the game as a PNG wrapped in a
//! base64 data URL, written into a hidden form field on submit.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;
use tracing::debug;

use crate::constants::PNG_DATA_URL_PREFIX;
use crate::surface::RasterSurface;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Encode the surface as an RGBA8 PNG
pub fn encode_png(surface: &RasterSurface) -> Result<Vec<u8>, ExportError> {
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        surface.as_bytes(),
        surface.width(),
        surface.height(),
        ExtendedColorType::Rgba8,
    )?;
    debug!(
        "Encoded {}x{} surface as PNG ({} bytes)",
        surface.width(),
        surface.height(),
        png.len()
    );
    Ok(png)
}

/// Encode the surface as a `data:image/png;base64,...` URL
pub fn to_data_url(surface: &RasterSurface) -> Result<String, ExportError> {
    let png = encode_png(surface)?;
    let mut url = String::with_capacity(PNG_DATA_URL_PREFIX.len() + png.len() * 4 / 3 + 4);
    url.push_str(PNG_DATA_URL_PREFIX);
    STANDARD.encode_string(&png, &mut url);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    #[test]
    fn test_png_decodes_to_same_pixels() {
        let mut surface = RasterSurface::filled(24, 16, [255, 255, 255, 255]).unwrap();
        surface.stroke_segment(Point::new(2.0, 2.0), Point::new(20.0, 12.0), 3.0, [255, 0, 0, 255]);

        let png = encode_png(&surface).unwrap();
        assert_eq!(&png[1..4], b"PNG");

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (24, 16));
        assert_eq!(decoded.as_raw().as_slice(), surface.as_bytes());
    }

    #[test]
    fn test_data_url() {
        let surface = RasterSurface::filled(4, 4, [0, 0, 0, 255]).unwrap();
        let url = to_data_url(&surface).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));

        let payload = &url[PNG_DATA_URL_PREFIX.len()..];
        let png = STANDARD.decode(payload).unwrap();
        assert_eq!(png, encode_png(&surface).unwrap());
    }
}
