/// Largest accepted surface side.
pub const MAX_SURFACE_DIMENSION: u32 = 8192;

/// Bytes per RGBA8 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Prefix of the data URL handed to the submission form.
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";
