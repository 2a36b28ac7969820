//! Pen style: palette, pen width and active tool
//!
//! The style is only changed by the page's controls (swatches, width slider,
//! tool toggle). Draw events copy what they need from it when a gesture
//! begins, so later style changes never affect recorded events.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{Rgba, Tool};
use crate::validation::{ValidationError, dot_radius_for, validate_pen_width};

/// The fixed swatch palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaletteColor {
    #[default]
    Black,
    White,
    Brown,
    Red,
    Orange,
    Yellow,
    ElectricGreen,
    Green,
    Teal,
    LightBlue,
    RoyalBlue,
    Blue,
    Purple,
    Magenta,
    Pink,
}

impl PaletteColor {
    /// Every swatch, in display order
    pub const ALL: [PaletteColor; 15] = [
        PaletteColor::Black,
        PaletteColor::White,
        PaletteColor::Brown,
        PaletteColor::Red,
        PaletteColor::Orange,
        PaletteColor::Yellow,
        PaletteColor::ElectricGreen,
        PaletteColor::Green,
        PaletteColor::Teal,
        PaletteColor::LightBlue,
        PaletteColor::RoyalBlue,
        PaletteColor::Blue,
        PaletteColor::Purple,
        PaletteColor::Magenta,
        PaletteColor::Pink,
    ];

    /// Opaque RGBA8 value
    pub const fn rgba(self) -> Rgba {
        match self {
            PaletteColor::Black => [0x00, 0x00, 0x00, 0xFF],
            PaletteColor::White => [0xFF, 0xFF, 0xFF, 0xFF],
            PaletteColor::Brown => [0x98, 0x76, 0x54, 0xFF],
            PaletteColor::Red => [0xFF, 0x00, 0x00, 0xFF],
            PaletteColor::Orange => [0xFF, 0x7F, 0x00, 0xFF],
            PaletteColor::Yellow => [0xFF, 0xFF, 0x00, 0xFF],
            PaletteColor::ElectricGreen => [0x7F, 0xFF, 0x00, 0xFF],
            PaletteColor::Green => [0x00, 0xFF, 0x00, 0xFF],
            PaletteColor::Teal => [0x00, 0xFF, 0x7F, 0xFF],
            PaletteColor::LightBlue => [0x00, 0xFF, 0xFF, 0xFF],
            PaletteColor::RoyalBlue => [0x00, 0x7F, 0xFF, 0xFF],
            PaletteColor::Blue => [0x00, 0x00, 0xFF, 0xFF],
            PaletteColor::Purple => [0x7F, 0x00, 0xFF, 0xFF],
            PaletteColor::Magenta => [0xFF, 0x00, 0xFF, 0xFF],
            PaletteColor::Pink => [0xFF, 0x00, 0x7F, 0xFF],
        }
    }

    /// Swatch name as used by the page controls
    pub const fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "black",
            PaletteColor::White => "white",
            PaletteColor::Brown => "brown",
            PaletteColor::Red => "red",
            PaletteColor::Orange => "orange",
            PaletteColor::Yellow => "yellow",
            PaletteColor::ElectricGreen => "electric-green",
            PaletteColor::Green => "green",
            PaletteColor::Teal => "teal",
            PaletteColor::LightBlue => "light-blue",
            PaletteColor::RoyalBlue => "royal-blue",
            PaletteColor::Blue => "blue",
            PaletteColor::Purple => "purple",
            PaletteColor::Magenta => "magenta",
            PaletteColor::Pink => "pink",
        }
    }

    /// CSS hex string, e.g. `#987654`
    pub fn hex(self) -> String {
        let [r, g, b, _] = self.rgba();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Look up a swatch by name or by `#RRGGBB`
    ///
    /// Names are matched case-insensitively and ignore `-`, `_` and spaces,
    /// so `"ElectricGreen"`, `"electric-green"` and `"ELECTRIC_GREEN"` agree.
    pub fn from_name(name: &str) -> Result<Self, ValidationError> {
        let trimmed = name.trim();
        if trimmed.starts_with('#') {
            return Self::ALL
                .into_iter()
                .find(|c| c.hex().eq_ignore_ascii_case(trimmed))
                .ok_or_else(|| ValidationError::UnknownColor(name.to_string()));
        }

        let key = normalize(trimmed);
        Self::ALL
            .into_iter()
            .find(|c| normalize(c.name()) == key)
            .ok_or_else(|| ValidationError::UnknownColor(name.to_string()))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for PaletteColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated pen width in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenWidth(u32);

impl PenWidth {
    pub fn new(width: u32) -> Result<Self, ValidationError> {
        validate_pen_width(width).map(Self)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Radius of the disc drawn for a tap
    #[inline]
    pub fn dot_radius(self) -> u32 {
        dot_radius_for(self.0)
    }

    /// Size readout shown next to the width slider
    pub fn label(self) -> String {
        format!("{} px", self.0)
    }
}

/// Current tool, color and pen width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleState {
    pub(crate) tool: Tool,
    pub(crate) color: PaletteColor,
    pub(crate) pen_width: PenWidth,
}

impl StyleState {
    pub fn new(tool: Tool, color: PaletteColor, pen_width: PenWidth) -> Self {
        Self {
            tool,
            color,
            pen_width,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn pen_width(&self) -> PenWidth {
        self.pen_width
    }

    pub fn dot_radius(&self) -> u32 {
        self.pen_width.dot_radius()
    }

    pub fn set_color(&mut self, color: PaletteColor) {
        self.color = color;
    }

    pub fn set_pen_width(&mut self, width: u32) -> Result<(), ValidationError> {
        self.pen_width = PenWidth::new(width)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_hex_values() {
        assert_eq!(PaletteColor::Black.hex(), "#000000");
        assert_eq!(PaletteColor::Brown.hex(), "#987654");
        assert_eq!(PaletteColor::RoyalBlue.hex(), "#007FFF");
        assert_eq!(PaletteColor::Pink.rgba(), [0xFF, 0x00, 0x7F, 0xFF]);
    }

    #[test]
    fn test_palette_lookup() {
        assert_eq!(
            PaletteColor::from_name("ElectricGreen").unwrap(),
            PaletteColor::ElectricGreen
        );
        assert_eq!(
            "light_blue".parse::<PaletteColor>().unwrap(),
            PaletteColor::LightBlue
        );
        assert_eq!(
            PaletteColor::from_name("#ff00ff").unwrap(),
            PaletteColor::Magenta
        );
        assert!(matches!(
            PaletteColor::from_name("chartreuse"),
            Err(ValidationError::UnknownColor(_))
        ));
        assert!(PaletteColor::from_name("#123456").is_err());
    }

    #[test]
    fn test_every_name_round_trips() {
        for color in PaletteColor::ALL {
            assert_eq!(PaletteColor::from_name(color.name()).unwrap(), color);
            assert_eq!(PaletteColor::from_name(&color.hex()).unwrap(), color);
        }
    }

    #[test]
    fn test_pen_width() {
        let width = PenWidth::new(3).unwrap();
        assert_eq!(width.dot_radius(), 2);
        assert_eq!(width.label(), "3 px");
        assert!(PenWidth::new(0).is_err());
    }

    #[test]
    fn test_set_pen_width_keeps_old_value_on_error() {
        let mut style = StyleState::new(Tool::Draw, PaletteColor::Red, PenWidth::new(4).unwrap());
        assert!(style.set_pen_width(0).is_err());
        assert_eq!(style.pen_width().get(), 4);

        style.set_pen_width(9).unwrap();
        assert_eq!(style.dot_radius(), 5);
    }
}
