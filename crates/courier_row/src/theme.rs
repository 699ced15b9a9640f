//! Explicit colour palette handed to rows at construction.

use serde::{Deserialize, Serialize};

/// An sRGB colour packed as `0xRRGGBBAA`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("#{:08x}", _0)]
pub struct Color(pub u32);

impl Color {
    /// Opaque colour from red, green and blue components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 0xff)
    }

    /// Alpha component.
    pub fn alpha(&self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

/// Colours used by the label/text row.
///
/// Rows never read a global appearance; callers pass the palette in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowTheme {
    /// Label, icon and launch-button background colour
    pub accent: Color,
    /// Body text colour
    pub text: Color,
    /// Row background
    pub background: Color,
    /// Separator colour
    pub border: Color,
    /// Link colour
    pub link: Color,
    /// Text drawn on top of the accent colour
    pub under_selected: Color,
}

impl Default for RowTheme {
    fn default() -> Self {
        Self {
            accent: Color::rgb(0x2a, 0x9e, 0xf1),
            text: Color::rgb(0x00, 0x00, 0x00),
            background: Color::rgb(0xff, 0xff, 0xff),
            border: Color::rgb(0xea, 0xea, 0xea),
            link: Color::rgb(0x2a, 0x9e, 0xf1),
            under_selected: Color::rgb(0xff, 0xff, 0xff),
        }
    }
}
