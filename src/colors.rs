//! Color type and named colors.
//!
//! Colors are 8-bit per channel, which is what single-pixel drivers such as
//! WS2812 take natively. HSV helpers are provided because hue rotations are
//! easier to think about than raw channel values.

use palette::{FromColor, Hsv, Srgb};

/// An 8-bit RGB color.
pub type Color = Srgb<u8>;

/// Creates a color from red, green and blue channel values.
#[inline]
pub const fn rgb(red: u8, green: u8, blue: u8) -> Color {
    Srgb::new(red, green, blue)
}

pub const BLACK: Color = rgb(0, 0, 0);
pub const RED: Color = rgb(255, 0, 0);
pub const GREEN: Color = rgb(0, 255, 0);
pub const BLUE: Color = rgb(0, 0, 255);
pub const YELLOW: Color = rgb(255, 255, 0);
pub const WHITE: Color = rgb(255, 255, 255);

/// Creates a color from HSV (Hue, Saturation, Value) components.
///
/// Hue is in degrees, saturation and value in 0.0-1.0.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Color {
    let hsv = Hsv::new(hue, saturation, value);
    Srgb::<f32>::from_color(hsv).into_format()
}

/// Creates a color from hue only (full saturation and value).
#[inline]
pub fn hue(hue: f32) -> Color {
    hsv(hue, 1.0, 1.0)
}
