//! RGB color helpers.
//!
//! Colors share the `Vec3` representation (`x`, `y`, `z` hold red, green,
//! blue). Intermediate values may leave `[0, 1]`; they are clamped when
//! light contributions are summed and again when packed for output.

use crate::{Interval, Vec3};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

pub const BLACK: Color = Color::ZERO;
pub const WHITE: Color = Color::ONE;

/// Clamp every channel to `[0, 1]`.
#[inline]
pub fn clamp(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

/// Add two colors, clamping the sum per channel.
#[inline]
pub fn add_clamped(a: Color, b: Color) -> Color {
    clamp(a + b)
}

/// Linear interpolation: `alpha = 0` yields `a`, `alpha = 1` yields `b`.
#[inline]
pub fn lerp(a: Color, b: Color, alpha: f32) -> Color {
    a * (1.0 - alpha) + b * alpha
}

/// Convert one channel to 8 bits by truncating multiplication.
#[inline]
pub fn channel_to_u8(value: f32) -> u8 {
    (Interval::UNIT.clamp(value) * 255.0) as u8
}

/// Pack a color as `0x00RRGGBB`.
pub fn pack_rgb(color: Color) -> u32 {
    let red = channel_to_u8(color.x) as u32;
    let green = channel_to_u8(color.y) as u32;
    let blue = channel_to_u8(color.z) as u32;
    (red << 16) | (green << 8) | blue
}

/// Split a packed `0x00RRGGBB` value back into 8-bit channels.
pub fn unpack_rgb(packed: u32) -> [u8; 3] {
    [
        ((packed >> 16) & 0xff) as u8,
        ((packed >> 8) & 0xff) as u8,
        (packed & 0xff) as u8,
    ]
}
