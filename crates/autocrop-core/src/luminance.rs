//! Brightness weighting used by the content detector.
//!
//! Detection treats dark pixels as foreground "ink" on a light background,
//! so the channel weights are near-equal rather than perceptual: color casts
//! should not change how much a pixel counts toward the projections.

/// Weight of the red channel in brightness.
pub const LUMA_R: f64 = 0.333;

/// Weight of the green channel in brightness.
pub const LUMA_G: f64 = 0.334;

/// Weight of the blue channel in brightness.
pub const LUMA_B: f64 = 0.333;

/// Brightness of an 8-bit RGB pixel in the range 0.0 to 1.0.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    (LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64) / 255.0
}

/// Ink contribution of a pixel: inverse brightness, higher for darker pixels.
#[inline]
pub fn ink(r: u8, g: u8, b: u8) -> f64 {
    1.0 - luminance(r, g, b)
}
