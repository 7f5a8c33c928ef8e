//! Boundary between platform colors and clustering points.
//!
//! The clustering core never touches an imaging library. Callers hand it colors
//! through [`ColorSource`] and take results back through [`ColorSink`]. Two small
//! adapters are provided: [`Rgb8`] for quantized 8-bit samples and [`Rgba`] for
//! floating-point colors.

use serde::{Deserialize, Serialize};

/// A color that can report normalized red, green and blue components.
pub trait ColorSource {
    /// Components in `[0, 1]`, or `None` if this color cannot be decomposed.
    fn components(&self) -> Option<[f32; 3]>;
}

/// A color that can be built from normalized components.
pub trait ColorSink: Sized {
    /// Build a color from red, green, blue and alpha in `[0, 1]`.
    fn from_components(red: f32, green: f32, blue: f32, alpha: f32) -> Self;
}

/// Convert an 8-bit channel sample into `[0, 1]`.
#[inline]
pub fn normalize_channel(sample: u8) -> f32 {
    f32::from(sample) / 255.0
}

/// Convert a normalized channel back to 8 bits, clamping out-of-range values.
#[inline]
pub fn quantize_channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl ColorSource for Rgb8 {
    fn components(&self) -> Option<[f32; 3]> {
        Some([
            normalize_channel(self.r),
            normalize_channel(self.g),
            normalize_channel(self.b),
        ])
    }
}

impl ColorSink for Rgb8 {
    fn from_components(red: f32, green: f32, blue: f32, _alpha: f32) -> Self {
        Self::new(
            quantize_channel(red),
            quantize_channel(green),
            quantize_channel(blue),
        )
    }
}

impl ColorSource for [u8; 3] {
    fn components(&self) -> Option<[f32; 3]> {
        Rgb8::new(self[0], self[1], self[2]).components()
    }
}

/// A floating-point RGBA color.
///
/// Only colors with finite components inside `[0, 1]` can be decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub red: f32,
    /// Green channel.
    pub green: f32,
    /// Blue channel.
    pub blue: f32,
    /// Alpha channel.
    pub alpha: f32,
}

impl Rgba {
    /// Create a color from its channels.
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Whether every channel is finite and inside `[0, 1]`.
    pub fn is_valid(&self) -> bool {
        [self.red, self.green, self.blue, self.alpha]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

impl ColorSource for Rgba {
    fn components(&self) -> Option<[f32; 3]> {
        self.is_valid().then_some([self.red, self.green, self.blue])
    }
}

impl ColorSink for Rgba {
    fn from_components(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self::new(red, green, blue, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_roundtrip_is_exact_for_all_bytes() {
        for b in 0..=255u8 {
            assert_eq!(quantize_channel(normalize_channel(b)), b);
        }
    }

    #[test]
    fn quantize_clamps() {
        assert_eq!(quantize_channel(-0.3), 0);
        assert_eq!(quantize_channel(1.7), 255);
        assert_eq!(quantize_channel(f32::NAN), 0);
    }

    #[test]
    fn rgba_validity() {
        assert!(Rgba::new(0.0, 0.5, 1.0, 1.0).is_valid());
        assert!(!Rgba::new(0.0, 0.5, 1.0, 1.1).is_valid());
        assert!(!Rgba::new(f32::INFINITY, 0.5, 1.0, 1.0).is_valid());
        assert!(Rgba::new(f32::NAN, 0.0, 0.0, 1.0).components().is_none());
    }

    #[test]
    fn byte_array_source() {
        assert_eq!([0u8, 255, 0].components(), Some([0.0, 1.0, 0.0]));
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(Rgb8::new(255, 128, 0).to_hex(), "#ff8000");
    }
}
