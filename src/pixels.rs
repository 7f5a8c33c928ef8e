//! Pixel buffer extraction.
//!
//! Turns a raw 8-bit pixel buffer into clustering points, whatever the channel
//! order of the source. Decoding and resizing happen upstream; callers are
//! expected to bound the pixel count (around 100x100 samples keeps the
//! assignment pass cheap).

use serde::{Deserialize, Serialize};

use crate::color::normalize_channel;
use crate::error::{Error, Result};
use crate::point::Point;

/// Channel order of an 8-bit pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelLayout {
    /// `r, g, b`
    Rgb,
    /// `r, g, b, a`
    #[default]
    Rgba,
    /// `b, g, r, a`
    Bgra,
    /// `a, r, g, b`
    Argb,
}

impl PixelLayout {
    /// Bytes per pixel.
    pub const fn stride(self) -> usize {
        match self {
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba | PixelLayout::Bgra | PixelLayout::Argb => 4,
        }
    }

    /// Byte offsets of red, green and blue within one pixel.
    const fn rgb_offsets(self) -> [usize; 3] {
        match self {
            PixelLayout::Rgb | PixelLayout::Rgba => [0, 1, 2],
            PixelLayout::Bgra => [2, 1, 0],
            PixelLayout::Argb => [1, 2, 3],
        }
    }
}

/// Extract one normalized point per pixel. Alpha is ignored.
pub fn points_from_pixels(buf: &[u8], layout: PixelLayout) -> Result<Vec<Point>> {
    let stride = layout.stride();
    if buf.len() % stride != 0 {
        return Err(Error::PixelBuffer {
            len: buf.len(),
            stride,
        });
    }

    let [r, g, b] = layout.rgb_offsets();
    Ok(buf
        .chunks_exact(stride)
        .map(|px| {
            Point::new(
                normalize_channel(px[r]),
                normalize_channel(px[g]),
                normalize_channel(px[b]),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_agree_on_the_same_color() {
        let expected = Point::new(1.0, normalize_channel(128), 0.0);

        let rgb = points_from_pixels(&[255, 128, 0], PixelLayout::Rgb).unwrap();
        let rgba = points_from_pixels(&[255, 128, 0, 255], PixelLayout::Rgba).unwrap();
        let bgra = points_from_pixels(&[0, 128, 255, 255], PixelLayout::Bgra).unwrap();
        let argb = points_from_pixels(&[255, 255, 128, 0], PixelLayout::Argb).unwrap();

        for pts in [rgb, rgba, bgra, argb] {
            assert_eq!(pts, vec![expected]);
        }
    }

    #[test]
    fn one_point_per_pixel() {
        let buf = [0u8, 0, 0, 255, 255, 255, 255, 255];
        let pts = points_from_pixels(&buf, PixelLayout::Rgba).unwrap();
        assert_eq!(pts, vec![Point::ZERO, Point::new(1.0, 1.0, 1.0)]);
    }

    #[test]
    fn empty_buffer_is_empty() {
        assert!(points_from_pixels(&[], PixelLayout::Bgra).unwrap().is_empty());
    }

    #[test]
    fn ragged_buffer_is_rejected() {
        let err = points_from_pixels(&[1, 2, 3, 4, 5], PixelLayout::Rgba).unwrap_err();
        assert_eq!(err, Error::PixelBuffer { len: 5, stride: 4 });
    }
}
