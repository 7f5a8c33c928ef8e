//! Color samples as points in normalized RGB space.

use std::ops::{Add, Div};

use serde::{Deserialize, Serialize};

use crate::color::{ColorSink, ColorSource};

/// A color sample in `[0, 1]^3`.
///
/// Equality is exact per component. Samples derived from 8-bit channels take a
/// finite set of values, so no tolerance is applied.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Red channel.
    pub x: f32,
    /// Green channel.
    pub y: f32,
    /// Blue channel.
    pub z: f32,
}

impl Point {
    /// The origin, also used as the substitute for unreadable color samples.
    pub const ZERO: Point = Point {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a point from its three components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Build a point from an external color.
    ///
    /// A source that cannot report its components yields [`Point::ZERO`].
    pub fn from_color<C: ColorSource + ?Sized>(color: &C) -> Self {
        match color.components() {
            Some([r, g, b]) => Self::new(r, g, b),
            None => {
                tracing::trace!("unreadable color sample replaced by zero point");
                Self::ZERO
            }
        }
    }

    /// Convert back to an external color, alpha fixed to opaque.
    pub fn to_color<C: ColorSink>(&self) -> C {
        C::from_components(self.x, self.y, self.z, 1.0)
    }

    /// Sum of squared component differences.
    #[inline]
    pub fn distance_squared(&self, other: &Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Components as an array, in `x, y, z` order.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Point {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Div<f32> for Point {
    type Output = Point;

    #[inline]
    fn div(self, rhs: f32) -> Point {
        Point::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Div<usize> for Point {
    type Output = Point;

    #[inline]
    fn div(self, rhs: usize) -> Point {
        self / rhs as f32
    }
}

impl std::iter::Sum for Point {
    fn sum<I: Iterator<Item = Point>>(iter: I) -> Point {
        iter.fold(Point::ZERO, Add::add)
    }
}

impl<'a> std::iter::Sum<&'a Point> for Point {
    fn sum<I: Iterator<Item = &'a Point>>(iter: I) -> Point {
        iter.copied().sum()
    }
}
