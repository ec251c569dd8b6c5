//! RGB radiance values.
//!
//! `Color` has the same shape as `Vec3` but is kept a distinct type so that
//! radiance never gets mixed up with geometry.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul};

use serde::{Deserialize, Serialize};

/// Real-valued RGB triple.
///
/// Channels are unbounded while light is being accumulated. Use
/// [`Color::clamped`] before writing to an output image.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Zero radiance.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    /// Unit radiance on every channel.
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Pin every channel into `[0, 1]` independently.
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// True if every channel is exactly zero.
    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Largest channel value.
    pub fn max_channel(&self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f64; 3]> for Color {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [f64; 3] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, rhs: Color) {
        *self = *self + rhs;
    }
}

/// Componentwise product (filtering one radiance by another).
impl Mul for Color {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, rhs: f64) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Mul<Color> for f64 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Color {
        rhs * self
    }
}

impl Div<f64> for Color {
    type Output = Color;

    fn div(self, rhs: f64) -> Color {
        Color::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

impl DivAssign<f64> for Color {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl std::iter::Sum for Color {
    fn sum<I: Iterator<Item = Color>>(iter: I) -> Color {
        iter.fold(Color::BLACK, |acc, c| acc + c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_arithmetic() {
        let a = Color::new(0.5, 0.25, 1.0);
        let b = Color::new(2.0, 4.0, 0.5);

        assert_eq!(a + b, Color::new(2.5, 4.25, 1.5));
        assert_eq!(a * b, Color::new(1.0, 1.0, 0.5));
        assert_eq!(a * 2.0, Color::new(1.0, 0.5, 2.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Color::new(1.0, 2.0, 0.25));
    }

    #[test]
    fn test_clamp_pins_out_of_range_channels() {
        let c = Color::new(-0.5, 0.4, 3.0).clamped();
        assert_eq!(c, Color::new(0.0, 0.4, 1.0));
    }

    #[test]
    fn test_clamp_is_idempotent() {
        let samples = [
            Color::new(-1.0, 2.0, 0.5),
            Color::new(0.0, 1.0, 0.999),
            Color::new(1e9, -1e9, 0.25),
        ];
        for c in samples {
            let once = c.clamped();
            assert_eq!(once, once.clamped());
        }
    }

    #[test]
    fn test_clamp_leaves_in_range_unchanged() {
        let c = Color::new(0.0, 0.5, 1.0);
        assert_eq!(c.clamped(), c);
    }

    #[test]
    fn test_color_sum() {
        let total: Color = vec![Color::splat(0.25); 4].into_iter().sum();
        assert_eq!(total, Color::WHITE);
    }

    #[test]
    fn test_color_serde_as_array() {
        let c: Color = serde_json::from_str("[0.1, 0.2, 0.3]").unwrap();
        assert_eq!(c, Color::new(0.1, 0.2, 0.3));
    }
}
