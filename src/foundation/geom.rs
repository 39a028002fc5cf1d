use std::f64::consts::TAU;

pub use kurbo::{Point, Vec2};

/// Polar form of a plane point: radius first, angle second.
///
/// [`to_polar`] always produces a normalized pair (radius >= 0, angle in
/// `[0, 2π)`); [`from_polar`] accepts any finite pair and does not require
/// normalization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polar {
    /// Distance from the origin.
    pub radius: f64,
    /// Angle in radians, measured counterclockwise from the positive x-axis.
    pub angle: f64,
}

impl Polar {
    /// Create a polar pair as given, without normalization.
    pub fn new(radius: f64, angle: f64) -> Self {
        Self { radius, angle }
    }
}

/// Convert a Cartesian point to polar form.
///
/// The radius is non-negative and the angle lies in `[0, 2π)`. The origin
/// has no defined angle; it maps to angle 0.
pub fn to_polar(p: Point) -> Polar {
    let v = p.to_vec2();
    let mut angle = v.atan2().rem_euclid(TAU);
    if angle >= TAU {
        // rem_euclid rounds tiny negative angles up to exactly 2π.
        angle = 0.0;
    }
    Polar {
        radius: v.hypot(),
        angle,
    }
}

/// Convert a polar pair back to a Cartesian point.
///
/// Inverse of [`to_polar`] up to floating-point tolerance for any finite
/// non-origin point.
pub fn from_polar(polar: Polar) -> Point {
    (Vec2::from_angle(polar.angle) * polar.radius).to_point()
}
