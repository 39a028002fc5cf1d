//! Geometric transforms.
//!
//! Each transform remaps the sample point and defers to the original
//! field, so it is literally `compose((remap, field))`. Nothing is
//! evaluated until a consumer samples the result.

use crate::field::Field;
use crate::foundation::geom::{Point, Polar, Vec2, from_polar, to_polar};
use crate::kernel::compose;

/// Rotate a field by `phi` radians counterclockwise about the origin.
///
/// Sampling the result at `p` fetches the sample that was at `p` rotated
/// by `-phi`, which makes the output appear rotated by `+phi`.
pub fn rotate<T: 'static>(field: Field<T>, phi: f64) -> Field<T> {
    let remap = move |p: Point| {
        let polar = to_polar(p);
        from_polar(Polar::new(polar.radius, polar.angle - phi))
    };
    Field::new(compose((remap, field.into_fn())))
}

/// Shift a field by the offset `v`.
pub fn translate<T: 'static>(field: Field<T>, v: Vec2) -> Field<T> {
    let remap = move |p: Point| p - v;
    Field::new(compose((remap, field.into_fn())))
}

/// Scale a field by `s` about the origin.
///
/// `s` must be non-zero: a zero factor divides by zero, and the resulting
/// non-finite coordinates propagate through evaluation unchecked.
pub fn scale<T: 'static>(field: Field<T>, s: f64) -> Field<T> {
    let remap = move |p: Point| Point::new(p.x / s, p.y / s);
    Field::new(compose((remap, field.into_fn())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn x_gradient() -> Field<f64> {
        Field::new(|p: Point| p.x)
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn rotate_zero_is_observationally_identity() {
        let f = rotate(x_gradient(), 0.0);
        for &(x, y) in &[(1.0, 2.0), (-0.5, 0.25), (3.0, -4.0)] {
            assert_close(f.eval(Point::new(x, y)), x);
        }
    }

    #[test]
    fn rotate_quarter_turn_fetches_from_the_unrotated_point() {
        let f = rotate(x_gradient(), FRAC_PI_2);
        // (0, 1) rotated by -π/2 is (1, 0), where the gradient reads 1.
        assert_close(f.eval(Point::new(0.0, 1.0)), 1.0);
        assert_close(f.eval(Point::new(0.0, -1.0)), -1.0);
    }

    #[test]
    fn translate_shifts_the_sample_point() {
        let f = translate(x_gradient(), Vec2::new(2.0, 5.0));
        assert_eq!(f.eval(Point::new(2.0, 5.0)), 0.0);
        assert_eq!(f.eval(Point::new(3.5, 0.0)), 1.5);
    }

    #[test]
    fn nested_translates_sum_their_offsets() {
        let v1 = Vec2::new(1.0, -2.0);
        let v2 = Vec2::new(0.5, 4.0);
        let nested = translate(translate(x_gradient(), v1), v2);
        let flat = translate(x_gradient(), v1 + v2);
        for &(x, y) in &[(0.0, 0.0), (1.25, -3.0), (-7.0, 2.0)] {
            let p = Point::new(x, y);
            assert_eq!(nested.eval(p), flat.eval(p));
        }
    }

    #[test]
    fn nested_scales_multiply_their_factors() {
        let nested = scale(scale(x_gradient(), 2.0), 4.0);
        let flat = scale(x_gradient(), 8.0);
        for &(x, y) in &[(8.0, 0.0), (-16.0, 1.0), (2.0, 2.0)] {
            let p = Point::new(x, y);
            assert_eq!(nested.eval(p), flat.eval(p));
        }
    }

    #[test]
    fn scale_divides_the_sample_point() {
        let f = scale(x_gradient(), 2.0);
        assert_eq!(f.eval(Point::new(3.0, 0.0)), 1.5);
    }
}
