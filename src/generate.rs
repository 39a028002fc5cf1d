//! Procedural field generators.
//!
//! Every generator is total over the plane and allocation-free per
//! evaluation. The two-valued generators are generic over the value
//! domain, so the same `checker` builds a boolean region, a blend
//! mask, or a color image depending on what it is fed.

use std::f64::consts::TAU;

use crate::field::Field;
use crate::foundation::geom::{Point, to_polar};
use crate::kernel::compose;

/// A field that yields `value` everywhere.
pub fn constant<T>(value: T) -> Field<T>
where
    T: Clone + Send + Sync + 'static,
{
    Field::new(move |_| value.clone())
}

/// A filled disc: `inner` where the Euclidean distance from `center` is
/// at most `radius` (boundary inclusive), `outer` elsewhere.
pub fn circle<T>(center: Point, radius: f64, inner: T, outer: T) -> Field<T>
where
    T: Clone + Send + Sync + 'static,
{
    Field::new(move |p: Point| {
        if p.distance(center) <= radius {
            inner.clone()
        } else {
            outer.clone()
        }
    })
}

/// An axis-aligned checkerboard with square cells of side `size`.
///
/// A point belongs to cell `(floor(x/size), floor(y/size))`; cells whose
/// index sum is even yield `a`, the rest yield `b`. The cell containing
/// the origin is an `a` cell.
pub fn checker<T>(size: f64, a: T, b: T) -> Field<T>
where
    T: Clone + Send + Sync + 'static,
{
    Field::new(move |p: Point| {
        let cells = (p.x / size).floor() + (p.y / size).floor();
        if cells as i64 % 2 == 0 { a.clone() } else { b.clone() }
    })
}

/// A checkerboard bent around the origin: `sectors` angular repeats per
/// turn crossed with radial bands of width `size`.
///
/// The point is remapped to `(radius, angle * sectors * size / 2π)` and
/// the result is read off an ordinary `checker(size, ..)`, so adjacent
/// sectors and adjacent rings alternate values.
pub fn polar_checker<T>(size: f64, sectors: u32, a: T, b: T) -> Field<T>
where
    T: Clone + Send + Sync + 'static,
{
    let remap = move |p: Point| {
        let polar = to_polar(p);
        Point::new(polar.radius, polar.angle * f64::from(sectors) * size / TAU)
    };
    Field::new(compose((remap, checker(size, a, b).into_fn())))
}

/// Concentric rings around `center`, each `width` wide. The innermost
/// ring (distance below `width`) yields `a` and neighbours alternate.
pub fn rings<T>(center: Point, width: f64, a: T, b: T) -> Field<T>
where
    T: Clone + Send + Sync + 'static,
{
    Field::new(move |p: Point| {
        let band = (p.distance(center) / width).floor();
        if band as i64 % 2 == 0 { a.clone() } else { b.clone() }
    })
}

/// A vertical band of the given `width` centered on the y axis:
/// `inner` where `|x| <= width / 2` (boundary inclusive), `outer`
/// elsewhere.
pub fn vertical_stripe<T>(width: f64, inner: T, outer: T) -> Field<T>
where
    T: Clone + Send + Sync + 'static,
{
    Field::new(move |p: Point| {
        if p.x.abs() <= width / 2.0 {
            inner.clone()
        } else {
            outer.clone()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_ignores_the_point() {
        let f = constant(42);
        assert_eq!(f.eval(Point::new(0.0, 0.0)), 42);
        assert_eq!(f.eval(Point::new(-1e9, 3.5)), 42);
    }

    #[test]
    fn circle_includes_its_boundary() {
        let f = circle(Point::ORIGIN, 5.0, 'i', 'o');
        // (3, 4) sits exactly on the radius-5 boundary.
        assert_eq!(f.eval(Point::new(3.0, 4.0)), 'i');
        assert_eq!(f.eval(Point::new(3.0, 4.001)), 'o');
        assert_eq!(f.eval(Point::ORIGIN), 'i');
    }

    #[test]
    fn circle_measures_distance_from_its_center() {
        let f = circle(Point::new(10.0, -2.0), 1.0, true, false);
        assert!(f.eval(Point::new(10.5, -2.0)));
        assert!(!f.eval(Point::new(10.0, 0.0)));
    }

    #[test]
    fn checker_alternates_cells_and_starts_on_a() {
        let f = checker(1.0, 'a', 'b');
        assert_eq!(f.eval(Point::new(0.5, 0.5)), 'a');
        assert_eq!(f.eval(Point::new(1.5, 0.5)), 'b');
        assert_eq!(f.eval(Point::new(1.5, 1.5)), 'a');
        assert_eq!(f.eval(Point::new(0.5, 1.5)), 'b');
    }

    #[test]
    fn checker_parity_extends_across_negative_coordinates() {
        let f = checker(1.0, 'a', 'b');
        // floor(-0.5) = -1, so one step left of the origin flips parity.
        assert_eq!(f.eval(Point::new(-0.5, 0.5)), 'b');
        assert_eq!(f.eval(Point::new(-0.5, -0.5)), 'a');
        assert_eq!(f.eval(Point::new(-1.5, -0.5)), 'b');
    }

    #[test]
    fn checker_scales_with_its_cell_size() {
        let f = checker(2.5, 0u8, 1u8);
        assert_eq!(f.eval(Point::new(1.0, 1.0)), 0);
        assert_eq!(f.eval(Point::new(3.0, 1.0)), 1);
    }

    #[test]
    fn polar_checker_alternates_adjacent_sectors() {
        let f = polar_checker(1.0, 4, 'a', 'b');
        // Both points sit in the innermost radial band; the left one is
        // two and a half quarter-turns further around.
        assert_eq!(f.eval(Point::new(0.5, 0.2)), 'a');
        assert_eq!(f.eval(Point::new(-0.5, 0.2)), 'b');
    }

    #[test]
    fn polar_checker_alternates_adjacent_radial_bands() {
        let f = polar_checker(1.0, 4, 'a', 'b');
        // Same angle as (0.5, 0.2) but one band further out.
        assert_eq!(f.eval(Point::new(1.5, 0.6)), 'b');
    }

    #[test]
    fn rings_alternate_outward_from_the_center() {
        let c = Point::new(1.0, 1.0);
        let f = rings(c, 1.0, 'a', 'b');
        assert_eq!(f.eval(Point::new(1.5, 1.0)), 'a');
        assert_eq!(f.eval(Point::new(2.5, 1.0)), 'b');
        assert_eq!(f.eval(Point::new(3.5, 1.0)), 'a');
        // A band boundary belongs to the outer band.
        assert_eq!(f.eval(Point::new(2.0, 1.0)), 'b');
    }

    #[test]
    fn vertical_stripe_is_centered_and_boundary_inclusive() {
        let f = vertical_stripe(2.0, true, false);
        assert!(f.eval(Point::new(0.0, 17.0)));
        assert!(f.eval(Point::new(1.0, -3.0)));
        assert!(f.eval(Point::new(-1.0, 0.0)));
        assert!(!f.eval(Point::new(1.001, 0.0)));
    }
}
